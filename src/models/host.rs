use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A MySQL source host registered with the console.
///
/// The same shape is used for reads and writes; on create the server
/// assigns `id` and the timestamps, so those fields are skipped when
/// they are empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Host {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mysql_version: String,
    /// 1 = enabled, 0 = disabled.
    #[serde(default)]
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

pub(crate) fn is_zero(id: &u64) -> bool {
    *id == 0
}
