use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::host::is_zero;

/// A backup storage target.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Storage {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,
    pub name: String,
    /// local, s3, oss, nas or ssh.
    #[serde(rename = "type")]
    pub storage_type: String,
    /// JSON-encoded backend configuration, opaque to the client.
    pub config: String,
    #[serde(default)]
    pub is_default: i32,
    #[serde(default)]
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Disk usage for a storage target. Backends that cannot report usage
/// (s3, oss) return all zeroes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiskSpace {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percentage: f64,
}
