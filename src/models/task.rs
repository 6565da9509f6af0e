use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::host::is_zero;
use super::{Host, Storage};

/// A scheduled backup task.
///
/// `databases`, `schedule_config`, `notification_ids` and
/// `backup_options` are JSON-encoded strings; the server stores them
/// opaquely and the views decode them, so the client keeps them as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,
    pub name: String,
    pub host_id: u64,
    /// Populated on reads when the server preloads the relation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<Host>,
    #[serde(default)]
    pub databases: String,
    /// mysqldump, mydumper or xtrabackup.
    pub backup_type: String,
    /// once, daily, weekly, monthly or cron.
    pub schedule_type: String,
    pub schedule_config: String,
    pub storage_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<Storage>,
    #[serde(default)]
    pub retention_days: i32,
    #[serde(default)]
    pub notification_ids: String,
    #[serde(default)]
    pub notify_on_success: i32,
    #[serde(default)]
    pub notify_on_failure: i32,
    #[serde(default)]
    pub backup_options: String,
    /// none, gzip or zip.
    #[serde(default)]
    pub compression_type: String,
    #[serde(default)]
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_run_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
