use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Task;

/// One backup run as recorded by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupLog {
    pub id: u64,
    pub task_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    #[serde(default)]
    pub task_name: String,
    #[serde(default)]
    pub host_name: String,
    #[serde(default)]
    pub databases: String,
    #[serde(default)]
    pub backup_type: String,
    /// running, success or failed.
    pub status: String,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// Total run time in seconds.
    #[serde(default)]
    pub duration: i64,
    /// Dump phase in seconds.
    #[serde(default)]
    pub backup_time: i64,
    /// Transfer phase in seconds.
    #[serde(default)]
    pub transfer_time: i64,
    #[serde(default)]
    pub file_path: String,
    /// Artifact size in bytes.
    #[serde(default)]
    pub file_size: i64,
    #[serde(default)]
    pub storage_type: String,
    #[serde(default)]
    pub storage_name: String,
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Paginated log listing envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogPage {
    #[serde(default)]
    pub logs: Vec<BackupLog>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

/// Pagination parameters for per-task log retrieval.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PageQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }
}

/// Filter and pagination parameters for the global log listing.
/// Unset fields are omitted from the query string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<String>,
    /// Substring match on the task name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
    /// Substring match on the host name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    /// Inclusive lower bound on `start_time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Inclusive upper bound on `start_time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}
