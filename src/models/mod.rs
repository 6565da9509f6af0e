//! Wire models for mbmanager entities.
//!
//! These structs mirror the JSON bodies exchanged with the backup
//! orchestration service:
//!
//! - `Host`: MySQL source hosts
//! - `Task`: scheduled backup tasks
//! - `Storage`: backup storage targets (local, s3, oss, nas, ssh)
//! - `Notification`: notification channels (email, dingtalk, wecom, webhook)
//! - `BackupLog`: per-run backup log entries
//! - `User`: console accounts
//! - Response envelopes: `DashboardStats`, `DiskSpace`, `TestResult`,
//!   `MessageResponse`, `LogPage`

pub mod dashboard;
pub mod host;
pub mod log;
pub mod notification;
pub mod storage;
pub mod task;
pub mod user;

pub use dashboard::DashboardStats;
pub use host::Host;
pub use log::{BackupLog, LogPage, LogQuery, PageQuery};
pub use notification::Notification;
pub use storage::{DiskSpace, Storage};
pub use task::Task;
pub use user::{LoginRequest, LoginResponse, User};

use serde::{Deserialize, Serialize};

/// Generic `{"message": ...}` acknowledgement returned by mutating
/// endpoints (delete, run, logout).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Result of a connectivity/validation probe (`/hosts/:id/test`,
/// `/storages/:id/test`, `/notifications/:id/test`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Databases discovered on a successful host probe.
    #[serde(default)]
    pub databases: Vec<String>,
    /// Server version reported by a successful host probe.
    #[serde(default)]
    pub version: Option<String>,
}
