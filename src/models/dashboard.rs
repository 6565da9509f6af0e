use serde::{Deserialize, Serialize};

/// Aggregate counters shown on the dashboard landing view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub task_count: i64,
    pub host_count: i64,
    pub success_count: i64,
    pub failed_count: i64,
}
