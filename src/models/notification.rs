use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::host::is_zero;

/// A notification channel configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,
    pub name: String,
    /// email, dingtalk, wecom or webhook.
    #[serde(rename = "type")]
    pub notification_type: String,
    /// JSON-encoded channel configuration, opaque to the client.
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
