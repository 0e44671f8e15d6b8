//! Response DTOs
//!
//! Serializable views of domain records returned to callers.

use chrono::{DateTime, Utc};
use presence_core::Status;
use serde::Serialize;

/// Presence record as returned to callers
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub user_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnd_end_time: Option<DateTime<Utc>>,
    pub last_activity_at: DateTime<Utc>,
}

impl From<&Status> for StatusResponse {
    fn from(status: &Status) -> Self {
        Self {
            user_id: status.user_id.to_string(),
            status: status.status.to_string(),
            dnd_end_time: status.dnd_end_time,
            last_activity_at: status.last_activity_at,
        }
    }
}

impl From<Status> for StatusResponse {
    fn from(status: Status) -> Self {
        Self::from(&status)
    }
}
