//! Presence status entity
//!
//! One `Status` record per user: coarse availability plus the optional
//! timed-DND end instant and a last-activity timestamp. Records are created
//! lazily on first write (default Offline) and overwritten, never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// Coarse availability state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// User is online and active
    Online,
    /// User is offline (or invisible)
    Offline,
    /// User is away from keyboard
    Away,
    /// Do not disturb (plain or timed)
    Dnd,
    /// Out of office with the auto responder active
    OutOfOffice,
}

impl Default for StatusKind {
    fn default() -> Self {
        Self::Offline
    }
}

impl StatusKind {
    /// Check if this status should be visible to others
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Offline)
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Offline => write!(f, "offline"),
            Self::Away => write!(f, "away"),
            Self::Dnd => write!(f, "dnd"),
            Self::OutOfOffice => write!(f, "ooo"),
        }
    }
}

impl std::str::FromStr for StatusKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            "away" => Ok(Self::Away),
            "dnd" => Ok(Self::Dnd),
            "ooo" => Ok(Self::OutOfOffice),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}

/// Presence record for a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub user_id: UserId,
    pub status: StatusKind,
    /// End instant for timed DND; `None` for every other status
    pub dnd_end_time: Option<DateTime<Utc>>,
    pub last_activity_at: DateTime<Utc>,
}

impl Status {
    /// Create a fresh record with the given status and no DND window
    #[must_use]
    pub fn new(user_id: UserId, status: StatusKind) -> Self {
        Self {
            user_id,
            status,
            dnd_end_time: None,
            last_activity_at: Utc::now(),
        }
    }

    /// Default record for a user that has never been observed
    #[must_use]
    pub fn offline(user_id: UserId) -> Self {
        Self::new(user_id, StatusKind::Offline)
    }

    /// Check whether this record is timed DND with the given end instant
    #[must_use]
    pub fn is_timed_dnd_until(&self, end: DateTime<Utc>) -> bool {
        self.status == StatusKind::Dnd && self.dnd_end_time == Some(end)
    }

    /// Update the last-activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }
}
