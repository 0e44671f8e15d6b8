//! Request DTOs
//!
//! The status literal arrives from the wire as a string and is dispatched on
//! a closed set at the boundary; anything else fails with an explicit error
//! rather than a silent no-op fall-through.

use chrono::{DateTime, Utc};
use presence_core::{DomainError, StatusKind};
use serde::Deserialize;

/// Requested presence change for a target user
#[derive(Debug, Clone, Deserialize)]
pub struct StatusChangeRequest {
    /// One of `online`, `offline`, `away`, `dnd`
    pub status: String,
    /// End instant for timed DND; ignored unless the deployment enables it
    #[serde(default)]
    pub dnd_end_time: Option<DateTime<Utc>>,
}

impl StatusChangeRequest {
    /// Request a plain status change
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            dnd_end_time: None,
        }
    }

    /// Request timed DND with an end instant
    #[must_use]
    pub fn dnd_until(end: DateTime<Utc>) -> Self {
        Self {
            status: "dnd".to_string(),
            dnd_end_time: Some(end),
        }
    }

    /// Parse the status literal into a settable target.
    ///
    /// Out-of-office is excluded: it is only entered through the activation
    /// path, never through a plain status change.
    pub fn parse_target(&self) -> Result<StatusKind, DomainError> {
        match self.status.parse::<StatusKind>() {
            Ok(StatusKind::OutOfOffice) | Err(_) => {
                Err(DomainError::InvalidStatusLiteral(self.status.clone()))
            }
            Ok(kind) => Ok(kind),
        }
    }
}
