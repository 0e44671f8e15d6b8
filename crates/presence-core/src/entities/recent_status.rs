//! Recent custom status history
//!
//! Bounded, most-recent-first list of previously used custom statuses,
//! deduplicated by (emoji, text) pair. Offered back to the user as reuse
//! suggestions; the user may prune individual entries.

use serde::{Deserialize, Serialize};

use super::custom_status::CustomStatus;

/// Maximum number of remembered statuses
pub const RECENT_STATUS_CAP: usize = 5;

/// Bounded history of previously used custom statuses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentStatusList {
    entries: Vec<CustomStatus>,
    /// Tuning knob, not part of the wire shape; restored by whichever store
    /// rebuilds the list
    #[serde(skip, default = "default_cap")]
    cap: usize,
}

fn default_cap() -> usize {
    RECENT_STATUS_CAP
}

impl RecentStatusList {
    /// Create an empty list with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(RECENT_STATUS_CAP)
    }

    /// Create an empty list with an explicit capacity
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap: cap.max(1),
        }
    }

    /// Push a status to the front, deduplicating by (emoji, text) and
    /// evicting the oldest entry beyond capacity.
    pub fn push(&mut self, status: CustomStatus) {
        self.entries.retain(|existing| !existing.same_pair(&status));
        self.entries.insert(0, status);
        self.entries.truncate(self.cap);
    }

    /// Remove the entry matching the (emoji, text) pair of `value`.
    ///
    /// Returns `true` if an entry was removed; absent entries are not an
    /// error.
    pub fn remove(&mut self, value: &CustomStatus) -> bool {
        let before = self.entries.len();
        self.entries.retain(|existing| !existing.same_pair(value));
        self.entries.len() != before
    }

    /// Check whether an entry with the same (emoji, text) pair exists
    #[must_use]
    pub fn contains(&self, value: &CustomStatus) -> bool {
        self.entries.iter().any(|existing| existing.same_pair(value))
    }

    /// Entries, most recent first
    #[must_use]
    pub fn entries(&self) -> &[CustomStatus] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
