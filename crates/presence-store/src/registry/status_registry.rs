//! In-memory status registry
//!
//! Authoritative mapping from user id to their current presence record.
//! Pure get/set; the transition rules live in the service layer.

use async_trait::async_trait;
use dashmap::DashMap;
use presence_core::{RegistryResult, Status, StatusRegistry, UserId};

/// Process-local registry backed by a concurrent map
#[derive(Debug, Default)]
pub struct MemoryStatusRegistry {
    records: DashMap<UserId, Status>,
}

impl MemoryStatusRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of observed users
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl StatusRegistry for MemoryStatusRegistry {
    async fn get(&self, user_id: &UserId) -> RegistryResult<Option<Status>> {
        Ok(self.records.get(user_id).map(|entry| entry.clone()))
    }

    async fn get_many(&self, user_ids: &[UserId]) -> RegistryResult<Vec<Status>> {
        let mut statuses = Vec::with_capacity(user_ids.len());
        for user_id in user_ids {
            if let Some(entry) = self.records.get(user_id) {
                statuses.push(entry.clone());
            }
        }
        Ok(statuses)
    }

    async fn set(&self, status: Status) -> RegistryResult<()> {
        tracing::debug!(
            user_id = %status.user_id,
            status = %status.status,
            "Committing status record"
        );
        self.records.insert(status.user_id.clone(), status);
        Ok(())
    }
}
