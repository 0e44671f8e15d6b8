//! In-memory custom status store
//!
//! Holds the single active custom status per user and the bounded
//! recent-status history beside it. Validation and feature gating happen in
//! the service layer; this store only keeps state.

use async_trait::async_trait;
use dashmap::DashMap;
use presence_common::PresenceConfig;
use presence_core::{
    CustomStatus, CustomStatusStore, RecentStatusList, RegistryResult, UserId,
};

/// Process-local custom status store backed by concurrent maps
#[derive(Debug)]
pub struct MemoryCustomStatusStore {
    active: DashMap<UserId, CustomStatus>,
    history: DashMap<UserId, RecentStatusList>,
    history_cap: usize,
}

impl MemoryCustomStatusStore {
    /// Create a store with the given recent-history capacity
    #[must_use]
    pub fn new(history_cap: usize) -> Self {
        Self {
            active: DashMap::new(),
            history: DashMap::new(),
            history_cap,
        }
    }

    /// Create a store with the history capacity from configuration
    #[must_use]
    pub fn from_config(config: &PresenceConfig) -> Self {
        Self::new(config.recent_status_cap)
    }
}

impl Default for MemoryCustomStatusStore {
    fn default() -> Self {
        Self::new(presence_core::entities::RECENT_STATUS_CAP)
    }
}

#[async_trait]
impl CustomStatusStore for MemoryCustomStatusStore {
    async fn get(&self, user_id: &UserId) -> RegistryResult<Option<CustomStatus>> {
        Ok(self.active.get(user_id).map(|entry| entry.clone()))
    }

    async fn set(&self, user_id: &UserId, status: CustomStatus) -> RegistryResult<()> {
        tracing::debug!(user_id = %user_id, text = %status.text, "Setting custom status");
        self.active.insert(user_id.clone(), status);
        Ok(())
    }

    async fn clear(&self, user_id: &UserId) -> RegistryResult<()> {
        self.active.remove(user_id);
        Ok(())
    }

    async fn recent(&self, user_id: &UserId) -> RegistryResult<RecentStatusList> {
        Ok(self
            .history
            .get(user_id)
            .map(|entry| entry.clone())
            .unwrap_or_else(|| RecentStatusList::with_capacity(self.history_cap)))
    }

    async fn push_recent(&self, user_id: &UserId, status: CustomStatus) -> RegistryResult<()> {
        self.history
            .entry(user_id.clone())
            .or_insert_with(|| RecentStatusList::with_capacity(self.history_cap))
            .push(status);
        Ok(())
    }

    async fn remove_recent(
        &self,
        user_id: &UserId,
        value: &CustomStatus,
    ) -> RegistryResult<bool> {
        Ok(self
            .history
            .get_mut(user_id)
            .is_some_and(|mut entry| entry.remove(value)))
    }
}
