//! Collaborator traits (ports) - define the interfaces the services depend on
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Transport, authentication, and the permission
//! decision itself live behind these seams and are never reimplemented here.

use async_trait::async_trait;

use crate::entities::{CustomStatus, RecentStatusList, Status};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for registry and collaborator operations
pub type RegistryResult<T> = Result<T, DomainError>;

// ============================================================================
// Status Registry
// ============================================================================

/// Authoritative keyed store of per-user presence records.
///
/// Pure get/set: the registry owns no business rules. Records are created
/// lazily on first `set` and overwritten, never deleted.
#[async_trait]
pub trait StatusRegistry: Send + Sync {
    /// Fetch the current record for a user, `None` if never observed
    async fn get(&self, user_id: &UserId) -> RegistryResult<Option<Status>>;

    /// Fetch records for several users, preserving input order.
    ///
    /// Users with no record are omitted rather than erroring; the single-user
    /// lookup path is the one that surfaces "not found".
    async fn get_many(&self, user_ids: &[UserId]) -> RegistryResult<Vec<Status>>;

    /// Commit a record, overwriting any previous one
    async fn set(&self, status: Status) -> RegistryResult<()>;
}

// ============================================================================
// Custom Status Store
// ============================================================================

/// Store for the active custom status and the bounded recent history
#[async_trait]
pub trait CustomStatusStore: Send + Sync {
    /// Fetch the active custom status, if any
    async fn get(&self, user_id: &UserId) -> RegistryResult<Option<CustomStatus>>;

    /// Overwrite the active custom status
    async fn set(&self, user_id: &UserId, status: CustomStatus) -> RegistryResult<()>;

    /// Clear the active custom status; clearing an absent one is fine
    async fn clear(&self, user_id: &UserId) -> RegistryResult<()>;

    /// Fetch the recent-status history (empty list if none)
    async fn recent(&self, user_id: &UserId) -> RegistryResult<RecentStatusList>;

    /// Push a status onto the recent history (dedup + bounded)
    async fn push_recent(&self, user_id: &UserId, status: CustomStatus) -> RegistryResult<()>;

    /// Remove the history entry matching the (emoji, text) pair of `value`.
    ///
    /// Returns `true` if an entry was removed.
    async fn remove_recent(&self, user_id: &UserId, value: &CustomStatus)
        -> RegistryResult<bool>;
}

// ============================================================================
// Auto Responder
// ============================================================================

/// Out-of-office automatic reply controller.
///
/// Invoked by the transition engine, never invokes back. Calls are
/// fire-and-confirm: a failed disable must surface to the caller rather than
/// being swallowed.
#[async_trait]
pub trait AutoResponder: Send + Sync {
    /// Activate the automatic reply for a user
    async fn enable(&self, user_id: &UserId) -> RegistryResult<()>;

    /// Deactivate the automatic reply for a user
    async fn disable(&self, user_id: &UserId) -> RegistryResult<()>;
}

// ============================================================================
// Feature Gate
// ============================================================================

/// Deployment feature toggles, read at call time and never cached by services
pub trait FeatureGate: Send + Sync {
    /// Whether users may set custom statuses at all
    fn custom_statuses_enabled(&self) -> bool;

    /// Whether DND requests may carry an end instant (timed DND)
    fn timed_dnd_enabled(&self) -> bool;
}
