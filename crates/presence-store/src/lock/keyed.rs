//! Arena of per-user async locks
//!
//! A status transition is a read-decide-write-side-effect sequence that must
//! be atomic with respect to other transitions for the same user. Each user
//! gets their own `tokio::sync::Mutex`, created lazily; transitions for
//! different users never contend.

use std::sync::Arc;

use dashmap::DashMap;
use presence_core::UserId;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Lazily populated map of per-user mutexes
#[derive(Debug, Default, Clone)]
pub struct KeyedLocks {
    locks: Arc<DashMap<UserId, Arc<Mutex<()>>>>,
}

impl KeyedLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for a user, waiting if a transition for the same
    /// user is in flight. The guard is owned so it can be held across awaits.
    pub async fn acquire(&self, user_id: &UserId) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(user_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    /// Number of users with an allocated lock
    #[must_use]
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
