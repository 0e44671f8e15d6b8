//! # presence-store
//!
//! In-memory storage layer: the authoritative status registry, the custom
//! status store, and the per-user lock arena used to serialize transitions.

pub mod lock;
pub mod registry;

pub use lock::KeyedLocks;
pub use registry::{MemoryCustomStatusStore, MemoryStatusRegistry};
