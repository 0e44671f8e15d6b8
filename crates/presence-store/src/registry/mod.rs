//! In-memory registry implementations

mod custom_status;
mod status_registry;

pub use custom_status::MemoryCustomStatusStore;
pub use status_registry::MemoryStatusRegistry;
