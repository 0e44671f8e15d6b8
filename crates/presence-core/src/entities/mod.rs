//! Domain entities

mod custom_status;
mod recent_status;
mod status;

pub use custom_status::{CustomStatus, StatusDuration};
pub use recent_status::{RecentStatusList, RECENT_STATUS_CAP};
pub use status::{Status, StatusKind};
