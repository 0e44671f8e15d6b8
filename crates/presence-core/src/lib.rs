//! # presence-core
//!
//! Domain layer containing entities, value objects, collaborator traits, and
//! domain errors for the presence system. This crate has zero dependencies on
//! infrastructure (storage backends, transports, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{CustomStatus, RecentStatusList, Status, StatusDuration, StatusKind};
pub use error::DomainError;
pub use traits::{AutoResponder, CustomStatusStore, FeatureGate, RegistryResult, StatusRegistry};
pub use value_objects::{UserId, UserIdParseError};
