//! Business logic services
//!
//! This module contains the service layer implementations that enforce the
//! presence transition rules and custom status lifecycle.

pub mod batch;
pub mod context;
pub mod custom_status;
pub mod error;
pub mod transition;

// Re-export all services for convenience
pub use batch::BatchStatusResolver;
pub use context::ServiceContext;
pub use custom_status::CustomStatusService;
pub use error::{ServiceError, ServiceResult};
pub use transition::StatusTransitionEngine;
