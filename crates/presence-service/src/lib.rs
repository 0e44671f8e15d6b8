//! # presence-service
//!
//! Application layer containing the status transition engine, custom status
//! service, batch resolver, and their DTOs.

pub mod dto;
pub mod services;

pub use dto::{StatusChangeRequest, StatusResponse};
pub use services::{
    BatchStatusResolver, CustomStatusService, ServiceContext, ServiceError, ServiceResult,
    StatusTransitionEngine,
};
