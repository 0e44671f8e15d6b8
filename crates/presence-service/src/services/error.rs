//! Service layer error types
//!
//! Provides the terminal error taxonomy for all presence operations.

use presence_common::AppError;
use presence_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Malformed identifier, unrecognized status literal, or invalid payload
    InvalidArgument(String),

    /// Operation administratively disabled for this deployment
    FeatureDisabled(&'static str),

    /// Surfaced from the external permission check; never generated here
    PermissionDenied,

    /// Single-id lookup with no known state
    NotFound { resource: &'static str, id: String },

    /// Registry or auto-responder transient failure
    Unavailable(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::FeatureDisabled(feature) => write!(f, "Feature disabled: {feature}"),
            Self::PermissionDenied => write!(f, "Permission denied"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::Unavailable(msg) => write!(f, "Unavailable: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create an unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidArgument(_) => 400,
            Self::PermissionDenied => 403,
            Self::NotFound { .. } => 404,
            Self::FeatureDisabled(_) => 501,
            Self::Unavailable(_) => 503,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::FeatureDisabled(_) => "FEATURE_DISABLED",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Unavailable(_) => "UNAVAILABLE",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        if err.is_validation() {
            Self::InvalidArgument(err.to_string())
        } else if err.is_unavailable() {
            Self::Unavailable(err.to_string())
        } else {
            match err {
                DomainError::StatusNotFound(user_id) => {
                    Self::not_found("User status", user_id.to_string())
                }
                other => Self::Unavailable(other.to_string()),
            }
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidArgument(msg) => AppError::Validation(msg),
            ServiceError::FeatureDisabled(feature) => AppError::FeatureDisabled(feature),
            ServiceError::PermissionDenied => AppError::InsufficientPermissions,
            ServiceError::NotFound { resource, id } => {
                AppError::NotFound(format!("{resource} {id}"))
            }
            ServiceError::Unavailable(msg) => AppError::Unavailable(msg),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
