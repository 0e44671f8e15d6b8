//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{UserId, UserIdParseError};

/// Domain layer errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Status not found for user: {0}")]
    StatusNotFound(UserId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid user id: {0}")]
    InvalidUserId(#[from] UserIdParseError),

    #[error("Invalid status literal: {0}")]
    InvalidStatusLiteral(String),

    #[error("Invalid duration literal: {0}")]
    InvalidDurationLiteral(String),

    #[error("Custom status requires an emoji or text")]
    EmptyCustomStatus,

    #[error("Custom status expiry is in the past")]
    ExpiryInPast,

    #[error("Expiry does not match the '{duration}' duration")]
    ExpiryMismatch { duration: String },

    #[error("Duration '{duration}' requires an expiry")]
    MissingExpiry { duration: String },

    #[error("User id list must not be empty")]
    EmptyIdList,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Status registry unavailable: {0}")]
    RegistryUnavailable(String),

    #[error("Auto responder unavailable: {0}")]
    ResponderUnavailable(String),

    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::StatusNotFound(_) => "UNKNOWN_USER_STATUS",

            Self::InvalidUserId(_) => "INVALID_USER_ID",
            Self::InvalidStatusLiteral(_) => "INVALID_STATUS",
            Self::InvalidDurationLiteral(_) => "INVALID_DURATION",
            Self::EmptyCustomStatus => "EMPTY_CUSTOM_STATUS",
            Self::ExpiryInPast => "EXPIRY_IN_PAST",
            Self::ExpiryMismatch { .. } => "EXPIRY_MISMATCH",
            Self::MissingExpiry { .. } => "MISSING_EXPIRY",
            Self::EmptyIdList => "EMPTY_ID_LIST",

            Self::RegistryUnavailable(_) => "REGISTRY_UNAVAILABLE",
            Self::ResponderUnavailable(_) => "RESPONDER_UNAVAILABLE",
            Self::Timeout(_) => "TIMEOUT",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StatusNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidUserId(_)
                | Self::InvalidStatusLiteral(_)
                | Self::InvalidDurationLiteral(_)
                | Self::EmptyCustomStatus
                | Self::ExpiryInPast
                | Self::ExpiryMismatch { .. }
                | Self::MissingExpiry { .. }
                | Self::EmptyIdList
        )
    }

    /// Check if this is a transient infrastructure failure
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::RegistryUnavailable(_) | Self::ResponderUnavailable(_) | Self::Timeout(_)
        )
    }
}
