//! # Application Errors
//!
//! Error taxonomy for rate aggregation.
//!
//! - validation failures are client errors, raised before any network
//!   call
//! - a missing operational parameter (origin postal code) is a server
//!   error
//! - carrier failures never appear here: the orchestrator recovers them
//!   into a degraded-but-successful response
//! - anything else surfaces as an internal error with a diagnostic
//!
//! # Examples
//!
//! ```
//! use parcel_rates::application::error::ApplicationError;
//! use parcel_rates::domain::errors::DomainError;
//!
//! let err: ApplicationError = DomainError::missing_field("country").into();
//! assert!(err.is_client_error());
//! ```

use crate::domain::errors::DomainError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Clone, Error)]
pub enum ApplicationError {
    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] DomainError),

    /// A required operational parameter is absent.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Unexpected failure during orchestration.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates the missing-origin configuration error.
    #[must_use]
    pub fn origin_not_configured() -> Self {
        Self::Configuration("origin postal code not configured".to_string())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for errors the caller can fix (4xx-class).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true for server-side failures (5xx-class).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        !self.is_client_error()
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
