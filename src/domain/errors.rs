//! # Domain Errors
//!
//! Error types for domain-level rule violations.
//!
//! Validation failures are client errors: the request is rejected before
//! any network call is attempted.

use thiserror::Error;

/// Error type for domain rule violations.
///
/// # Examples
///
/// ```
/// use parcel_rates::domain::errors::DomainError;
///
/// let err = DomainError::missing_field("country");
/// assert_eq!(err.to_string(), "missing required field: country");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required request field is absent or blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A request field is present but unusable.
    #[error("invalid field {field}: {message}")]
    InvalidField {
        /// The offending field, named as it appears on the wire.
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

impl DomainError {
    /// Creates a missing-field error.
    ///
    /// The field is named as it appears on the inbound request.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    /// Creates an invalid-field error.
    #[must_use]
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
