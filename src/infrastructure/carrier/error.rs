//! # Carrier Errors
//!
//! Error types for carrier rate-service operations.
//!
//! The carrier client is explicitly `Result`-returning: the aggregation
//! service owns the recovery policy (it substitutes an empty quote list
//! and logs), so nothing here is swallowed at the transport layer.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::infrastructure::carrier::error::CarrierError;
//!
//! let error = CarrierError::timeout("request timed out");
//! assert!(error.is_retryable());
//!
//! let error = CarrierError::api("AA004", "postal code is invalid");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Error type for carrier rate-service operations.
#[derive(Debug, Clone, Error)]
pub enum CarrierError {
    /// Request timed out.
    #[error("carrier timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("carrier connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Authentication or authorization failure.
    #[error("carrier authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Structured error returned by the carrier API.
    #[error("carrier api error {code}: {message}")]
    Api {
        /// Carrier error code.
        code: String,
        /// Carrier error description.
        message: String,
    },

    /// Request could not be built from the given inputs.
    #[error("carrier invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// Response body could not be parsed.
    #[error("carrier protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },
}

impl CarrierError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a structured API error.
    #[must_use]
    pub fn api(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid-request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient and may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connection { .. })
    }

    /// Returns true if this error reflects a problem with the request
    /// rather than the carrier.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::InvalidRequest { .. } | Self::Api { .. }
        )
    }

    /// Returns the carrier error code, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Result type for carrier operations.
pub type CarrierResult<T> = Result<T, CarrierError>;
