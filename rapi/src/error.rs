//! Error surface shared by every container in the crate.

use thiserror::Error;

/// Result alias used by fallible container operations.
///
/// The crate defines its own [`Result`](crate::Result) container, so the
/// standard one is spelled out here once.
pub type Fallible<T> = core::result::Result<T, RapiError>;

/// Errors raised by container operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RapiError {
    /// A required argument was absent, or an operation was asked to copy
    /// out of an empty container.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// `unwrap`/`expect` (or their `Err` counterparts) met the wrong variant.
    #[error("{0}")]
    Unwrap(String),
}

impl RapiError {
    /// Build an `InvalidArgument` error and record it.
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(%message, "rejected argument");
        RapiError::InvalidArgument(message)
    }

    /// Build an `Unwrap` error and record which operation raised it.
    pub(crate) fn unwrap_failed(operation: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(operation, %message, "unwrap on wrong variant");
        RapiError::Unwrap(message)
    }

    /// The human-readable message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            RapiError::InvalidArgument(msg) | RapiError::Unwrap(msg) => msg,
        }
    }

    /// Whether this is an `InvalidArgument` error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RapiError::InvalidArgument(_))
    }

    /// Whether this is an `Unwrap` error.
    pub fn is_unwrap(&self) -> bool {
        matches!(self, RapiError::Unwrap(_))
    }
}
