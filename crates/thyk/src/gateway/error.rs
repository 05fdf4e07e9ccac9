use thiserror::Error;

use thyk_core::storage::RepositoryError;
use thyk_core::task::{CategoryError, TaskError};

/// Errors surfaced by the gateway.
///
/// The gateway never recovers from these locally; each variant is a
/// distinguishable kind with a human-readable message so the view
/// layer can render something meaningful.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The identifier does not resolve to a record.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    /// The record exists but belongs to a different user, or there is
    /// no authenticated user at all. Never downgraded to a silent
    /// filter.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// The method and path combination is not part of the API.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
    /// The payload is not JSON-safe for this operation: wrong shape,
    /// unknown fields, or unparseable values. Detected before any
    /// store call.
    #[error("Invalid payload: {0}")]
    Serialization(String),
    /// The payload parsed but violates a domain rule (empty title,
    /// bad color format).
    #[error("Validation failed: {0}")]
    Validation(String),
    /// The underlying store call failed; propagated, not
    /// reinterpreted.
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

impl GatewayError {
    /// Maps this error to the HTTP status code a transport layer
    /// would use.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::NotFound { .. } => 404,
            GatewayError::Unauthorized(_) => 403,
            GatewayError::UnsupportedOperation(_) => 405,
            GatewayError::Serialization(_) => 400,
            GatewayError::Validation(_) => 422,
            GatewayError::Store(_) => 500,
        }
    }
}

impl From<TaskError> for GatewayError {
    fn from(err: TaskError) -> Self {
        GatewayError::Validation(err.to_string())
    }
}

impl From<CategoryError> for GatewayError {
    fn from(err: CategoryError) -> Self {
        GatewayError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Serialization(err.to_string())
    }
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
