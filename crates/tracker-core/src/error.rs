//! Client-level error types.

use serde_json::Value;
use thiserror::Error;

use crate::ports::{StorageError, TransportError};

/// Errors surfaced to callers of the API client.
///
/// Transport failures are wrapped without alteration so callers can match on
/// the exact error the transport produced.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Request failed with status {status}")]
    Status { status: u16, body: Value },

    #[error("Failed to encode request body: {0}")]
    Encode(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Local storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Not authenticated")]
    Unauthenticated,
}

impl ApiError {
    /// HTTP status of an error response, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Human-readable message from an error body.
    ///
    /// The API answers with `{"error": "..."}`; its JWT layer uses `{"msg": "..."}`.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => ["error", "msg", "message"]
                .iter()
                .find_map(|key| body.get(*key).and_then(Value::as_str)),
            _ => None,
        }
    }
}

/// Domain errors - values the API sent that the domain does not recognize.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },
}
