/**
 * Backend Error Types
 *
 * Errors raised by HTTP handlers and by the server lifecycle. Inbound sync
 * frames never produce a response; their `ProtocolError` is logged and the
 * frame dropped. Only the JSON API turns errors into HTTP responses.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Request-level failures with an explicit status, e.g. an unknown
 * collection name in `/api/collections/{name}`.
 *
 * ## Transport Errors
 *
 * Socket bind/serve failures and failed sends to one connection.
 *
 * ## Configuration Errors
 *
 * Invalid settings detected at startup.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::server::config::ConfigError;
use crate::shared::ProtocolError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use warroom::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "Unknown collection 'grades'");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Socket-level failure
    #[error("Transport error: {message}")]
    TransportError {
        /// Human-readable error message
        message: String,
    },

    /// Rejected sync payload
    #[error(transparent)]
    ProtocolError(#[from] ProtocolError),

    /// Invalid configuration
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `ProtocolError` - 404 for an unknown collection, 400 otherwise
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::ProtocolError(ProtocolError::UnknownCollection(_)) => StatusCode::NOT_FOUND,
            Self::ProtocolError(_) => StatusCode::BAD_REQUEST,
            Self::TransportError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::TransportError { message } => message.clone(),
            Self::ProtocolError(err) => err.to_string(),
            Self::ConfigError(err) => err.to_string(),
            Self::SerializationError(err) => err.to_string(),
        }
    }
}
