//! Shared Error Types
//!
//! Errors that describe why an inbound sync frame was rejected. The relay never
//! sends these back to the client; they are logged and the frame is dropped.
//!
//! # Error Categories
//!
//! - `MalformedJson` - the frame is not valid JSON
//! - `MissingField` - a required top-level field is absent
//! - `UnknownType` - the `type` tag is not a recognized operation
//! - `UnknownCollection` - the collection is outside the known set
//! - `MissingId` - a single-record upsert is `null`, or lacks an `id` in strict mode
//! - `InvalidRecord` - a record failed schema validation
//!
//! # Usage
//!
//! ```rust
//! use warroom::shared::error::ProtocolError;
//!
//! let error = ProtocolError::unknown_type("delete");
//! assert!(error.to_string().contains("delete"));
//! ```
use thiserror::Error;

use crate::shared::collection::CollectionName;

/// Reasons an inbound sync frame is discarded
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Frame body is not valid JSON
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    /// A required field is missing or has the wrong JSON type
    #[error("Missing or invalid field '{0}'")]
    MissingField(&'static str),

    /// The `type` tag is not a recognized operation
    #[error("Unknown message type '{0}'")]
    UnknownType(String),

    /// The collection is not part of the known set
    #[error("Unknown collection '{0}'")]
    UnknownCollection(String),

    /// A single-record upsert is `null`, or lacks a string or numeric `id`
    /// under strict validation
    #[error("Record in '{0}' has no usable id")]
    MissingId(CollectionName),

    /// A record does not match its collection schema
    #[error("Invalid record in '{collection}': {message}")]
    InvalidRecord {
        /// Collection the record was sent to
        collection: CollectionName,
        /// Human-readable validation message
        message: String,
    },
}

impl ProtocolError {
    /// Create a new unknown-type error
    pub fn unknown_type(kind: impl Into<String>) -> Self {
        Self::UnknownType(kind.into())
    }

    /// Create a new invalid-record error
    pub fn invalid_record(collection: CollectionName, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            collection,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ProtocolError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedJson(err.to_string())
    }
}
