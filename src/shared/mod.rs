//! Shared Module
//!
//! Types used by both the relay server and the client binding: the closed set
//! of collection names, the opaque record type, the JSON wire protocol and the
//! errors produced when an inbound frame is rejected.
//!
//! Nothing here does I/O; both ends serialize these types to JSON text frames.

/// Collection names
pub mod collection;

/// Opaque records and their identity
pub mod record;

/// Wire protocol frames
pub mod protocol;

/// Typed record shapes for strict validation
pub mod schema;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use collection::CollectionName;
pub use error::ProtocolError;
pub use protocol::{ClientMessage, ServerMessage, Snapshot, SyncData};
pub use record::{Record, RecordId};
