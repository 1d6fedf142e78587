//! Sync Handlers Module
//!
//! Axum handlers for the sync surface.
//!
//! - **`socket`** - WebSocket sync protocol (GET /ws)
//! - **`snapshot`** - Read-only JSON views (GET /api/collections[/{name}])

/// WebSocket sync handler
pub mod socket;

/// Snapshot JSON handlers
pub mod snapshot;

pub use snapshot::{get_collection, get_snapshot};
pub use socket::handle_sync_socket;
