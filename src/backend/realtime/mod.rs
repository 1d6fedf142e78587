//! Real-time Module
//!
//! Fan-out plumbing shared by every WebSocket connection.
//!
//! # Architecture
//!
//! - **`broadcast`** - Broadcast channel type and send helper
//! - **`connections`** - Open connection tracking
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Sync broadcast channel
//! └── connections.rs  - Connection counter and guards
//! ```
//!
//! # Delivery
//!
//! Fan-out is unconditional: every open connection, including the one that
//! proposed a change, receives the post-mutation collection. A connection that
//! falls behind the channel capacity is re-hydrated by its own task; one slow
//! or broken connection never blocks the others.

/// Sync broadcasting
pub mod broadcast;

/// Connection tracking
pub mod connections;

pub use broadcast::{broadcast_sync, SyncBroadcast};
pub use connections::{ConnectionGuard, ConnectionTracker};
