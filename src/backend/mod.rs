//! Backend Module
//!
//! The relay server. It keeps every collection in memory, hydrates each new
//! WebSocket connection with the full state, and rebroadcasts a collection's
//! new value to all connections whenever a client proposes a change.
//!
//! This module is only compiled when the `server` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly
//! - **`sync`** - Collection store, sync hub, handlers
//! - **`realtime`** - Broadcast channel and connection tracking
//! - **`error`** - Backend error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - warroom-server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── sync/           - Store, hub, WebSocket and snapshot handlers
//! ├── realtime/       - Broadcast and connections
//! └── error/          - Error types
//! ```
//!
//! # Thread Safety
//!
//! - `Arc<RwLock<CollectionStore>>` inside `SyncHub`; writers hold the lock
//!   across mutation and broadcast
//! - `broadcast::Sender` for fan-out to connection tasks
//! - Axum handlers are `Send + Sync`
//!
//! # Example
//!
//! ```rust,no_run
//! use warroom::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::default());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Collection store and sync handlers
pub mod sync;

/// Real-time fan-out
pub mod realtime;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
pub use sync::{CollectionStore, SyncHub};
