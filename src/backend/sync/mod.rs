//! Sync Backend Module
//!
//! The relay core: an in-memory store of named collections, a hub that
//! applies client proposals to it and fans the result out, and the handlers
//! that connect browser tabs to the hub.
//!
//! # Architecture
//!
//! - **`state`** - `CollectionStore`, replace/upsert semantics
//! - **`hub`** - `SyncHub`, single-writer store plus broadcast
//! - **`handlers`** - WebSocket and snapshot handlers
//!
//! # Semantics
//!
//! - A proposal whose `data` is an array replaces the collection verbatim.
//! - A proposal whose `data` is a single record overwrites the record with
//!   the same `id` in place, or appends it.
//! - After every accepted proposal, every open connection (including the
//!   sender) receives the collection's complete new value.
//! - Rejected proposals are logged and dropped; no error reaches the client.
//!
//! # Example
//!
//! ```rust
//! use warroom::backend::sync::state::CollectionStore;
//! use warroom::shared::{ClientMessage, CollectionName, Record};
//!
//! let mut store = CollectionStore::default();
//! let record = Record::new(serde_json::json!({"id": "7", "status": "todo"}));
//! let applied = store.apply(ClientMessage::upsert(CollectionName::Tasks, record)).unwrap();
//! assert_eq!(applied.records.len(), 1);
//! ```

/// Collection store
pub mod state;

/// Single-writer hub
pub mod hub;

/// Axum handlers
pub mod handlers;

pub use hub::SyncHub;
pub use state::{Applied, ApplyOutcome, CollectionStore};
