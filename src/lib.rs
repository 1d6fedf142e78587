//! Warroom - Realtime Collection Sync
//!
//! A small relay that keeps a fixed set of named collections (tasks, notes,
//! habits, calendar events and so on) in memory and mirrors them live to
//! every connected client over a WebSocket.
//!
//! # Overview
//!
//! - A client connects and immediately receives every collection
//!   (`init_all`).
//! - A client proposes a change to one collection, either a full replacement
//!   or a single record upserted by `id`.
//! - The relay applies it and broadcasts the collection's new value to every
//!   connection, the sender included. Clients never merge locally; the
//!   broadcast is the truth, and the last change the relay applies wins.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire protocol and data model used by both ends
//!   - Collection names, opaque records, message frames
//!   - Typed record schemas for strict validation
//!   - Protocol errors
//!
//! - **`backend`** - The relay server (`server` feature)
//!   - Axum WebSocket handler and read-only JSON API
//!   - Single-writer sync hub and broadcast fan-out
//!   - Static file serving for the built web client
//!
//! - **`client`** - Rust binding to one collection (`client` feature)
//!   - Live mirror backed by a watch channel
//!   - Fire-and-forget change proposals
//!
//! # Feature Flags
//!
//! - **`server`** - Enables `backend` and the `warroom-server` binary
//! - **`client`** - Enables `client` (tokio-tungstenite)
//!
//! Both are on by default.
//!
//! # Usage
//!
//! ```rust,no_run
//! use warroom::client::{ClientConfig, CollectionBinding};
//! use warroom::shared::{CollectionName, Record};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new();
//! let tasks = CollectionBinding::connect(&config, CollectionName::Tasks).await?;
//!
//! tasks.propose_upsert(Record::new(serde_json::json!({"id": "1", "title": "Revise"})));
//!
//! let mut changes = tasks.subscribe();
//! changes.changed().await?;
//! println!("{} tasks", changes.borrow().len());
//! # Ok(())
//! # }
//! ```

/// Types shared by the relay and its clients
pub mod shared;

/// Relay server (only compiled with `server` feature)
#[cfg(feature = "server")]
pub mod backend;

/// Client binding (only compiled with `client` feature)
#[cfg(feature = "client")]
pub mod client;
