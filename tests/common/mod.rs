//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A relay server on an ephemeral port
//! - Raw WebSocket helpers for driving the sync protocol by hand

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "server")]
pub use server::*;
#[cfg(all(feature = "server", feature = "client"))]
pub use socket::*;
