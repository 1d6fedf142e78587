//! Server Module
//!
//! Initialization and configuration of the Axum HTTP/WebSocket server.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`config`** - Configuration loading and validation
//! - **`init`** - App creation and the listener loop
//! - **`health`** - Liveness endpoint
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - ServerConfig (TOML file + environment)
//! ├── init.rs         - create_app / run
//! └── health.rs       - GET /health
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use warroom::backend::server::{config::ServerConfig, init::run};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! run(config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

/// Health endpoint
pub mod health;

pub use config::{ServerConfig, ValidationMode};
pub use init::{create_app, run};
pub use state::AppState;
