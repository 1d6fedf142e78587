//! Client Module
//!
//! Rust binding to the relay: one [`CollectionBinding`] per collection a
//! view cares about. Only compiled with the `client` feature.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs          - Module exports
//! ├── config.rs       - ClientConfig and builder
//! ├── binding.rs      - CollectionBinding (mirror + proposals)
//! └── error.rs        - ClientError
//! ```

/// Collection binding
pub mod binding;

/// Client configuration
pub mod config;

/// Client error types
pub mod error;

pub use binding::{CollectionBinding, ConnectionState};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::ClientError;
