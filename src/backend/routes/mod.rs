//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - JSON API routes
//! ```
//!
//! # Routes
//!
//! - `GET /ws` - Sync WebSocket
//! - `GET /health` - Liveness
//! - `GET /api/collections` - Full snapshot
//! - `GET /api/collections/{name}` - One collection
//! - everything else - Static files with `index.html` fallback

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
