/**
 * API Routes
 *
 * - `GET /health` - Liveness and open connection count
 * - `GET /api/collections` - Snapshot of every collection
 * - `GET /api/collections/{name}` - One collection (404 if unknown)
 *
 * All routes are read-only; mutations go through the WebSocket.
 */

use axum::Router;

use crate::backend::server::health::health;
use crate::backend::server::state::AppState;
use crate::backend::sync::handlers::{get_collection, get_snapshot};

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/health", axum::routing::get(health))
        .route("/api/collections", axum::routing::get(get_snapshot))
        .route("/api/collections/{name}", axum::routing::get(get_collection))
}
