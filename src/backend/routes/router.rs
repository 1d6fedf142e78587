/**
 * Router Configuration
 *
 * Combines all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Sync WebSocket (`/ws`)
 * 2. JSON API (`/health`, `/api/collections`)
 * 3. Static files from the configured directory, falling back to
 *    `index.html` so client-side routes load the app
 */

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::backend::sync::handlers::handle_sync_socket;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/ws", axum::routing::get(handle_sync_socket));

    let router = configure_api_routes(router);

    let static_dir = app_state.config.static_dir.clone();
    let index = static_dir.join("index.html");
    let router = router.fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)));

    router.layer(TraceLayer::new_for_http()).with_state(app_state)
}
