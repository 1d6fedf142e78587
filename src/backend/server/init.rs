/**
 * Server Initialization
 *
 * Builds the application state and router, and runs the listener.
 *
 * # Initialization Process
 *
 * 1. Create the sync hub with empty collections
 * 2. Create the connection tracker
 * 3. Create the router (WebSocket, JSON API, static files)
 *
 * Nothing is restored at startup: collections live only as long as the
 * process.
 */

use axum::Router;
use tokio::net::TcpListener;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub fn create_app(config: ServerConfig) -> Router<()> {
    tracing::info!(
        "Initializing relay ({:?} validation, broadcast capacity {})",
        config.validation,
        config.broadcast_capacity
    );

    let app_state = AppState::new(config);
    create_router(app_state)
}

/// Bind the configured address and serve until the process exits
pub async fn run(config: ServerConfig) -> Result<(), BackendError> {
    let addr = config.resolve_addr().await?;
    let app = create_app(config);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| BackendError::transport(format!("failed to bind {}: {}", addr, e)))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| BackendError::transport(e.to_string()))
}
