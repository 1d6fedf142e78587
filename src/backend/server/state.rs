/**
 * Application State Management
 *
 * `AppState` is the central state container handed to every Axum handler.
 * It holds:
 * - The sync hub (collection store + broadcast sender)
 * - The open connection tracker
 * - The server configuration
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part they
 * need, e.g. `State(hub): State<SyncHub>`.
 */

use axum::extract::FromRef;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::backend::realtime::ConnectionTracker;
use crate::backend::server::config::ServerConfig;
use crate::backend::sync::hub::SyncHub;

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Authoritative collections and their broadcast channel
    pub hub: SyncHub,

    /// Open WebSocket connections
    pub connections: ConnectionTracker,

    /// Settings the server was started with
    pub config: Arc<ServerConfig>,

    /// Process start time, reported by `/health`
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let hub = SyncHub::new(config.validation, config.broadcast_capacity);
        Self {
            hub,
            connections: ConnectionTracker::new(),
            config: Arc::new(config),
            started_at: Utc::now(),
        }
    }
}

impl FromRef<AppState> for SyncHub {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hub.clone()
    }
}

impl FromRef<AppState> for ConnectionTracker {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.connections.clone()
    }
}
