use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::server::state::AppState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub connections: usize,
    pub started_at: DateTime<Utc>,
}

/// GET /health
pub async fn health(State(app_state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok".to_string(),
        connections: app_state.connections.open_count(),
        started_at: app_state.started_at,
    })
}
