/**
 * Snapshot Handlers
 *
 * Read-only JSON views of the store, for debugging and for tools that do not
 * speak the WebSocket protocol. Writes only go through `/ws`.
 */

use axum::{
    extract::{Path, State},
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::sync::hub::SyncHub;
use crate::shared::{CollectionName, Record, Snapshot};

/// GET /api/collections
pub async fn get_snapshot(State(hub): State<SyncHub>) -> Json<Snapshot> {
    Json(hub.snapshot().await)
}

/// GET /api/collections/{name}
///
/// # Errors
///
/// * `404 Not Found` - the name is not a known collection
pub async fn get_collection(
    State(hub): State<SyncHub>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Record>>, BackendError> {
    let collection: CollectionName = name.parse()?;
    Ok(Json(hub.collection(collection).await))
}
