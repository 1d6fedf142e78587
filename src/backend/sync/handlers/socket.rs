/**
 * Sync WebSocket Handler
 *
 * One task pair per connection:
 *
 * - the writer sends `init_all` first, then forwards every broadcast frame;
 * - the reader decodes each text frame and hands it to the hub.
 *
 * # Failure handling
 *
 * Malformed frames, unknown message types and unknown collections are
 * logged and dropped; nothing is sent back to the client. A failed send ends
 * only this connection. When either half stops, the other is aborted and the
 * connection is released.
 *
 * # Lagging connections
 *
 * If a connection falls more than the broadcast capacity behind, the frames
 * it missed are gone. Instead of leaving its mirror stale, the writer sends a
 * fresh `init_all` and continues from there.
 */

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::realtime::ConnectionTracker;
use crate::backend::server::state::AppState;
use crate::backend::sync::hub::SyncHub;
use crate::shared::ServerMessage;

/// Handle a sync connection (GET /ws)
pub async fn handle_sync_socket(
    State(app_state): State<AppState>,
    ws: WebSocketUpgrade,
) -> Response {
    tracing::debug!("[Sync] WebSocket upgrade request");
    ws.on_upgrade(move |socket| serve_connection(socket, app_state.hub, app_state.connections))
}

/// Drive one connection until either side stops
pub async fn serve_connection(socket: WebSocket, hub: SyncHub, connections: ConnectionTracker) {
    let connection = connections.open();
    let connection_id = connection.id();
    let (mut sink, stream) = socket.split();

    let (hydration, updates) = hub.hydrate().await;
    if let Err(e) = send_frame(&mut sink, &hydration).await {
        tracing::warn!("[Sync] Hydration to {} failed: {}", connection_id, e);
        return;
    }

    let mut writer = tokio::spawn(forward_updates(sink, updates, hub.clone(), connection_id));
    let mut reader = tokio::spawn(read_proposals(stream, hub, connection_id));

    tokio::select! {
        _ = (&mut writer) => reader.abort(),
        _ = (&mut reader) => writer.abort(),
    }

    drop(connection);
}

async fn forward_updates(
    mut sink: SplitSink<WebSocket, Message>,
    mut updates: broadcast::Receiver<ServerMessage>,
    hub: SyncHub,
    connection_id: Uuid,
) {
    while let Some(frame) = next_update(&mut updates, &hub, connection_id).await {
        if let Err(e) = send_frame(&mut sink, &frame).await {
            tracing::debug!("[Sync] Send to {} failed, closing: {}", connection_id, e);
            break;
        }
    }
    let _ = sink.close().await;
}

/// Next frame for one connection, or `None` once the hub is gone
///
/// A receiver that lagged is swapped for a fresh subscription and the frame
/// returned is a new `init_all`.
async fn next_update(
    updates: &mut broadcast::Receiver<ServerMessage>,
    hub: &SyncHub,
    connection_id: Uuid,
) -> Option<ServerMessage> {
    match updates.recv().await {
        Ok(message) => Some(message),
        Err(RecvError::Lagged(skipped)) => {
            tracing::warn!(
                "[Sync] Client {} lagged by {} frames, re-hydrating",
                connection_id,
                skipped
            );
            let (hydration, fresh) = hub.hydrate().await;
            *updates = fresh;
            Some(hydration)
        }
        Err(RecvError::Closed) => None,
    }
}

async fn read_proposals(mut stream: SplitStream<WebSocket>, hub: SyncHub, connection_id: Uuid) {
    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => {
                if let Err(e) = hub.apply_frame(text.as_str()).await {
                    tracing::warn!("[Sync] Discarded message from {}: {}", connection_id, e);
                }
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::debug!("[Sync] Read from {} failed: {}", connection_id, e);
                break;
            }
        }
    }
}

async fn send_frame(
    sink: &mut SplitSink<WebSocket, Message>,
    message: &ServerMessage,
) -> Result<(), BackendError> {
    let text = message.encode().map_err(BackendError::SerializationError)?;
    sink.send(Message::Text(text.into()))
        .await
        .map_err(|e| BackendError::transport(e.to_string()))
}
