/**
 * Sync Broadcasting
 *
 * Fan-out of incremental sync frames to every open connection. Each
 * WebSocket connection holds one receiver; the hub holds the sender.
 *
 * # Broadcasting
 *
 * Frames are broadcast using `tokio::sync::broadcast`, a multi-producer,
 * multi-consumer channel. Every receiver gets its own copy, including the
 * receiver belonging to the connection that proposed the change.
 */

use crate::shared::ServerMessage;
use tokio::sync::broadcast;

/// Broadcast channel carrying server frames to connection tasks
pub type SyncBroadcast = broadcast::Sender<ServerMessage>;

/// Broadcast a frame to all connections
///
/// # Returns
///
/// Number of receivers the frame was queued for (0 if nobody is connected)
pub fn broadcast_sync(broadcast_tx: &SyncBroadcast, message: ServerMessage) -> usize {
    match broadcast_tx.send(message) {
        Ok(receiver_count) => {
            tracing::debug!("[Realtime] Sync broadcast to {} connections", receiver_count);
            receiver_count
        }
        Err(_) => {
            // Nobody connected
            tracing::debug!("[Realtime] No connections to receive sync");
            0
        }
    }
}
