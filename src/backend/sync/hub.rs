/**
 * Sync Hub
 *
 * Single-writer owner of the collection store and the broadcast sender.
 *
 * # Ordering
 *
 * A proposal is applied and its result broadcast while the store's write
 * lock is held, so frames leave the hub in exactly the order mutations were
 * applied. Whichever proposal the hub processes last is what every client
 * ends up seeing.
 *
 * Hydration takes the read lock, snapshots the store and subscribes to the
 * broadcast channel before releasing it. No broadcast can slip in between the
 * snapshot and the subscription, so a new connection neither misses an update
 * nor sees one before its `init_all`.
 */

use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::backend::realtime::broadcast::{broadcast_sync, SyncBroadcast};
use crate::backend::server::config::ValidationMode;
use crate::backend::sync::state::{Applied, CollectionStore};
use crate::shared::{ClientMessage, CollectionName, ProtocolError, Record, ServerMessage, Snapshot};

/// Shared handle to the authoritative store
///
/// Cloning is cheap; every clone refers to the same store and channel.
#[derive(Clone, Debug)]
pub struct SyncHub {
    store: Arc<RwLock<CollectionStore>>,
    broadcast: SyncBroadcast,
}

impl SyncHub {
    /// Create a hub with empty collections
    ///
    /// `capacity` is the number of frames a connection may fall behind before
    /// it is re-hydrated.
    pub fn new(validation: ValidationMode, capacity: usize) -> Self {
        Self::from_store(CollectionStore::with_validation(validation), capacity)
    }

    pub fn from_store(store: CollectionStore, capacity: usize) -> Self {
        let (broadcast, _) = broadcast::channel(capacity.max(1));
        Self {
            store: Arc::new(RwLock::new(store)),
            broadcast,
        }
    }

    /// Full-state frame plus a receiver for every later update
    pub async fn hydrate(&self) -> (ServerMessage, broadcast::Receiver<ServerMessage>) {
        let store = self.store.read().await;
        let updates = self.broadcast.subscribe();
        let hydration = ServerMessage::InitAll {
            data: store.snapshot(),
        };
        (hydration, updates)
    }

    /// Apply a proposal and fan the new collection value out to everyone
    pub async fn apply(&self, message: ClientMessage) -> Result<Applied, ProtocolError> {
        let mut store = self.store.write().await;
        let applied = store.apply(message)?;
        let receivers = broadcast_sync(
            &self.broadcast,
            ServerMessage::Sync {
                collection: applied.collection,
                data: applied.records.clone(),
            },
        );
        tracing::debug!(
            "[Sync] {} now has {} records ({:?}), sent to {} connections",
            applied.collection,
            applied.records.len(),
            applied.outcome,
            receivers
        );
        Ok(applied)
    }

    /// Decode a raw text frame from a client and apply it
    pub async fn apply_frame(&self, text: &str) -> Result<Applied, ProtocolError> {
        let message = ClientMessage::decode(text)?;
        self.apply(message).await
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.store.read().await.snapshot()
    }

    pub async fn collection(&self, collection: CollectionName) -> Vec<Record> {
        self.store.read().await.get(collection).to_vec()
    }

    /// Number of connections currently subscribed to updates
    pub fn subscriber_count(&self) -> usize {
        self.broadcast.receiver_count()
    }
}

impl Default for SyncHub {
    fn default() -> Self {
        Self::new(ValidationMode::default(), 1000)
    }
}
