/**
 * Collection Binding
 *
 * A live mirror of one collection plus a way to propose changes to it.
 *
 * # Mirror
 *
 * The mirror starts empty (or with caller-supplied placeholder records) and
 * is only ever replaced wholesale by what the relay sends:
 *
 * - `init_all` that contains the bound collection replaces it
 * - `sync` for the bound collection replaces it
 * - anything else is ignored
 *
 * Local proposals never touch the mirror directly. A change becomes visible
 * when the relay echoes it back, so when two clients race, the mirror shows
 * whichever change the relay applied last.
 *
 * # Proposals
 *
 * Proposals are fire-and-forget. If the connection is closed the change is
 * dropped; nothing is queued or retried.
 */

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_stream::wrappers::WatchStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::client::config::ClientConfig;
use crate::client::error::ClientError;
use crate::shared::{ClientMessage, CollectionName, Record, ServerMessage, SyncData};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Whether proposals can currently reach the relay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Open,
    Closed,
}

/// Live binding to one collection on the relay
#[derive(Debug)]
pub struct CollectionBinding {
    collection: CollectionName,
    mirror: watch::Receiver<Vec<Record>>,
    state: Arc<watch::Sender<ConnectionState>>,
    outgoing: mpsc::UnboundedSender<Message>,
    reader: JoinHandle<()>,
}

impl CollectionBinding {
    /// Connect with an empty mirror
    pub async fn connect(
        config: &ClientConfig,
        collection: CollectionName,
    ) -> Result<Self, ClientError> {
        Self::connect_with_placeholder(config, collection, Vec::new()).await
    }

    /// Connect straight to `url`, which must be a `ws://` or `wss://` URL
    pub async fn connect_url(url: &str, collection: CollectionName) -> Result<Self, ClientError> {
        let config = ClientConfig::builder().server_url(url).build()?;
        Self::connect(&config, collection).await
    }

    /// Connect with the mirror seeded from `placeholder` until the relay
    /// hydrates it
    pub async fn connect_with_placeholder(
        config: &ClientConfig,
        collection: CollectionName,
        placeholder: Vec<Record>,
    ) -> Result<Self, ClientError> {
        let url = config.server_url();
        let (socket, _) = connect_async(url)
            .await
            .map_err(|e| ClientError::connect(url, e))?;
        tracing::info!("[Client] Bound to {} via {}", collection, url);
        Ok(Self::from_socket(socket, collection, placeholder))
    }

    fn from_socket(socket: Socket, collection: CollectionName, placeholder: Vec<Record>) -> Self {
        let (sink, stream) = socket.split();
        let (mirror_tx, mirror) = watch::channel(placeholder);
        let (state, _) = watch::channel(ConnectionState::Open);
        let state = Arc::new(state);
        let (outgoing, queue) = mpsc::unbounded_channel();

        let reader = tokio::spawn(read_updates(stream, collection, mirror_tx, state.clone()));
        tokio::spawn(write_proposals(sink, queue, state.clone()));

        Self {
            collection,
            mirror,
            state,
            outgoing,
            reader,
        }
    }

    pub fn collection(&self) -> CollectionName {
        self.collection
    }

    /// Latest mirrored value
    pub fn current(&self) -> Vec<Record> {
        self.mirror.borrow().clone()
    }

    /// Receiver notified on every mirror replacement
    pub fn subscribe(&self) -> watch::Receiver<Vec<Record>> {
        self.mirror.clone()
    }

    /// Stream of mirror values, starting with the current one
    pub fn changes(&self) -> WatchStream<Vec<Record>> {
        WatchStream::new(self.mirror.clone())
    }

    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    /// Propose a change to the bound collection
    ///
    /// Returns `true` if the frame was handed to the socket. That says
    /// nothing about whether the relay will accept it; watch the mirror for
    /// that.
    pub fn propose(&self, data: SyncData) -> bool {
        match self.try_propose(data) {
            Ok(()) => true,
            Err(ClientError::Closed(collection)) => {
                tracing::debug!("[Client] Dropped proposal for {}: connection closed", collection);
                false
            }
            Err(e) => {
                tracing::warn!("[Client] Dropped proposal for {}: {}", self.collection, e);
                false
            }
        }
    }

    /// Like [`propose`](Self::propose), but says why the frame was dropped
    pub fn try_propose(&self, data: SyncData) -> Result<(), ClientError> {
        if self.state() == ConnectionState::Closed {
            return Err(ClientError::Closed(self.collection));
        }

        let message = ClientMessage::Sync {
            collection: self.collection,
            data,
        };
        let text = message.encode()?;

        self.outgoing
            .send(Message::text(text))
            .map_err(|_| ClientError::Closed(self.collection))
    }

    /// Propose replacing the whole collection
    pub fn propose_replace(&self, records: Vec<Record>) -> bool {
        self.propose(SyncData::Replace(records))
    }

    /// Propose inserting or updating one record by `id`
    pub fn propose_upsert(&self, record: Record) -> bool {
        self.propose(SyncData::Upsert(record))
    }

    /// Close the connection; later proposals are dropped
    pub fn close(&self) {
        if self.state.send_replace(ConnectionState::Closed) == ConnectionState::Open {
            tracing::info!("[Client] Closing binding to {}", self.collection);
            let _ = self.outgoing.send(Message::Close(None));
        }
    }
}

impl Drop for CollectionBinding {
    fn drop(&mut self) {
        self.close();
        self.reader.abort();
    }
}

async fn read_updates(
    mut stream: SplitStream<Socket>,
    collection: CollectionName,
    mirror: watch::Sender<Vec<Record>>,
    state: Arc<watch::Sender<ConnectionState>>,
) {
    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => match ServerMessage::decode(text.as_str()) {
                Ok(message) => apply_update(collection, &mirror, message),
                Err(e) => tracing::warn!("[Client] Ignored frame for {}: {}", collection, e),
            },
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::debug!("[Client] Read for {} failed: {}", collection, e);
                break;
            }
        }
    }
    state.send_replace(ConnectionState::Closed);
    tracing::info!("[Client] Connection for {} closed", collection);
}

fn apply_update(collection: CollectionName, mirror: &watch::Sender<Vec<Record>>, message: ServerMessage) {
    match message {
        ServerMessage::InitAll { mut data } => {
            if let Some(records) = data.remove(collection.as_str()) {
                mirror.send_replace(records);
            }
        }
        ServerMessage::Sync {
            collection: changed,
            data,
        } if changed == collection => {
            mirror.send_replace(data);
        }
        ServerMessage::Sync { .. } => {}
    }
}

async fn write_proposals(
    mut sink: SplitSink<Socket, Message>,
    mut queue: mpsc::UnboundedReceiver<Message>,
    state: Arc<watch::Sender<ConnectionState>>,
) {
    while let Some(message) = queue.recv().await {
        let closing = matches!(message, Message::Close(_));
        if let Err(e) = sink.send(message).await {
            tracing::debug!("[Client] Send failed: {}", e);
            break;
        }
        if closing {
            break;
        }
    }
    state.send_replace(ConnectionState::Closed);
}
