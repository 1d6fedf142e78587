//! Open connection bookkeeping.
//!
//! The relay does not need to know who is connected to fan out (the broadcast
//! channel takes care of that), but it counts open connections for logging and
//! for `/health`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Shared counter of open WebSocket connections
#[derive(Clone, Debug, Default)]
pub struct ConnectionTracker {
    open: Arc<AtomicUsize>,
}

impl ConnectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new connection; the returned guard releases it on drop
    pub fn open(&self) -> ConnectionGuard {
        let open = self.open.fetch_add(1, Ordering::SeqCst) + 1;
        let id = Uuid::new_v4();
        tracing::info!("[Realtime] Client {} connected ({} open)", id, open);
        ConnectionGuard {
            id,
            open: self.open.clone(),
        }
    }

    pub fn open_count(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }
}

/// Handle for one open connection
#[derive(Debug)]
pub struct ConnectionGuard {
    id: Uuid,
    open: Arc<AtomicUsize>,
}

impl ConnectionGuard {
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        let open = self.open.fetch_sub(1, Ordering::SeqCst) - 1;
        tracing::info!("[Realtime] Client {} disconnected ({} open)", self.id, open);
    }
}
