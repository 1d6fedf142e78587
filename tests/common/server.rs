//! Relay server helpers for integration tests
//!
//! Runs the real router on `127.0.0.1:0` so tests never collide on ports.

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use warroom::backend::server::{create_app, ServerConfig, ValidationMode};

/// A relay running in the background for the duration of a test
pub struct TestServer {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a relay with default settings
    pub async fn start() -> Self {
        Self::with_config(ServerConfig::default()).await
    }

    /// Start a relay that validates records against their schemas
    pub async fn strict() -> Self {
        Self::with_config(ServerConfig {
            validation: ValidationMode::Strict,
            ..ServerConfig::default()
        })
        .await
    }

    pub async fn with_config(config: ServerConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = create_app(config);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, handle }
    }

    /// URL of the sync WebSocket
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
