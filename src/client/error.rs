use thiserror::Error;

use crate::client::config::ConfigError;
use crate::shared::CollectionName;

/// Errors surfaced by the client binding
///
/// Connecting fails loudly. Once a binding is open, `propose*` only report a
/// boolean; [`CollectionBinding::try_propose`](crate::client::CollectionBinding::try_propose)
/// says why a proposal never reached the socket.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to encode proposal: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Binding to '{0}' is closed")]
    Closed(CollectionName),
}

impl ClientError {
    pub fn connect(url: impl Into<String>, source: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::Connect {
            url: url.into(),
            source,
        }
    }
}
