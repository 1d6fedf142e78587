//! Client configuration
//!
//! Where the binding connects. Defaults to a relay on localhost; the
//! `WARROOM_SERVER_URL` environment variable overrides the default, and the
//! builder overrides both.

use thiserror::Error;

/// Default relay WebSocket URL
pub const DEFAULT_SERVER_URL: &str = "ws://127.0.0.1:3000/ws";

/// Environment variable consulted by [`ClientConfig::default`]
pub const SERVER_URL_ENV: &str = "WARROOM_SERVER_URL";

/// Client binding configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    server_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let server_url =
            std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self { server_url }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// WebSocket URL of the relay's sync endpoint
    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

/// Builder for ClientConfig
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    server_url: Option<String>,
}

impl ClientConfigBuilder {
    /// Set the server URL (`ws://` or `wss://`)
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let server_url = match self.server_url {
            Some(url) => url,
            None => return Ok(ClientConfig::default()),
        };
        if server_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("server_url"));
        }
        if !(server_url.starts_with("ws://") || server_url.starts_with("wss://")) {
            return Err(ConfigError::InvalidUrl(server_url));
        }
        Ok(ClientConfig { server_url })
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL (expected ws:// or wss://): {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
