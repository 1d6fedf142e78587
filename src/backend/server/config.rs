/**
 * Server Configuration
 *
 * Settings for the relay process: where it listens, where the built web
 * client lives, how far a connection may fall behind, and how strictly
 * incoming records are checked.
 *
 * # Configuration Sources
 *
 * 1. Defaults (`0.0.0.0:3000`, `dist/`, lenient validation)
 * 2. A TOML file, if `WARROOM_CONFIG` names one
 * 3. Environment variables, which override the file:
 *    `SERVER_HOST`, `SERVER_PORT`, `STATIC_DIR`, `BROADCAST_CAPACITY`,
 *    `RECORD_VALIDATION`
 *
 * `SERVER_HOST` may be an IP literal or a host name; names are resolved
 * when the server binds.
 *
 * # Example file
 *
 * ```toml
 * port = 3000
 * static_dir = "dist"
 * validation = "strict"
 * ```
 */

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable naming an optional TOML config file
pub const CONFIG_FILE_ENV: &str = "WARROOM_CONFIG";

/// How incoming records are checked before they are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Accept any JSON record
    #[default]
    Lenient,
    /// Records must match their collection's schema
    Strict,
}

impl FromStr for ValidationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(ValidationMode::Lenient),
            "strict" => Ok(ValidationMode::Strict),
            other => Err(ConfigError::invalid("RECORD_VALIDATION", other)),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to resolve {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            value: value.into(),
        }
    }
}

/// Relay server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Directory holding the built web client
    pub static_dir: PathBuf,
    /// Frames a connection may fall behind before it is re-hydrated
    pub broadcast_capacity: usize,
    /// Record validation mode
    pub validation: ValidationMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: PathBuf::from("dist"),
            broadcast_capacity: 1000,
            validation: ValidationMode::Lenient,
        }
    }
}

impl ServerConfig {
    /// Load from the optional config file, then apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) => {
                tracing::info!("Loading configuration from {}", path);
                Self::from_file(path)?
            }
            Err(_) => Self::default(),
        };
        let config = base.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply overrides from a key lookup (the environment, in production)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("SERVER_PORT", port))?;
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.static_dir = PathBuf::from(dir);
        }
        if let Some(capacity) = lookup("BROADCAST_CAPACITY") {
            self.broadcast_capacity = capacity
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("BROADCAST_CAPACITY", capacity))?;
        }
        if let Some(mode) = lookup("RECORD_VALIDATION") {
            self.validation = mode.parse()?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.broadcast_capacity == 0 {
            return Err(ConfigError::invalid("broadcast_capacity", "0"));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::invalid("SERVER_HOST", self.host.clone()));
        }
        Ok(())
    }

    /// Resolve `host:port` to the address to bind
    ///
    /// `host` may be an IP literal or a name such as `localhost`; the first
    /// resolved address wins.
    pub async fn resolve_addr(&self) -> Result<SocketAddr, ConfigError> {
        let resolve_error = |source| ConfigError::Resolve {
            host: self.host.clone(),
            source,
        };
        let mut addrs = tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(resolve_error)?;
        addrs.next().ok_or_else(|| {
            resolve_error(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no addresses found",
            ))
        })
    }
}
