// ABOUTME: Configuration loading for the homehub server.
// ABOUTME: Reads HOMEHUB_* environment variables and validates the bind address.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOMEHUB_BIND is not a valid socket address: {0}")]
    InvalidBind(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct HomehubConfig {
    pub bind: SocketAddr,
    pub seed_file: Option<PathBuf>,
}

impl HomehubConfig {
    /// Load configuration from the process environment.
    ///
    /// Environment variables:
    /// - HOMEHUB_BIND: socket address to bind (default: 127.0.0.1:8080)
    /// - HOMEHUB_SEED_FILE: JSON or YAML device list (default: built-in devices)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_str = lookup("HOMEHUB_BIND")
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_str
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str.clone()))?;

        let seed_file = lookup("HOMEHUB_SEED_FILE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self { bind, seed_file })
    }
}
