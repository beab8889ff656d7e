// ABOUTME: Configuration loading for the itemd server.
// ABOUTME: Reads the bind address and CORS toggle from environment variables.

use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ITEMD_BIND is not a valid socket address: {0}")]
    InvalidBind(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ItemdConfig {
    pub bind: SocketAddr,
    pub cors: bool,
}

impl ItemdConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - ITEMD_BIND: socket address to bind (default: 127.0.0.1:8000)
    /// - ITEMD_CORS: answer cross-origin requests from any origin (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind = parse_bind(
            &std::env::var("ITEMD_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()),
        )?;

        let cors = std::env::var("ITEMD_CORS")
            .map(|v| v == "true" || v == "1" || v == "yes")
            .unwrap_or(false);

        Ok(Self { bind, cors })
    }
}

/// Parse a socket address, reporting the offending input on failure.
pub fn parse_bind(raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::InvalidBind(raw.to_string()))
}
