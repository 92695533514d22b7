//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid callback timeout")]
    InvalidCallbackTimeout,

    #[error("Proxy server must be set when the proxy is enabled")]
    MissingProxyServer,

    #[error("Invalid proxy port")]
    InvalidProxyPort,

    #[error("Proxy credentials required when proxy auth is enabled")]
    MissingProxyCredentials,

    #[error("Session TTL must be between 1 and {max} seconds")]
    InvalidSessionTtl { max: u64 },

    #[error("Reap interval must be greater than zero")]
    InvalidReapInterval,
}
