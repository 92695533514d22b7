//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MESSAGING_STUB` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use messaging_stub::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod callback;
mod error;
mod registry;
mod server;
mod service;

pub use callback::{CallbackConfig, ProxyConfig, ProxyKind};
pub use error::{ConfigError, ValidationError};
pub use registry::{RegistryConfig, MAX_SESSION_TTL_SECS};
pub use server::{Environment, LogFormat, ServerConfig};
pub use service::ServiceConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Module identity reported by describe-module
    #[serde(default)]
    pub service: ServiceConfig,

    /// Callback delivery (timeout, proxy)
    #[serde(default)]
    pub callback: CallbackConfig,

    /// Session lifetime
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MESSAGING_STUB` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MESSAGING_STUB__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MESSAGING_STUB__CALLBACK__PROXY__ENABLED=true` -> `callback.proxy.enabled = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MESSAGING_STUB")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.callback.validate()?;
        self.registry.validate()?;
        Ok(())
    }
}
