//! Service identity configuration

use serde::Deserialize;

/// Identity reported by describe-module
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Module identifier
    #[serde(default = "default_id")]
    pub id: String,

    /// Module version
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            id: default_id(),
            version: default_version(),
        }
    }
}

fn default_id() -> String {
    "messaging-stub".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
