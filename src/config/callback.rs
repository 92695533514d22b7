//! Callback delivery configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Settings for outbound notification delivery
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackConfig {
    /// Timeout for a single delivery attempt, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Outbound proxy
    #[serde(default)]
    pub proxy: ProxyConfig,
}

/// Proxy protocol
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProxyKind {
    #[default]
    Http,
    Socks5,
}

impl ProxyKind {
    pub fn scheme(&self) -> &'static str {
        match self {
            ProxyKind::Http => "http",
            ProxyKind::Socks5 => "socks5",
        }
    }
}

/// Outbound proxy used for callback delivery
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProxyConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub server: String,

    #[serde(default)]
    pub port: u16,

    #[serde(default)]
    pub kind: ProxyKind,

    #[serde(default)]
    pub auth_enabled: bool,

    #[serde(default)]
    pub username: String,

    /// Proxy password, never logged
    #[serde(default)]
    pub password: Option<Secret<String>>,

    /// Hosts reached directly, separated by `,` or `|`
    #[serde(default)]
    pub non_proxy_hosts: String,
}

impl CallbackConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidCallbackTimeout);
        }
        self.proxy.validate()
    }
}

impl Default for CallbackConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            proxy: ProxyConfig::default(),
        }
    }
}

impl ProxyConfig {
    /// Proxy URL, e.g. `http://proxy.local:3128`
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.kind.scheme(), self.server, self.port)
    }

    /// Password as plain text, empty when unset
    pub fn password(&self) -> &str {
        self.password
            .as_ref()
            .map(|p| p.expose_secret().as_str())
            .unwrap_or("")
    }

    /// Non-proxy hosts normalised to a comma-separated list
    pub fn non_proxy_hosts_list(&self) -> Option<String> {
        let hosts: Vec<&str> = self
            .non_proxy_hosts
            .split(|c: char| c == ',' || c == '|')
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .collect();
        if hosts.is_empty() {
            None
        } else {
            Some(hosts.join(","))
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.enabled {
            return Ok(());
        }
        if self.server.trim().is_empty() {
            return Err(ValidationError::MissingProxyServer);
        }
        if self.port == 0 {
            return Err(ValidationError::InvalidProxyPort);
        }
        if self.auth_enabled && self.username.is_empty() {
            return Err(ValidationError::MissingProxyCredentials);
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    30
}
