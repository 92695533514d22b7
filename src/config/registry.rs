//! Session registry configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest accepted session TTL (one year).
pub const MAX_SESSION_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Session lifetime settings
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Maximum session age in seconds, 1..=`MAX_SESSION_TTL_SECS`.
    /// Unset means sessions live until finalized.
    #[serde(default)]
    pub session_ttl_secs: Option<u64>,

    /// How often expired sessions are swept, in seconds
    #[serde(default = "default_reap_interval")]
    pub reap_interval_secs: u64,
}

impl RegistryConfig {
    pub fn session_ttl(&self) -> Option<Duration> {
        self.session_ttl_secs.map(Duration::from_secs)
    }

    pub fn reap_interval(&self) -> Duration {
        Duration::from_secs(self.reap_interval_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(ttl) = self.session_ttl_secs {
            if ttl == 0 || ttl > MAX_SESSION_TTL_SECS {
                return Err(ValidationError::InvalidSessionTtl {
                    max: MAX_SESSION_TTL_SECS,
                });
            }
        }
        if self.reap_interval_secs == 0 {
            return Err(ValidationError::InvalidReapInterval);
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: None,
            reap_interval_secs: default_reap_interval(),
        }
    }
}

fn default_reap_interval() -> u64 {
    60
}
