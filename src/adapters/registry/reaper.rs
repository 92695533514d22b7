//! SessionReaper - Background expiry for sessions that are never finalized.
//!
//! Sessions normally live from `initiate` until `finalize`. When the
//! orchestrator never sends `finalize`, the entry would stay forever; the
//! reaper removes entries older than a configured time-to-live.
//!
//! ## Graceful Shutdown
//!
//! The loop listens on a watch channel and exits once `true` is sent or the
//! sender is dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing::{debug, info};

use crate::domain::foundation::Timestamp;
use crate::ports::SessionRegistry;

/// Periodically removes sessions older than `ttl`.
pub struct SessionReaper {
    registry: Arc<dyn SessionRegistry>,
    ttl: Duration,
    interval: Duration,
}

impl SessionReaper {
    pub fn new(registry: Arc<dyn SessionRegistry>, ttl: Duration, interval: Duration) -> Self {
        Self {
            registry,
            ttl,
            interval,
        }
    }

    /// Runs one sweep and returns how many sessions were removed.
    pub fn sweep(&self) -> usize {
        let Some(cutoff) = Timestamp::now().checked_minus(self.ttl) else {
            debug!(
                ttl_secs = self.ttl.as_secs(),
                "Session TTL reaches past the earliest timestamp, nothing to reap"
            );
            return 0;
        };
        let reaped = self.registry.reap_created_before(cutoff);
        for id in &reaped {
            info!(session_id = %id, ttl_secs = self.ttl.as_secs(), "Expired session reaped");
        }
        debug!(reaped = reaped.len(), live = self.registry.len(), "Session sweep complete");
        reaped.len()
    }

    /// Sweep every `interval` until shutdown is signalled.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.interval);
        // The first tick completes immediately; skip it so a fresh service does not sweep at boot.
        interval.tick().await;

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        debug!("Session reaper stopping");
                        return;
                    }
                }
                _ = interval.tick() => {
                    self.sweep();
                }
            }
        }
    }
}
