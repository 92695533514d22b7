//! In-Memory Session Registry Adapter
//!
//! Stores session state in a `DashMap`. The map is split into independently
//! locked shards, so commands for unrelated sessions do not serialize on a
//! single lock, while every operation on one id runs under that id's shard
//! lock and is therefore linearizable.
//!
//! Known hazard: nothing delays `destroy` until in-flight notifications for
//! the same session are done. A notification that loses that race sees an
//! unknown session and is dropped as a missing callback.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::{
    keys, AttributeValue, SessionAttributes, SessionError, SessionSnapshot,
};
use crate::ports::SessionRegistry;

#[derive(Debug, Clone)]
struct SessionEntry {
    created_at: Timestamp,
    attributes: SessionAttributes,
}

/// In-memory registry of live sessions. Cheap to clone; clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRegistry {
    sessions: Arc<DashMap<SessionId, SessionEntry>>,
}

impl InMemorySessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRegistry for InMemorySessionRegistry {
    fn create(&self, callback_url: Option<&str>) -> Result<SessionId, SessionError> {
        let callback_url = callback_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                SessionError::invalid_argument(keys::CALLBACK_URL, "A callback URL must be provided")
            })?;

        loop {
            let id = SessionId::generate();
            // A v4 collision is practically impossible, but a live id must never be reused.
            if let Entry::Vacant(slot) = self.sessions.entry(id.clone()) {
                let mut attributes = SessionAttributes::new();
                attributes.insert(keys::CALLBACK_URL.to_string(), callback_url.into());
                slot.insert(SessionEntry {
                    created_at: Timestamp::now(),
                    attributes,
                });
                info!(session_id = %id, callback = %callback_url, "Session created");
                return Ok(id);
            }
        }
    }

    fn destroy(&self, id: &SessionId) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            info!(session_id = %id, "Session destroyed");
        } else {
            debug!(session_id = %id, "Destroy requested for unknown session");
        }
        removed
    }

    fn get_attribute(&self, id: &SessionId, key: &str) -> Option<AttributeValue> {
        self.sessions
            .get(id)
            .and_then(|entry| entry.attributes.get(key).cloned())
    }

    fn set_attribute(
        &self,
        id: &SessionId,
        key: &str,
        value: AttributeValue,
    ) -> Result<(), SessionError> {
        match self.sessions.get_mut(id) {
            Some(mut entry) => {
                entry.attributes.insert(key.to_string(), value);
                debug!(session_id = %id, key, "Session attribute set");
                Ok(())
            }
            None => Err(SessionError::not_found(id.clone())),
        }
    }

    fn get(&self, id: &SessionId) -> Option<SessionSnapshot> {
        self.sessions.get(id).map(|entry| SessionSnapshot {
            session_id: id.clone(),
            created_at: entry.created_at,
            attributes: entry.attributes.clone(),
        })
    }

    fn snapshot(&self) -> Vec<SessionSnapshot> {
        self.sessions
            .iter()
            .map(|entry| SessionSnapshot {
                session_id: entry.key().clone(),
                created_at: entry.created_at,
                attributes: entry.attributes.clone(),
            })
            .collect()
    }

    fn reap_created_before(&self, cutoff: Timestamp) -> Vec<SessionId> {
        let mut reaped = Vec::new();
        self.sessions.retain(|id, entry| {
            if entry.created_at.is_before(&cutoff) {
                reaped.push(id.clone());
                false
            } else {
                true
            }
        });
        reaped
    }

    fn clear(&self) -> usize {
        let mut removed = 0;
        self.sessions.retain(|_, _| {
            removed += 1;
            false
        });
        removed
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
