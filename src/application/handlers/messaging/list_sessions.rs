//! ListSessionsHandler - Read-only view of the live sessions.

use std::sync::Arc;

use crate::domain::session::SessionSnapshot;
use crate::ports::SessionRegistry;

pub struct ListSessionsHandler {
    registry: Arc<dyn SessionRegistry>,
}

impl ListSessionsHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Snapshot ordered by creation time, oldest first.
    pub fn handle(&self) -> Vec<SessionSnapshot> {
        let mut sessions = self.registry.snapshot();
        sessions.sort_by_key(|s| s.created_at);
        sessions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::registry::InMemorySessionRegistry;

    #[test]
    fn lists_every_live_session() {
        let registry = Arc::new(InMemorySessionRegistry::new());
        let first = registry.create(Some("http://cb.example/a")).unwrap();
        let second = registry.create(Some("http://cb.example/b")).unwrap();
        registry.destroy(&first);

        let sessions = ListSessionsHandler::new(registry).handle();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].session_id, second);
    }
}
