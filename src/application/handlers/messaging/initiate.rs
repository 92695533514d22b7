//! InitiateHandler - Opens a session for a new orchestrator test session.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::SessionId;
use crate::domain::session::{keys, SessionError};
use crate::ports::SessionRegistry;

/// Configuration the orchestrator supplies for one actor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorConfiguration {
    pub actor: String,
    pub endpoint: Option<String>,
    pub parameters: HashMap<String, String>,
}

/// Command to start a session.
#[derive(Debug, Clone, Default)]
pub struct InitiateCommand {
    /// Address notifications for this session go to.
    pub callback_url: Option<String>,
    /// The orchestrator's own id for its test session, if it sent one.
    pub test_session_id: Option<String>,
    pub actor_configuration: Vec<ActorConfiguration>,
}

/// Result of a successful initiate.
#[derive(Debug, Clone)]
pub struct InitiateResult {
    pub session_id: SessionId,
    /// Configuration to show the orchestrator's user. This stub generates none.
    pub configuration: Vec<ActorConfiguration>,
}

/// Handler for initiate.
pub struct InitiateHandler {
    registry: Arc<dyn SessionRegistry>,
}

impl InitiateHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, cmd: InitiateCommand) -> Result<InitiateResult, SessionError> {
        let session_id = self.registry.create(cmd.callback_url.as_deref())?;

        if let Some(test_session_id) = cmd.test_session_id {
            self.registry
                .set_attribute(&session_id, keys::TEST_SESSION_ID, test_session_id.into())?;
        }

        info!(
            session_id = %session_id,
            callback = cmd.callback_url.as_deref().unwrap_or_default(),
            actors = cmd.actor_configuration.len(),
            "Initiated a new session"
        );

        Ok(InitiateResult {
            session_id,
            configuration: Vec::new(),
        })
    }
}
