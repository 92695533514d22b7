//! FinalizeHandler - Tears a session down when the orchestrator is done.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::SessionRegistry;

#[derive(Debug, Clone)]
pub struct FinalizeCommand {
    pub session_id: SessionId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalizeResult {
    /// `false` when the session was already gone.
    pub destroyed: bool,
}

/// Handler for finalize. Repeating it is harmless.
pub struct FinalizeHandler {
    registry: Arc<dyn SessionRegistry>,
}

impl FinalizeHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, cmd: FinalizeCommand) -> Result<FinalizeResult, SessionError> {
        info!(session_id = %cmd.session_id, "Finalising session");
        let destroyed = self.registry.destroy(&cmd.session_id);
        Ok(FinalizeResult { destroyed })
    }
}
