//! ReceiveHandler - The orchestrator announces it expects a message.
//!
//! Nothing is stored; the session id only correlates the log entry.

use tracing::info;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;

#[derive(Debug, Clone)]
pub struct ReceiveCommand {
    pub session_id: SessionId,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiveHandler;

impl ReceiveHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(&self, cmd: ReceiveCommand) -> Result<(), SessionError> {
        info!(session_id = %cmd.session_id, "Received 'receive' command from test bed");
        Ok(())
    }
}
