//! Transaction marker handlers.
//!
//! Begin and end only mark the transaction boundaries in the log.

use tracing::info;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;

#[derive(Debug, Clone)]
pub struct BeginTransactionCommand {
    pub session_id: SessionId,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EndTransactionCommand {
    pub session_id: SessionId,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BeginTransactionHandler;

impl BeginTransactionHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(&self, cmd: BeginTransactionCommand) -> Result<(), SessionError> {
        info!(
            session_id = %cmd.session_id,
            from = cmd.from.as_deref().unwrap_or_default(),
            to = cmd.to.as_deref().unwrap_or_default(),
            "Transaction starting"
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EndTransactionHandler;

impl EndTransactionHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(&self, cmd: EndTransactionCommand) -> Result<(), SessionError> {
        info!(session_id = %cmd.session_id, "Transaction ending");
        Ok(())
    }
}
