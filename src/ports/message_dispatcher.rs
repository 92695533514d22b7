//! MessageDispatcher port - The external action behind `send`.
//!
//! What "sending" means is deployment specific (an email, an API call, a
//! queue publish). The core only needs to know whether it worked.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;

/// Failure of the send action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("dispatch failed: {0}")]
pub struct DispatchError(pub String);

/// Performs the outbound communication for a `send` command.
#[async_trait]
pub trait MessageDispatcher: Send + Sync {
    async fn dispatch(&self, session_id: &SessionId, message: &str) -> Result<(), DispatchError>;
}
