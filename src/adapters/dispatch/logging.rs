//! Logging dispatcher - Stands in for the real outbound communication.
//!
//! A concrete deployment replaces this with the protocol it simulates
//! (email, an API call, ...). This one only records that the send happened.

use async_trait::async_trait;
use tracing::info;

use crate::domain::foundation::SessionId;
use crate::ports::{DispatchError, MessageDispatcher};

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingDispatcher;

#[async_trait]
impl MessageDispatcher for LoggingDispatcher {
    async fn dispatch(&self, session_id: &SessionId, message: &str) -> Result<(), DispatchError> {
        info!(session_id = %session_id, message, "Message sent");
        Ok(())
    }
}
