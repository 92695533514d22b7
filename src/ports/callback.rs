//! Callback port - Interface for delivering notifications to the orchestrator.
//!
//! A `CallbackConnector` turns a callback address into a `CallbackClient`
//! bound to it. Connecting is where malformed addresses are caught; the
//! client is then reused for every delivery attempt of one notification.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionId;
use crate::domain::report::Report;

/// Notification message sent to the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyForMessageRequest {
    pub session_id: SessionId,
    pub report: Report,
}

impl NotifyForMessageRequest {
    pub fn new(session_id: SessionId, report: Report) -> Self {
        Self { session_id, report }
    }
}

/// Failure to build a client for a callback address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectError {
    #[error("invalid callback address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("failed to configure callback client: {0}")]
    Configuration(String),
}

/// Failure of a single delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("network error: {0}")]
    Network(String),

    #[error("callback timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("callback rejected notification with status {status}")]
    Rejected { status: u16 },
}

/// Builds clients bound to callback addresses.
pub trait CallbackConnector: Send + Sync {
    /// Creates a client for `address`.
    ///
    /// # Errors
    ///
    /// Returns `ConnectError` when the address cannot be used at all.
    fn connect(&self, address: &str) -> Result<Box<dyn CallbackClient>, ConnectError>;
}

/// Client bound to one callback address.
#[async_trait]
pub trait CallbackClient: Send + Sync {
    /// Delivers one notification. Blocks until the orchestrator answers or
    /// the transport gives up.
    async fn notify_for_message(&self, request: &NotifyForMessageRequest)
        -> Result<(), DeliveryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_in_camel_case() {
        let id = SessionId::new("s-1").unwrap();
        let json = serde_json::to_value(NotifyForMessageRequest::new(id, Report::success())).unwrap();
        assert_eq!(json["sessionId"], "s-1");
        assert_eq!(json["report"]["result"], "SUCCESS");
    }

    #[test]
    fn delivery_error_messages() {
        assert!(DeliveryError::Timeout { timeout_secs: 5 }.to_string().contains("5s"));
        assert!(DeliveryError::Rejected { status: 503 }.to_string().contains("503"));
    }
}
