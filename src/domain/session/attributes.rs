//! Typed session attributes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{SessionId, Timestamp};

/// Well-known attribute keys.
pub mod keys {
    /// Address on which the orchestrator expects notifications.
    pub const CALLBACK_URL: &str = "callbackURL";
    /// Session identifier assigned by the orchestrator itself, if it sent one.
    pub const TEST_SESSION_ID: &str = "testSessionId";
    /// Last message handed to the send action.
    pub const LAST_MESSAGE_SENT: &str = "lastMessageSent";
}

/// Value stored under a session attribute key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Blob(Vec<u8>),
}

impl AttributeValue {
    /// Returns the string payload for `Text` values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Number(n)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Flag(b)
    }
}

impl From<Vec<u8>> for AttributeValue {
    fn from(bytes: Vec<u8>) -> Self {
        AttributeValue::Blob(bytes)
    }
}

/// Attribute bag owned by the registry for one session.
pub type SessionAttributes = HashMap<String, AttributeValue>;

/// Point-in-time copy of one registry entry.
///
/// Mutating a snapshot never touches live registry state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub created_at: Timestamp,
    pub attributes: SessionAttributes,
}

impl SessionSnapshot {
    /// Callback address recorded for the session, if any.
    pub fn callback_url(&self) -> Option<&str> {
        self.attributes
            .get(keys::CALLBACK_URL)
            .and_then(AttributeValue::as_text)
    }
}
