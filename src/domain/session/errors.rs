//! Session-specific error types.

use thiserror::Error;

use crate::domain::foundation::{SessionId, ValidationError};

/// Errors raised by session registry operations and protocol commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Missing or malformed caller input. Raised before any state change.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    /// The session id is not known to the registry.
    #[error("Session not found: {0}")]
    NotFound(SessionId),
}

impl SessionError {
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }

    /// Stable code used in HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            SessionError::NotFound(_) => "SESSION_NOT_FOUND",
        }
    }
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::InvalidArgument {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
