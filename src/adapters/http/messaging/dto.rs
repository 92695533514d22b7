//! HTTP DTOs for messaging endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::application::handlers::{ActorConfiguration, NamedValue};
use crate::domain::report::Report;
use crate::domain::session::{SessionError, SessionSnapshot};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A name/value pair as the orchestrator sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedValueDto {
    pub name: String,
    pub value: String,
}

impl From<NamedValueDto> for NamedValue {
    fn from(dto: NamedValueDto) -> Self {
        NamedValue::new(dto.name, dto.value)
    }
}

/// Per-actor configuration supplied with initiate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorConfigurationDto {
    pub actor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub config: Vec<NamedValueDto>,
}

impl From<ActorConfigurationDto> for ActorConfiguration {
    fn from(dto: ActorConfigurationDto) -> Self {
        Self {
            actor: dto.actor,
            endpoint: dto.endpoint,
            parameters: dto
                .config
                .into_iter()
                .map(|p| (p.name, p.value))
                .collect::<HashMap<_, _>>(),
        }
    }
}

impl From<ActorConfiguration> for ActorConfigurationDto {
    fn from(config: ActorConfiguration) -> Self {
        let mut parameters: Vec<NamedValueDto> = config
            .parameters
            .into_iter()
            .map(|(name, value)| NamedValueDto { name, value })
            .collect();
        parameters.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            actor: config.actor,
            endpoint: config.endpoint,
            config: parameters,
        }
    }
}

/// Request to initiate a session.
///
/// The callback normally arrives in the `x-reply-to` header; `replyTo` is
/// the fallback for clients that cannot set headers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateRequest {
    #[serde(default)]
    pub reply_to: Option<String>,
    #[serde(default)]
    pub actor_configuration: Vec<ActorConfigurationDto>,
}

/// Request to perform a send.
#[derive(Debug, Clone, Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub inputs: Vec<NamedValueDto>,
}

/// Optional body of begin-transaction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionRequest {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

/// A message received from the system under test.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundRequest {
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateResponse {
    pub session_id: String,
    pub configuration: Vec<ActorConfigurationDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendResponse {
    pub report: Report,
}

/// Acknowledgement for commands without a payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeResponse {
    pub session_id: String,
    pub destroyed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionSnapshot>,
    pub total: usize,
}

impl From<Vec<SessionSnapshot>> for SessionListResponse {
    fn from(sessions: Vec<SessionSnapshot>) -> Self {
        Self {
            total: sessions.len(),
            sessions,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&SessionError> for ErrorResponse {
    fn from(error: &SessionError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}
