//! Module definition advertised to the orchestrator.
//!
//! Describes how the service is meant to be called: its identity and the
//! named parameters it accepts and produces.

use serde::Serialize;

/// Name of the input carrying the message to send.
pub const INPUT_MESSAGE: &str = "messageToSend";
/// Name of the output carrying a received message.
pub const OUTPUT_MESSAGE: &str = "messageReceived";

/// Whether a parameter must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Usage {
    Required,
    Optional,
}

/// How a parameter value is provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigurationKind {
    Simple,
    Binary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedParameter {
    pub name: String,
    pub data_type: String,
    pub usage: Usage,
    pub kind: ConfigurationKind,
    pub description: String,
}

impl TypedParameter {
    /// Optional simple string parameter.
    pub fn optional_string(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            data_type: "string".to_string(),
            usage: Usage::Optional,
            kind: ConfigurationKind::Simple,
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleMetadata {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDefinition {
    pub id: String,
    pub metadata: ModuleMetadata,
    pub inputs: Vec<TypedParameter>,
}

impl ModuleDefinition {
    /// Definition of the messaging module for the given identity.
    pub fn messaging(id: impl Into<String>, version: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            metadata: ModuleMetadata {
                name: id.clone(),
                version: version.into(),
            },
            id,
            inputs: vec![
                TypedParameter::optional_string(INPUT_MESSAGE, "The message to send."),
                TypedParameter::optional_string(OUTPUT_MESSAGE, "The received message."),
            ],
        }
    }
}
