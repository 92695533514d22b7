//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Opaque identifier of a messaging session.
///
/// Fresh ids are always generated server-side from a random 128-bit UUID.
/// Ids coming back from the orchestrator are accepted as opaque strings, so
/// an id this process never issued simply behaves as an unknown session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a new random SessionId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an id received from a caller.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("sessionId"));
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_uuids() {
        let id = SessionId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn empty_id_is_rejected() {
        assert!(SessionId::new("").is_err());
        assert!(SessionId::new("   ").is_err());
    }

    #[test]
    fn foreign_ids_are_kept_verbatim() {
        let id: SessionId = "tb-session-42".parse().unwrap();
        assert_eq!(id.as_str(), "tb-session-42");
        assert_eq!(id.to_string(), "tb-session-42");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = SessionId::new("abc").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }

    proptest! {
        #[test]
        fn generated_ids_never_collide(count in 1usize..500) {
            let ids: HashSet<SessionId> = (0..count).map(|_| SessionId::generate()).collect();
            prop_assert_eq!(ids.len(), count);
        }
    }
}
