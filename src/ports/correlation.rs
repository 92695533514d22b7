//! CorrelationSource port - Field lookup on inbound transport metadata.
//!
//! Command handlers never see transport envelopes. The transport adapter
//! resolves the callback address and orchestrator session id through this
//! lookup and hands the core plain strings.

use std::collections::HashMap;

/// Field holding the address notifications must be sent to.
pub const REPLY_TO_FIELD: &str = "x-reply-to";
/// Field holding the orchestrator's own session identifier.
pub const TEST_SESSION_ID_FIELD: &str = "x-test-session-id";

/// Read-only view of the metadata that came with an inbound command.
pub trait CorrelationSource {
    /// Trimmed value of `name`, or `None` when absent or blank.
    fn field(&self, name: &str) -> Option<String>;
}

impl CorrelationSource for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_lookup_trims_and_drops_blanks() {
        let mut fields = HashMap::new();
        fields.insert(REPLY_TO_FIELD.to_string(), "  http://cb/notify ".to_string());
        fields.insert(TEST_SESSION_ID_FIELD.to_string(), "   ".to_string());

        assert_eq!(fields.field(REPLY_TO_FIELD).as_deref(), Some("http://cb/notify"));
        assert_eq!(fields.field(TEST_SESSION_ID_FIELD), None);
        assert_eq!(fields.field("missing"), None);
    }
}
