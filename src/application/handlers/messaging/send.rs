//! SendHandler - Performs the outbound send for the orchestrator.
//!
//! Exactly one `messageToSend` input is accepted. A dispatch failure is not
//! a command error; it is reported back as a FAILURE report.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::SessionId;
use crate::domain::module::INPUT_MESSAGE;
use crate::domain::report::Report;
use crate::domain::session::{keys, SessionError};
use crate::ports::{MessageDispatcher, SessionRegistry};

/// A named input value supplied by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedValue {
    pub name: String,
    pub value: String,
}

impl NamedValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SendCommand {
    pub session_id: SessionId,
    pub inputs: Vec<NamedValue>,
}

#[derive(Debug, Clone)]
pub struct SendResult {
    pub report: Report,
}

/// Handler for send.
pub struct SendHandler {
    registry: Arc<dyn SessionRegistry>,
    dispatcher: Arc<dyn MessageDispatcher>,
}

impl SendHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, dispatcher: Arc<dyn MessageDispatcher>) -> Self {
        Self {
            registry,
            dispatcher,
        }
    }

    pub async fn handle(&self, cmd: SendCommand) -> Result<SendResult, SessionError> {
        let message = Self::single_message(&cmd.inputs)?;

        info!(session_id = %cmd.session_id, "Sending message");

        let report = match self.dispatcher.dispatch(&cmd.session_id, message).await {
            Ok(()) => {
                if let Err(e) =
                    self.registry
                        .set_attribute(&cmd.session_id, keys::LAST_MESSAGE_SENT, message.into())
                {
                    debug!(session_id = %cmd.session_id, error = %e, "Sent message not recorded");
                }
                Report::success()
            }
            Err(e) => {
                warn!(session_id = %cmd.session_id, error = %e, "Message dispatch failed");
                Report::failure()
            }
        };

        Ok(SendResult { report })
    }

    fn single_message(inputs: &[NamedValue]) -> Result<&str, SessionError> {
        let mut messages = inputs.iter().filter(|input| input.name == INPUT_MESSAGE);
        match (messages.next(), messages.next()) {
            (Some(input), None) => Ok(&input.value),
            _ => Err(SessionError::invalid_argument(
                INPUT_MESSAGE,
                format!("Only a single input is expected named [{INPUT_MESSAGE}]"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::registry::InMemorySessionRegistry;
    use crate::domain::report::TestResult;
    use crate::domain::session::AttributeValue;
    use crate::ports::DispatchError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingDispatcher {
        fail: bool,
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MessageDispatcher for RecordingDispatcher {
        async fn dispatch(&self, _session_id: &SessionId, message: &str) -> Result<(), DispatchError> {
            self.sent.lock().unwrap().push(message.to_string());
            if self.fail {
                Err(DispatchError("smtp down".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn setup(fail: bool) -> (Arc<InMemorySessionRegistry>, Arc<RecordingDispatcher>, SendHandler) {
        let registry = Arc::new(InMemorySessionRegistry::new());
        let dispatcher = Arc::new(RecordingDispatcher {
            fail,
            ..Default::default()
        });
        let handler = SendHandler::new(registry.clone(), dispatcher.clone());
        (registry, dispatcher, handler)
    }

    #[tokio::test]
    async fn successful_send_reports_success_and_records_message() {
        let (registry, dispatcher, handler) = setup(false);
        let session_id = registry.create(Some("http://cb.example/notify")).unwrap();

        let result = handler
            .handle(SendCommand {
                session_id: session_id.clone(),
                inputs: vec![NamedValue::new(INPUT_MESSAGE, "hello")],
            })
            .await
            .unwrap();

        assert_eq!(result.report.result(), TestResult::Success);
        assert_eq!(*dispatcher.sent.lock().unwrap(), vec!["hello".to_string()]);
        assert_eq!(
            registry.get_attribute(&session_id, keys::LAST_MESSAGE_SENT),
            Some(AttributeValue::from("hello"))
        );
    }

    #[tokio::test]
    async fn dispatch_failure_becomes_failure_report() {
        let (registry, _, handler) = setup(true);
        let session_id = registry.create(Some("http://cb.example/notify")).unwrap();

        let result = handler
            .handle(SendCommand {
                session_id: session_id.clone(),
                inputs: vec![NamedValue::new(INPUT_MESSAGE, "hello")],
            })
            .await
            .unwrap();

        assert_eq!(result.report.result(), TestResult::Failure);
        assert!(registry
            .get_attribute(&session_id, keys::LAST_MESSAGE_SENT)
            .is_none());
    }

    #[tokio::test]
    async fn missing_message_input_is_rejected_before_dispatch() {
        let (_, dispatcher, handler) = setup(false);

        let err = handler
            .handle(SendCommand {
                session_id: SessionId::generate(),
                inputs: vec![NamedValue::new("subject", "hi")],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::InvalidArgument { .. }));
        assert!(dispatcher.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_message_input_is_rejected() {
        let (_, dispatcher, handler) = setup(false);

        let err = handler
            .handle(SendCommand {
                session_id: SessionId::generate(),
                inputs: vec![
                    NamedValue::new(INPUT_MESSAGE, "one"),
                    NamedValue::new(INPUT_MESSAGE, "two"),
                ],
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), "INVALID_ARGUMENT");
        assert!(dispatcher.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unrelated_inputs_are_ignored() {
        let (registry, _, handler) = setup(false);
        let session_id = registry.create(Some("http://cb.example/notify")).unwrap();

        let result = handler
            .handle(SendCommand {
                session_id,
                inputs: vec![
                    NamedValue::new("subject", "hi"),
                    NamedValue::new(INPUT_MESSAGE, "hello"),
                ],
            })
            .await
            .unwrap();

        assert_eq!(result.report.result(), TestResult::Success);
    }

    #[tokio::test]
    async fn send_for_unknown_session_still_reports() {
        let (_, _, handler) = setup(false);

        let result = handler
            .handle(SendCommand {
                session_id: SessionId::generate(),
                inputs: vec![NamedValue::new(INPUT_MESSAGE, "hello")],
            })
            .await
            .unwrap();

        assert_eq!(result.report.result(), TestResult::Success);
    }
}
