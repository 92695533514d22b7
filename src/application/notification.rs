//! NotificationService - Delivers outcome reports to the orchestrator.
//!
//! The callback address is resolved from the session registry at the time of
//! the call, never cached. Delivery policy:
//!
//! 1. No session, or no callback address: log and return
//!    [`NotifyOutcome::MissingCallback`]. Nothing is sent.
//! 2. Build a client for the address. Failure is fatal
//!    ([`NotificationError::TransportSetup`]) and not retried.
//! 3. Deliver the report. Success ends the call.
//! 4. On failure, deliver one synthetic FAILURE report through the same
//!    client so the orchestrator is not left waiting.
//! 5. If that fails too, the call fails ([`NotificationError::DeliveryFailed`]).
//!
//! Because step 4 reuses the client that just failed, a structurally broken
//! endpoint fails twice. The second attempt is kept anyway: it is the only
//! signal the orchestrator can get when the first failure was transient.

use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::domain::foundation::SessionId;
use crate::domain::report::Report;
use crate::domain::session::keys;
use crate::ports::{
    CallbackConnector, ConnectError, DeliveryError, NotifyForMessageRequest, SessionRegistry,
};

/// Why a notification had nowhere to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingCallbackReason {
    /// The session id is unknown (never created, finalized or expired).
    SessionNotFound,
    /// The session exists but holds no usable callback address.
    NoCallbackAddress,
}

/// Non-fatal result of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The original report was accepted.
    Delivered,
    /// The original report failed; the synthetic FAILURE report was accepted.
    FallbackDelivered { reason: DeliveryError },
    /// Nothing was sent.
    MissingCallback(MissingCallbackReason),
}

/// Fatal notification failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("unable to call callback address [{address}] for session [{session_id}]: {source}")]
    TransportSetup {
        session_id: SessionId,
        address: String,
        #[source]
        source: ConnectError,
    },

    #[error("notification for session [{session_id}] failed ({primary}); fallback failed too ({fallback})")]
    DeliveryFailed {
        session_id: SessionId,
        primary: DeliveryError,
        fallback: DeliveryError,
    },
}

/// Resolves a session's callback address and delivers reports to it.
///
/// Background notifications are tracked until [`NotificationService::drain`]
/// waits for them.
pub struct NotificationService {
    registry: Arc<dyn SessionRegistry>,
    connector: Arc<dyn CallbackConnector>,
    background: Mutex<JoinSet<()>>,
}

impl NotificationService {
    pub fn new(registry: Arc<dyn SessionRegistry>, connector: Arc<dyn CallbackConnector>) -> Self {
        Self {
            registry,
            connector,
            background: Mutex::new(JoinSet::new()),
        }
    }

    /// Notify the orchestrator about `report` for `session_id`.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` when no client can be built for the
    /// callback address, or when both the original and the fallback
    /// deliveries fail.
    pub async fn notify(
        &self,
        session_id: &SessionId,
        report: Report,
    ) -> Result<NotifyOutcome, NotificationError> {
        let callback = match self.resolve_callback(session_id) {
            Ok(callback) => callback,
            Err(reason) => {
                warn!(session_id = %session_id, ?reason, "Could not find callback URL for session");
                return Ok(NotifyOutcome::MissingCallback(reason));
            }
        };

        let client = self
            .connector
            .connect(&callback)
            .map_err(|source| NotificationError::TransportSetup {
                session_id: session_id.clone(),
                address: callback.clone(),
                source,
            })?;

        let outcome = report.result();
        let request = NotifyForMessageRequest::new(session_id.clone(), report);
        let primary = match client.notify_for_message(&request).await {
            Ok(()) => {
                info!(session_id = %session_id, callback = %callback, %outcome, "Notified test bed");
                return Ok(NotifyOutcome::Delivered);
            }
            Err(e) => e,
        };

        warn!(
            session_id = %session_id,
            callback = %callback,
            error = %primary,
            "Error while notifying test bed, sending failure report"
        );

        let fallback = NotifyForMessageRequest::new(session_id.clone(), Report::failure());
        match client.notify_for_message(&fallback).await {
            Ok(()) => Ok(NotifyOutcome::FallbackDelivered { reason: primary }),
            Err(fallback) => Err(NotificationError::DeliveryFailed {
                session_id: session_id.clone(),
                primary,
                fallback,
            }),
        }
    }

    /// Runs [`NotificationService::notify`] on its own task.
    ///
    /// The caller's command has already produced its own response; a fatal
    /// failure here is logged and does not reach it.
    pub fn notify_in_background(self: &Arc<Self>, session_id: SessionId, report: Report) {
        let service = Arc::clone(self);
        let mut tasks = self.background.lock().unwrap_or_else(PoisonError::into_inner);
        while tasks.try_join_next().is_some() {}
        tasks.spawn(async move {
            if let Err(e) = service.notify(&session_id, report).await {
                error!(session_id = %session_id, error = %e, "Notification failed");
            }
        });
    }

    /// Waits for every background notification spawned so far.
    ///
    /// Returns how many tasks were still tracked when the drain started.
    pub async fn drain(&self) -> usize {
        let mut tasks = std::mem::take(
            &mut *self.background.lock().unwrap_or_else(PoisonError::into_inner),
        );
        let pending = tasks.len();
        debug!(pending, "Draining background notifications");

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                error!(error = %e, "Background notification task aborted");
            }
        }
        pending
    }

    fn resolve_callback(&self, session_id: &SessionId) -> Result<String, MissingCallbackReason> {
        let session = self
            .registry
            .get(session_id)
            .ok_or(MissingCallbackReason::SessionNotFound)?;
        session
            .attributes
            .get(keys::CALLBACK_URL)
            .and_then(|value| value.as_text())
            .map(str::to_string)
            .ok_or(MissingCallbackReason::NoCallbackAddress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::registry::InMemorySessionRegistry;
    use crate::domain::report::TestResult;
    use crate::domain::session::AttributeValue;
    use crate::ports::CallbackClient;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::time::Duration;

    const CALLBACK: &str = "http://cb.example/notify";

    /// Connector whose clients answer from a script and record every request.
    #[derive(Default)]
    struct ScriptedConnector {
        script: Arc<Mutex<VecDeque<Result<(), DeliveryError>>>>,
        sent: Arc<Mutex<Vec<NotifyForMessageRequest>>>,
        connects: Mutex<Vec<String>>,
        refuse_connect: bool,
        latency: Duration,
    }

    impl ScriptedConnector {
        fn answering(results: Vec<Result<(), DeliveryError>>) -> Self {
            Self {
                script: Arc::new(Mutex::new(results.into())),
                ..Default::default()
            }
        }

        fn refusing() -> Self {
            Self {
                refuse_connect: true,
                ..Default::default()
            }
        }

        fn slow(latency: Duration) -> Self {
            Self {
                latency,
                ..Default::default()
            }
        }

        fn sent(&self) -> Vec<NotifyForMessageRequest> {
            self.sent.lock().unwrap().clone()
        }

        fn connect_count(&self) -> usize {
            self.connects.lock().unwrap().len()
        }
    }

    struct ScriptedClient {
        latency: Duration,
        script: Arc<Mutex<VecDeque<Result<(), DeliveryError>>>>,
        sent: Arc<Mutex<Vec<NotifyForMessageRequest>>>,
    }

    impl CallbackConnector for ScriptedConnector {
        fn connect(&self, address: &str) -> Result<Box<dyn CallbackClient>, ConnectError> {
            self.connects.lock().unwrap().push(address.to_string());
            if self.refuse_connect {
                return Err(ConnectError::InvalidAddress {
                    address: address.to_string(),
                    reason: "refused".to_string(),
                });
            }
            Ok(Box::new(ScriptedClient {
                latency: self.latency,
                script: self.script.clone(),
                sent: self.sent.clone(),
            }))
        }
    }

    #[async_trait]
    impl CallbackClient for ScriptedClient {
        async fn notify_for_message(
            &self,
            request: &NotifyForMessageRequest,
        ) -> Result<(), DeliveryError> {
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            self.sent.lock().unwrap().push(request.clone());
            self.script.lock().unwrap().pop_front().unwrap_or(Ok(()))
        }
    }

    fn network_error() -> DeliveryError {
        DeliveryError::Network("connection reset".to_string())
    }

    fn setup(
        connector: ScriptedConnector,
    ) -> (Arc<InMemorySessionRegistry>, Arc<ScriptedConnector>, NotificationService) {
        let registry = Arc::new(InMemorySessionRegistry::new());
        let connector = Arc::new(connector);
        let service = NotificationService::new(registry.clone(), connector.clone());
        (registry, connector, service)
    }

    #[tokio::test]
    async fn successful_delivery_sends_exactly_once() {
        let (registry, connector, service) = setup(ScriptedConnector::answering(vec![Ok(())]));
        let id = registry.create(Some(CALLBACK)).unwrap();

        let outcome = service.notify(&id, Report::success()).await.unwrap();

        assert_eq!(outcome, NotifyOutcome::Delivered);
        let sent = connector.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].session_id, id);
        assert_eq!(sent[0].report.result(), TestResult::Success);
        assert_eq!(connector.connects.lock().unwrap().as_slice(), [CALLBACK.to_string()]);
    }

    #[tokio::test]
    async fn failed_delivery_falls_back_to_failure_report() {
        let (registry, connector, service) =
            setup(ScriptedConnector::answering(vec![Err(network_error()), Ok(())]));
        let id = registry.create(Some(CALLBACK)).unwrap();
        let report = Report::success().with_output("messageReceived", "hi");

        let outcome = service.notify(&id, report).await.unwrap();

        assert_eq!(
            outcome,
            NotifyOutcome::FallbackDelivered {
                reason: network_error()
            }
        );
        let sent = connector.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].report.result(), TestResult::Success);
        assert_eq!(sent[1].report.result(), TestResult::Failure);
        assert!(sent[1].report.context().is_empty());
        assert_eq!(sent[1].session_id, id);
        assert_eq!(connector.connect_count(), 1);
    }

    #[tokio::test]
    async fn fallback_carries_failure_whatever_the_original_outcome() {
        for original in [TestResult::Success, TestResult::Warning, TestResult::Failure] {
            let (registry, connector, service) =
                setup(ScriptedConnector::answering(vec![Err(network_error()), Ok(())]));
            let id = registry.create(Some(CALLBACK)).unwrap();

            service.notify(&id, Report::new(original)).await.unwrap();

            assert_eq!(connector.sent()[1].report.result(), TestResult::Failure);
        }
    }

    #[tokio::test]
    async fn double_failure_is_fatal() {
        let (registry, connector, service) = setup(ScriptedConnector::answering(vec![
            Err(network_error()),
            Err(DeliveryError::Rejected { status: 503 }),
        ]));
        let id = registry.create(Some(CALLBACK)).unwrap();

        let err = service.notify(&id, Report::success()).await.unwrap_err();

        assert_eq!(
            err,
            NotificationError::DeliveryFailed {
                session_id: id,
                primary: network_error(),
                fallback: DeliveryError::Rejected { status: 503 },
            }
        );
        assert_eq!(connector.sent().len(), 2);
    }

    #[tokio::test]
    async fn unknown_session_sends_nothing() {
        let (_registry, connector, service) = setup(ScriptedConnector::default());

        let outcome = service
            .notify(&SessionId::generate(), Report::success())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            NotifyOutcome::MissingCallback(MissingCallbackReason::SessionNotFound)
        );
        assert_eq!(connector.connect_count(), 0);
        assert!(connector.sent().is_empty());
    }

    #[tokio::test]
    async fn destroyed_session_sends_nothing() {
        let (registry, connector, service) = setup(ScriptedConnector::default());
        let id = registry.create(Some(CALLBACK)).unwrap();
        registry.destroy(&id);

        let outcome = service.notify(&id, Report::success()).await.unwrap();

        assert_eq!(
            outcome,
            NotifyOutcome::MissingCallback(MissingCallbackReason::SessionNotFound)
        );
        assert!(connector.sent().is_empty());
    }

    #[tokio::test]
    async fn non_text_callback_counts_as_missing() {
        let (registry, connector, service) = setup(ScriptedConnector::default());
        let id = registry.create(Some(CALLBACK)).unwrap();
        registry
            .set_attribute(&id, keys::CALLBACK_URL, AttributeValue::Flag(true))
            .unwrap();

        let outcome = service.notify(&id, Report::success()).await.unwrap();

        assert_eq!(
            outcome,
            NotifyOutcome::MissingCallback(MissingCallbackReason::NoCallbackAddress)
        );
        assert_eq!(connector.connect_count(), 0);
    }

    #[tokio::test]
    async fn transport_setup_failure_is_fatal_and_not_retried() {
        let (registry, connector, service) = setup(ScriptedConnector::refusing());
        let id = registry.create(Some(CALLBACK)).unwrap();

        let err = service.notify(&id, Report::success()).await.unwrap_err();

        assert!(matches!(err, NotificationError::TransportSetup { ref address, .. } if address == CALLBACK));
        assert_eq!(connector.connect_count(), 1);
        assert!(connector.sent().is_empty());
    }

    #[tokio::test]
    async fn callback_is_resolved_at_call_time() {
        let (registry, connector, service) = setup(ScriptedConnector::default());
        let id = registry.create(Some(CALLBACK)).unwrap();
        registry
            .set_attribute(&id, keys::CALLBACK_URL, "http://moved.example/notify".into())
            .unwrap();

        service.notify(&id, Report::success()).await.unwrap();

        assert_eq!(
            connector.connects.lock().unwrap().as_slice(),
            ["http://moved.example/notify".to_string()]
        );
    }

    #[tokio::test]
    async fn background_notification_completes() {
        let (registry, connector, service) = setup(ScriptedConnector::default());
        let id = registry.create(Some(CALLBACK)).unwrap();
        let service = Arc::new(service);

        service.notify_in_background(id.clone(), Report::success());

        assert_eq!(service.drain().await, 1);
        assert_eq!(connector.sent().len(), 1);
    }

    #[tokio::test]
    async fn drain_waits_for_slow_deliveries() {
        let (registry, connector, service) =
            setup(ScriptedConnector::slow(Duration::from_millis(50)));
        let service = Arc::new(service);
        let first = registry.create(Some(CALLBACK)).unwrap();
        let second = registry.create(Some(CALLBACK)).unwrap();

        service.notify_in_background(first, Report::success());
        service.notify_in_background(second, Report::success());
        assert!(connector.sent().is_empty());

        assert_eq!(service.drain().await, 2);
        assert_eq!(connector.sent().len(), 2);
        assert_eq!(service.drain().await, 0);
    }

    #[tokio::test]
    async fn background_notification_swallows_fatal_errors() {
        let (registry, connector, service) = setup(ScriptedConnector::refusing());
        let id = registry.create(Some(CALLBACK)).unwrap();
        let service = Arc::new(service);

        service.notify_in_background(id, Report::success());

        assert_eq!(service.drain().await, 1);
        assert!(connector.sent().is_empty());
    }
}
