//! DeliverInboundHandler - A message arrived from the system under test.
//!
//! The orchestrator learns about it asynchronously through the session's
//! callback; the caller only gets an acknowledgement.

use std::sync::Arc;

use tracing::info;

use crate::application::notification::NotificationService;
use crate::domain::foundation::SessionId;
use crate::domain::module::OUTPUT_MESSAGE;
use crate::domain::report::Report;
use crate::domain::session::SessionError;
use crate::ports::SessionRegistry;

#[derive(Debug, Clone)]
pub struct DeliverInboundCommand {
    pub session_id: SessionId,
    pub message: String,
}

pub struct DeliverInboundHandler {
    registry: Arc<dyn SessionRegistry>,
    notifier: Arc<NotificationService>,
}

impl DeliverInboundHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, notifier: Arc<NotificationService>) -> Self {
        Self { registry, notifier }
    }

    /// Queues the notification on the notifier's background tasks.
    pub async fn handle(&self, cmd: DeliverInboundCommand) -> Result<(), SessionError> {
        if self.registry.get(&cmd.session_id).is_none() {
            return Err(SessionError::not_found(cmd.session_id));
        }

        info!(session_id = %cmd.session_id, "Inbound message received");

        let report = Report::success().with_output(OUTPUT_MESSAGE, cmd.message);
        self.notifier.notify_in_background(cmd.session_id, report);

        Ok(())
    }
}
