//! HTTP handlers for messaging endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::application::handlers::{
    BeginTransactionCommand, BeginTransactionHandler, DeliverInboundCommand,
    DeliverInboundHandler, DescribeModuleHandler, EndTransactionCommand, EndTransactionHandler,
    FinalizeCommand, FinalizeHandler, InitiateCommand, InitiateHandler, ListSessionsHandler,
    ReceiveCommand, ReceiveHandler, SendCommand, SendHandler,
};
use crate::application::NotificationService;
use crate::config::ServiceConfig;
use crate::domain::foundation::SessionId;
use crate::domain::module::ModuleDefinition;
use crate::domain::session::SessionError;
use crate::ports::{
    CorrelationSource, MessageDispatcher, SessionRegistry, REPLY_TO_FIELD, TEST_SESSION_ID_FIELD,
};

use super::dto::{
    CommandResponse, ErrorResponse, FinalizeResponse, InboundRequest, InitiateRequest,
    InitiateResponse, SendRequest, SendResponse, SessionListResponse, TransactionRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct MessagingHandlers {
    describe_handler: Arc<DescribeModuleHandler>,
    initiate_handler: Arc<InitiateHandler>,
    receive_handler: Arc<ReceiveHandler>,
    send_handler: Arc<SendHandler>,
    begin_handler: Arc<BeginTransactionHandler>,
    end_handler: Arc<EndTransactionHandler>,
    finalize_handler: Arc<FinalizeHandler>,
    inbound_handler: Arc<DeliverInboundHandler>,
    list_handler: Arc<ListSessionsHandler>,
}

impl MessagingHandlers {
    /// Wires every command handler to the shared registry.
    pub fn new(
        service: &ServiceConfig,
        registry: Arc<dyn SessionRegistry>,
        dispatcher: Arc<dyn MessageDispatcher>,
        notifier: Arc<NotificationService>,
    ) -> Self {
        Self {
            describe_handler: Arc::new(DescribeModuleHandler::new(service)),
            initiate_handler: Arc::new(InitiateHandler::new(registry.clone())),
            receive_handler: Arc::new(ReceiveHandler::new()),
            send_handler: Arc::new(SendHandler::new(registry.clone(), dispatcher)),
            begin_handler: Arc::new(BeginTransactionHandler::new()),
            end_handler: Arc::new(EndTransactionHandler::new()),
            finalize_handler: Arc::new(FinalizeHandler::new(registry.clone())),
            inbound_handler: Arc::new(DeliverInboundHandler::new(registry.clone(), notifier)),
            list_handler: Arc::new(ListSessionsHandler::new(registry)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /messaging/module - Describe how to call this service
pub async fn describe_module(State(handlers): State<MessagingHandlers>) -> Json<ModuleDefinition> {
    Json(handlers.describe_handler.handle())
}

/// POST /messaging/initiate - Start a session
pub async fn initiate(
    State(handlers): State<MessagingHandlers>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let req: InitiateRequest = match parse_optional_body(&body) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let callback_url = headers.field(REPLY_TO_FIELD).or_else(|| {
        req.reply_to
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    });

    let cmd = InitiateCommand {
        callback_url,
        test_session_id: headers.field(TEST_SESSION_ID_FIELD),
        actor_configuration: req
            .actor_configuration
            .into_iter()
            .map(Into::into)
            .collect(),
    };

    match handlers.initiate_handler.handle(cmd).await {
        Ok(result) => {
            let response = InitiateResponse {
                session_id: result.session_id.to_string(),
                configuration: result.configuration.into_iter().map(Into::into).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /messaging/sessions/:id/receive - Expect a message for a session
pub async fn receive(
    State(handlers): State<MessagingHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ReceiveCommand {
        session_id: session_id.clone(),
    };

    match handlers.receive_handler.handle(cmd).await {
        Ok(()) => acknowledge(&session_id, "Receive registered"),
        Err(e) => handle_session_error(e),
    }
}

/// POST /messaging/sessions/:id/send - Send a message
pub async fn send(
    State(handlers): State<MessagingHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<SendRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SendCommand {
        session_id,
        inputs: req.inputs.into_iter().map(Into::into).collect(),
    };

    match handlers.send_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(SendResponse { report: result.report })).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// POST /messaging/sessions/:id/transactions/begin - Mark a transaction start
pub async fn begin_transaction(
    State(handlers): State<MessagingHandlers>,
    Path(session_id): Path<String>,
    body: Bytes,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let req: TransactionRequest = match parse_optional_body(&body) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let cmd = BeginTransactionCommand {
        session_id: session_id.clone(),
        from: req.from,
        to: req.to,
    };

    match handlers.begin_handler.handle(cmd).await {
        Ok(()) => acknowledge(&session_id, "Transaction started"),
        Err(e) => handle_session_error(e),
    }
}

/// POST /messaging/sessions/:id/transactions/end - Mark a transaction end
pub async fn end_transaction(
    State(handlers): State<MessagingHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = EndTransactionCommand {
        session_id: session_id.clone(),
    };

    match handlers.end_handler.handle(cmd).await {
        Ok(()) => acknowledge(&session_id, "Transaction ended"),
        Err(e) => handle_session_error(e),
    }
}

/// POST /messaging/sessions/:id/finalize - Tear a session down
pub async fn finalize(
    State(handlers): State<MessagingHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = FinalizeCommand {
        session_id: session_id.clone(),
    };

    match handlers.finalize_handler.handle(cmd).await {
        Ok(result) => {
            let response = FinalizeResponse {
                session_id: session_id.to_string(),
                destroyed: result.destroyed,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /messaging/sessions/:id/inbound - Hand over a message from the system under test
pub async fn deliver_inbound(
    State(handlers): State<MessagingHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<InboundRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeliverInboundCommand {
        session_id: session_id.clone(),
        message: req.message,
    };

    match handlers.inbound_handler.handle(cmd).await {
        Ok(()) => {
            let response = CommandResponse {
                session_id: session_id.to_string(),
                message: "Message accepted for delivery".to_string(),
            };
            (StatusCode::ACCEPTED, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /messaging/sessions - List live sessions
pub async fn list_sessions(State(handlers): State<MessagingHandlers>) -> Json<SessionListResponse> {
    Json(handlers.list_handler.handle().into())
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|e| {
        debug!(session_id = raw, "Rejected session id");
        handle_session_error(e.into())
    })
}

/// An empty body means defaults; anything else must be valid JSON.
fn parse_optional_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, Response> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "Rejected request body");
        handle_session_error(SessionError::invalid_argument("body", e.to_string()))
    })
}

fn acknowledge(session_id: &SessionId, message: &str) -> Response {
    let response = CommandResponse {
        session_id: session_id.to_string(),
        message: message.to_string(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_session_error(error: SessionError) -> Response {
    let status = match &error {
        SessionError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
        SessionError::NotFound(_) => StatusCode::NOT_FOUND,
    };
    (status, Json(ErrorResponse::from(&error))).into_response()
}
