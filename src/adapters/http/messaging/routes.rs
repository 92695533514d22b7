//! HTTP routes for messaging endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    begin_transaction, deliver_inbound, describe_module, end_transaction, finalize, initiate,
    list_sessions, receive, send, MessagingHandlers,
};

/// Creates the messaging router. Mount it under `/messaging`.
pub fn messaging_routes(handlers: MessagingHandlers) -> Router {
    Router::new()
        .route("/module", get(describe_module))
        .route("/initiate", post(initiate))
        .route("/sessions", get(list_sessions))
        .route("/sessions/:id/receive", post(receive))
        .route("/sessions/:id/send", post(send))
        .route("/sessions/:id/transactions/begin", post(begin_transaction))
        .route("/sessions/:id/transactions/end", post(end_transaction))
        .route("/sessions/:id/finalize", post(finalize))
        .route("/sessions/:id/inbound", post(deliver_inbound))
        .with_state(handlers)
}
