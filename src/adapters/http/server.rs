//! Application router: messaging routes plus cross-cutting layers.

use std::time::Duration;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::messaging::{messaging_routes, MessagingHandlers};

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health - Liveness
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Builds the complete HTTP application.
///
/// Every request gets an `x-request-id` (generated when absent), is traced,
/// and is cut off with 408 after `request_timeout`.
pub fn build_app(handlers: MessagingHandlers, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/messaging", messaging_routes(handlers))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
