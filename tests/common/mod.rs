//! Shared test infrastructure: a callback receiver and a served stub.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::Value;

use messaging_stub::adapters::http::{build_app, MessagingHandlers};
use messaging_stub::adapters::{HttpCallbackConnector, InMemorySessionRegistry, LoggingDispatcher};
use messaging_stub::application::NotificationService;
use messaging_stub::config::ServiceConfig;

// =============================================================================
// Callback receiver
// =============================================================================

#[derive(Clone, Default)]
struct ReceiverState {
    accepted: Arc<Mutex<Vec<Value>>>,
    rejected: Arc<Mutex<Vec<Value>>>,
    failures_left: Arc<AtomicUsize>,
}

/// Orchestrator stand-in that records every notification it is sent.
pub struct CallbackReceiver {
    pub url: String,
    state: ReceiverState,
}

impl CallbackReceiver {
    /// Receiver that accepts everything.
    pub async fn start() -> Self {
        Self::failing_first(0).await
    }

    /// Receiver that answers 500 to the first `failures` notifications.
    pub async fn failing_first(failures: usize) -> Self {
        let state = ReceiverState::default();
        state.failures_left.store(failures, Ordering::SeqCst);

        let app = Router::new()
            .route("/notify", post(record))
            .with_state(state.clone());
        let addr = serve(app).await;

        Self {
            url: format!("http://{addr}/notify"),
            state,
        }
    }

    pub fn accepted(&self) -> Vec<Value> {
        self.state.accepted.lock().unwrap().clone()
    }

    pub fn rejected(&self) -> Vec<Value> {
        self.state.rejected.lock().unwrap().clone()
    }

    /// Polls until `count` notifications have been accepted.
    pub async fn wait_for(&self, count: usize) -> Vec<Value> {
        for _ in 0..100 {
            let accepted = self.accepted();
            if accepted.len() >= count {
                return accepted;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        panic!("expected {count} notifications, got {:?}", self.accepted());
    }
}

async fn record(State(state): State<ReceiverState>, Json(body): Json<Value>) -> StatusCode {
    let failing = state
        .failures_left
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok();

    if failing {
        state.rejected.lock().unwrap().push(body);
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        state.accepted.lock().unwrap().push(body);
        StatusCode::OK
    }
}

// =============================================================================
// Served stub
// =============================================================================

pub struct TestStub {
    pub root_url: String,
    pub base_url: String,
    pub registry: Arc<InMemorySessionRegistry>,
    pub client: reqwest::Client,
}

impl TestStub {
    pub async fn start() -> Self {
        let registry = Arc::new(InMemorySessionRegistry::new());
        let connector = Arc::new(HttpCallbackConnector::direct(Duration::from_secs(5)));
        let notifier = Arc::new(NotificationService::new(registry.clone(), connector));
        let handlers = MessagingHandlers::new(
            &ServiceConfig::default(),
            registry.clone(),
            Arc::new(LoggingDispatcher),
            notifier,
        );
        let addr = serve(build_app(handlers, Duration::from_secs(30))).await;

        Self {
            root_url: format!("http://{addr}"),
            base_url: format!("http://{addr}/messaging"),
            registry,
            client: reqwest::Client::builder().no_proxy().build().unwrap(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Serves `app` on an ephemeral local port.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}
