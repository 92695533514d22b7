//! Messaging stub server binary.
//!
//! Wires configuration, logging, the session registry, the optional reaper
//! and the HTTP surface, then serves until Ctrl+C or SIGTERM. Background
//! notifications are drained before the registry is cleared.

use std::sync::Arc;

use thiserror::Error;
use tokio::signal;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use messaging_stub::adapters::http::{build_app, MessagingHandlers};
use messaging_stub::adapters::{
    HttpCallbackConnector, InMemorySessionRegistry, LoggingDispatcher, SessionReaper,
};
use messaging_stub::application::NotificationService;
use messaging_stub::config::{AppConfig, ConfigError, LogFormat, ServerConfig, ValidationError};
use messaging_stub::ports::{ConnectError, SessionRegistry};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid listen address: {0}")]
    Address(#[from] std::net::AddrParseError),

    #[error("Callback transport: {0}")]
    Callback(#[from] ConnectError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let registry = Arc::new(InMemorySessionRegistry::new());
    let connector = Arc::new(HttpCallbackConnector::new(&config.callback)?);
    let notifier = Arc::new(NotificationService::new(registry.clone(), connector));
    let handlers = MessagingHandlers::new(
        &config.service,
        registry.clone(),
        Arc::new(LoggingDispatcher),
        notifier.clone(),
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let reaper = config.registry.session_ttl().map(|ttl| {
        let reaper = SessionReaper::new(registry.clone(), ttl, config.registry.reap_interval());
        tokio::spawn(async move { reaper.run(shutdown_rx).await })
    });

    let app = build_app(handlers, config.server.request_timeout());
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        addr = %addr,
        environment = ?config.server.environment,
        service = %config.service.id,
        "Starting messaging stub"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let delivered = notifier.drain().await;
    info!(delivered, "Pending notifications finished");

    let _ = shutdown_tx.send(true);
    if let Some(handle) = reaper {
        if let Err(e) = handle.await {
            warn!(error = %e, "Session reaper did not stop cleanly");
        }
    }

    let dropped = registry.clear();
    info!(dropped, "Session registry cleared, shutdown complete");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let _ = match server.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.with_target(false).try_init(),
    };
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }
}
