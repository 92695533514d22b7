//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the core to external systems:
//! - `registry` - In-memory session registry and its expiry task
//! - `callback` - HTTP delivery of notifications to the orchestrator
//! - `dispatch` - The action behind `send`
//! - `http` - The axum surface the orchestrator calls

pub mod callback;
pub mod dispatch;
pub mod http;
pub mod registry;

pub use callback::HttpCallbackConnector;
pub use dispatch::LoggingDispatcher;
pub use registry::{InMemorySessionRegistry, SessionReaper};
