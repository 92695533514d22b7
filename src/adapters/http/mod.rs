//! HTTP adapters - REST API implementations.
//!
//! The messaging protocol is exposed under `/messaging`; `server` adds the
//! health probe and the request-id, tracing and timeout layers.

mod correlation;
pub mod messaging;
pub mod server;

// Re-export key types for convenience
pub use messaging::{messaging_routes, MessagingHandlers};
pub use server::build_app;
