//! Messaging Stub - Session-correlated messaging for test-bed orchestrators
//!
//! The orchestrator opens a session, asks the stub to send or expect
//! messages, and is told about outcomes asynchronously through a callback
//! address recorded when the session was initiated.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
