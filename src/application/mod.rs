//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! `NotificationService` owns the callback delivery policy; the handlers
//! implement the commands the orchestrator issues.

pub mod handlers;
pub mod notification;

pub use handlers::*;
pub use notification::{
    MissingCallbackReason, NotificationError, NotificationService, NotifyOutcome,
};
