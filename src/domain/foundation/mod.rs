//! Foundation module - Shared domain primitives.
//!
//! Contains the identifier and time value objects that every other
//! part of the messaging stub builds on.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::SessionId;
pub use timestamp::Timestamp;
