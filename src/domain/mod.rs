//! Domain layer containing business types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (session ids, timestamps, validation errors)
//! - `session` - Session attributes, snapshots and session errors
//! - `report` - Outcome reports delivered to the orchestrator
//! - `module` - Module definition advertised by describe-module

pub mod foundation;
pub mod module;
pub mod report;
pub mod session;
