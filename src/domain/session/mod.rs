//! Session domain module.
//!
//! A session is the unit of correlation between the orchestrator and this
//! service: an id plus an open bag of typed attributes. The callback address
//! recorded at creation time is the one attribute every session carries.

mod attributes;
mod errors;

pub use attributes::{keys, AttributeValue, SessionAttributes, SessionSnapshot};
pub use errors::SessionError;
