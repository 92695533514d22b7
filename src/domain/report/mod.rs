//! Outcome reports delivered to the orchestrator.

mod outcome;

pub use outcome::{Report, ReportItem, TestResult};
