//! Report value object.
//!
//! A report describes the outcome of one unit of work for a session. It is
//! built once (optionally with output items attached) and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Timestamp;

/// Closed set of outcome kinds understood by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestResult {
    Success,
    Failure,
    Warning,
    Undefined,
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TestResult::Success => "SUCCESS",
            TestResult::Failure => "FAILURE",
            TestResult::Warning => "WARNING",
            TestResult::Undefined => "UNDEFINED",
        };
        write!(f, "{}", s)
    }
}

/// Named output value carried in a report's context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportItem {
    pub name: String,
    pub value: String,
}

/// Outcome report for a unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    result: TestResult,
    date: Timestamp,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    context: Vec<ReportItem>,
}

impl Report {
    /// Creates an empty report with the given outcome, dated now.
    pub fn new(result: TestResult) -> Self {
        Self {
            result,
            date: Timestamp::now(),
            context: Vec::new(),
        }
    }

    pub fn success() -> Self {
        Self::new(TestResult::Success)
    }

    pub fn failure() -> Self {
        Self::new(TestResult::Failure)
    }

    /// Attaches an output item. Consumes the report so it stays immutable
    /// once handed out.
    pub fn with_output(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push(ReportItem {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn result(&self) -> TestResult {
        self.result
    }

    pub fn context(&self) -> &[ReportItem] {
        &self.context
    }

    /// Looks up an output item by name.
    pub fn output(&self, name: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.value.as_str())
    }
}
