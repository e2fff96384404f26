//! Lint response types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::problem::Problem;
use crate::source::LineIndex;

/// Result of linting a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Path of the linted file, as reported by the linter.
    pub file_path: String,

    /// Problems found in the file, in detection order.
    #[serde(default)]
    pub problems: Vec<Problem>,
}

impl Response {
    /// Creates a new response.
    pub fn new(file_path: impl Into<String>, problems: Vec<Problem>) -> Self {
        Self {
            file_path: file_path.into(),
            problems,
        }
    }

    /// Returns true if there are any problems.
    pub fn has_problems(&self) -> bool {
        !self.problems.is_empty()
    }

    /// Returns the number of problems.
    pub fn problem_count(&self) -> usize {
        self.problems.len()
    }

    /// Returns true if any problem carries a byte-offset location.
    pub fn needs_source(&self) -> bool {
        self.problems
            .iter()
            .any(|p| matches!(p.location, Some(Location::Offsets(_))))
    }

    /// Binds the file's line index to every problem descriptor.
    pub fn bind_source(&mut self, source: Arc<LineIndex>) {
        for problem in &mut self.problems {
            problem.descriptor.set_source(Arc::clone(&source));
        }
    }
}

/// Totals over a set of responses.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ResponseSummary {
    /// Total responses.
    pub files: usize,

    /// Responses with at least one problem.
    pub files_with_problems: usize,

    /// Total problems.
    pub problems: usize,
}

impl ResponseSummary {
    /// Creates a summary from responses.
    pub fn from_responses(responses: &[Response]) -> Self {
        let mut summary = Self::default();

        for response in responses {
            summary.files += 1;
            summary.problems += response.problem_count();
            if response.has_problems() {
                summary.files_with_problems += 1;
            }
        }

        summary
    }
}
