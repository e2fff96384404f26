//! Text output formatter

use std::fmt::Write;

use super::OutputFormatter;
use crate::error::FormatError;
use crate::position::FileLocation;
use crate::response::{Response, ResponseSummary};

/// Formats responses as human-readable text grouped by file.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, responses: &[Response]) -> Result<Vec<u8>, FormatError> {
        let mut out = String::new();

        for response in responses {
            if !response.has_problems() {
                continue;
            }

            writeln!(out, "\n{}:", response.file_path)?;
            for problem in &response.problems {
                let position = match &problem.location {
                    Some(location) => {
                        let loc = FileLocation::resolve(location, &problem.descriptor)?;
                        format!("{}:{}", loc.start.line, loc.start.column)
                    }
                    None => "-:-".to_string(),
                };
                writeln!(
                    out,
                    "  {} [{}] {}",
                    position,
                    problem.rule_id,
                    problem.message.replace('\n', "\n    ")
                )?;
                if let Some(suggestion) = &problem.suggestion {
                    writeln!(out, "    suggestion: {}", suggestion)?;
                }
                let uri = problem.rule_uri();
                if !uri.is_empty() {
                    writeln!(out, "    see: {}", uri)?;
                }
            }
        }

        let summary = ResponseSummary::from_responses(responses);
        writeln!(
            out,
            "\nChecked {} files, found {} problems",
            summary.files, summary.problems
        )?;

        Ok(out.into_bytes())
    }
}
