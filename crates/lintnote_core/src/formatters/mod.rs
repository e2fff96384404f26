//! Output formatters for lint responses.

mod github;
mod json;
mod summary;
mod text;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::response::Response;

pub use github::{GithubFormatter, escape_message, escape_title, format_github_actions};
pub use json::JsonFormatter;
pub use summary::SummaryFormatter;
pub use text::TextFormatter;

/// Turns lint responses into a finished byte sequence.
pub trait OutputFormatter: Send + Sync {
    /// Formats all responses, preserving their order.
    fn format(&self, responses: &[Response]) -> Result<Vec<u8>, FormatError>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// GitHub Actions workflow-command annotations.
    #[default]
    Github,
    /// Pretty-printed JSON.
    Json,
    /// Human-readable text grouped by file.
    Text,
    /// Problem counts per rule.
    Summary,
}

impl Format {
    /// All formats, in display order.
    pub const ALL: [Format; 4] = [Format::Github, Format::Json, Format::Text, Format::Summary];

    /// Returns the formatter implementing this format.
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Format::Github => Box::new(GithubFormatter),
            Format::Json => Box::new(JsonFormatter),
            Format::Text => Box::new(TextFormatter),
            Format::Summary => Box::new(SummaryFormatter),
        }
    }

    /// Lowercase name used on the command line and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Github => "github",
            Format::Json => "json",
            Format::Text => "text",
            Format::Summary => "summary",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown format '{}' (expected one of: github, json, text, summary)",
                    s
                )
            })
    }
}

/// Formats `responses` with the selected format.
pub fn render(responses: &[Response], format: Format) -> Result<Vec<u8>, FormatError> {
    format.formatter().format(responses)
}
