//! Problem type for lint findings.

use serde::{Deserialize, Serialize};

use crate::descriptor::Descriptor;
use crate::location::Location;

/// One finding reported by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// The rule that reported this problem, e.g. `core::0131::request-message-name`.
    pub rule_id: String,

    /// Human-readable message. May span several lines.
    pub message: String,

    /// Where the problem applies, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Element the problem is attached to.
    #[serde(default, skip_serializing_if = "Descriptor::is_anonymous")]
    pub descriptor: Descriptor,

    /// Link to the rule documentation.
    #[serde(
        default,
        rename = "rule_doc_uri",
        skip_serializing_if = "Option::is_none"
    )]
    pub rule_uri: Option<String>,

    /// Suggested replacement or fix hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Problem {
    /// Creates a new problem with no location.
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            location: None,
            descriptor: Descriptor::default(),
            rule_uri: None,
            suggestion: None,
        }
    }

    /// Sets the location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the descriptor.
    pub fn with_descriptor(mut self, descriptor: Descriptor) -> Self {
        self.descriptor = descriptor;
        self
    }

    /// Sets the rule documentation URI.
    pub fn with_rule_uri(mut self, uri: impl Into<String>) -> Self {
        self.rule_uri = Some(uri.into());
        self
    }

    /// Sets a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Rule documentation URI, or an empty string when none is known.
    pub fn rule_uri(&self) -> &str {
        self.rule_uri.as_deref().unwrap_or_default()
    }
}
