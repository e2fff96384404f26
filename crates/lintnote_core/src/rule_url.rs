//! Rule documentation URL mappings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::response::Response;

/// Maps a rule-id prefix (the first `::` segment) to a documentation base URL.
///
/// With `core → https://linter.aip.dev/`, the rule
/// `core::0131::request-message-name` links to
/// `https://linter.aip.dev/131/request-message-name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleUrlMappings(BTreeMap<String, String>);

impl RuleUrlMappings {
    /// Creates an empty mapping set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the base URL for a prefix.
    pub fn insert(&mut self, prefix: impl Into<String>, base_url: impl Into<String>) {
        self.0.insert(prefix.into(), base_url.into());
    }

    /// Returns true if no mappings are configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds the documentation URL for a rule id, if its prefix is mapped.
    pub fn resolve(&self, rule_id: &str) -> Option<String> {
        let (prefix, rest) = rule_id.split_once("::")?;
        let base = self.0.get(prefix)?;
        let path = rest.split("::").map(trim_aip_number).collect::<Vec<_>>();

        Some(format!("{}/{}", base.trim_end_matches('/'), path.join("/")))
    }

    /// Fills the documentation URI of every problem that has none.
    ///
    /// Returns the number of problems updated.
    pub fn apply(&self, responses: &mut [Response]) -> usize {
        if self.is_empty() {
            return 0;
        }

        let mut updated = 0;
        for problem in responses.iter_mut().flat_map(|r| r.problems.iter_mut()) {
            if problem.rule_uri.is_some() {
                continue;
            }
            if let Some(uri) = self.resolve(&problem.rule_id) {
                problem.rule_uri = Some(uri);
                updated += 1;
            }
        }
        debug!("Filled {} rule documentation URIs", updated);
        updated
    }
}

impl FromIterator<(String, String)> for RuleUrlMappings {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// AIP numbers are zero padded in rule ids but not in documentation paths.
fn trim_aip_number(segment: &str) -> &str {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return segment;
    }
    match segment.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    }
}
