//! Summary output formatter

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use super::OutputFormatter;
use crate::error::FormatError;
use crate::response::{Response, ResponseSummary};

/// Formats a table of problem counts per rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryFormatter;

impl OutputFormatter for SummaryFormatter {
    fn format(&self, responses: &[Response]) -> Result<Vec<u8>, FormatError> {
        let mut per_rule: BTreeMap<&str, (usize, BTreeSet<usize>)> = BTreeMap::new();
        for (file_idx, response) in responses.iter().enumerate() {
            for problem in &response.problems {
                let entry = per_rule.entry(problem.rule_id.as_str()).or_default();
                entry.0 += 1;
                entry.1.insert(file_idx);
            }
        }

        let mut rows: Vec<_> = per_rule
            .into_iter()
            .map(|(rule, (count, files))| (rule, count, files.len()))
            .collect();
        // BTreeMap already ordered by rule id; stable sort keeps that on ties.
        rows.sort_by(|a, b| b.1.cmp(&a.1));

        let width = rows
            .iter()
            .map(|(rule, _, _)| rule.len())
            .max()
            .unwrap_or(0)
            .max(30);

        let mut out = String::new();
        writeln!(out, "{:<width$} | {:>8} | {:>5}", "Rule", "Problems", "Files")?;
        writeln!(out, "{:-<width$}-+-{:-<8}-+-{:-<5}", "", "", "")?;
        for (rule, count, files) in &rows {
            writeln!(out, "{:<width$} | {:>8} | {:>5}", rule, count, files)?;
        }
        writeln!(out, "{:-<width$}-+-{:-<8}-+-{:-<5}", "", "", "")?;

        let summary = ResponseSummary::from_responses(responses);
        writeln!(
            out,
            "{:<width$} | {:>8} | {:>5}",
            "Total", summary.problems, summary.files_with_problems
        )?;

        Ok(out.into_bytes())
    }
}
