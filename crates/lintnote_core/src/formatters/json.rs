//! JSON output formatter

use serde::Serialize;

use super::OutputFormatter;
use crate::error::FormatError;
use crate::position::FileLocation;
use crate::response::Response;

/// Formats responses as a pretty-printed JSON array with resolved locations.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonResponse<'a> {
    file_path: &'a str,
    problems: Vec<JsonProblem<'a>>,
}

#[derive(Serialize)]
struct JsonProblem<'a> {
    rule_id: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<FileLocation>,
    #[serde(skip_serializing_if = "str::is_empty")]
    rule_doc_uri: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a str>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, responses: &[Response]) -> Result<Vec<u8>, FormatError> {
        let output = responses
            .iter()
            .map(|response| {
                let problems = response
                    .problems
                    .iter()
                    .map(|problem| {
                        let location = problem
                            .location
                            .as_ref()
                            .map(|l| FileLocation::resolve(l, &problem.descriptor))
                            .transpose()?;
                        Ok(JsonProblem {
                            rule_id: &problem.rule_id,
                            message: &problem.message,
                            location,
                            rule_doc_uri: problem.rule_uri(),
                            suggestion: problem.suggestion.as_deref(),
                        })
                    })
                    .collect::<Result<Vec<_>, FormatError>>()?;
                Ok(JsonResponse {
                    file_path: &response.file_path,
                    problems,
                })
            })
            .collect::<Result<Vec<_>, FormatError>>()?;

        let mut bytes = serde_json::to_vec_pretty(&output)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}
