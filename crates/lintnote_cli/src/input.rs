//! Loading lint responses and binding their source files.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use lintnote_core::{LineIndex, LintnoteError, Response};
use rayon::prelude::*;
use tracing::debug;

/// Reads responses from `input`, or from stdin when it is `None` or `-`.
pub fn read_responses(input: Option<&Path>) -> Result<Vec<Response>, LintnoteError> {
    let content = match input {
        Some(path) if path != Path::new("-") => {
            debug!("Reading responses from {}", path.display());
            fs::read_to_string(path).map_err(|e| {
                LintnoteError::input(format!("Failed to read {}: {}", path.display(), e))
            })?
        }
        _ => {
            debug!("Reading responses from stdin");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    parse_responses(&content)
}

/// Parses a JSON array of responses. Blank input is an empty run.
pub fn parse_responses(content: &str) -> Result<Vec<Response>, LintnoteError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(content)
        .map_err(|e| LintnoteError::input(format!("Invalid lint responses: {}", e)))
}

/// Binds the line index of each response's file to its problems.
///
/// Only responses with byte-offset locations need their source; those files
/// are read in parallel relative to `root`.
pub fn bind_sources(responses: &mut [Response], root: &Path) -> Result<(), LintnoteError> {
    responses
        .par_iter_mut()
        .filter(|response| response.needs_source())
        .try_for_each(|response| {
            let path = root.join(&response.file_path);
            let source = fs::read_to_string(&path).map_err(|e| {
                LintnoteError::input(format!(
                    "Failed to read source {}: {}",
                    path.display(),
                    e
                ))
            })?;
            debug!("Bound source {} ({} bytes)", path.display(), source.len());
            response.bind_source(Arc::new(LineIndex::new(&source)));
            Ok(())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintnote_core::{FileLocation, Location, Position};

    const RESPONSES: &str = r#"[
        {
            "file_path": "book.proto",
            "problems": [
                {
                    "rule_id": "core::0123::resource-annotation",
                    "message": "missing annotation",
                    "location": { "offsets": { "start": 27, "end": 31 } },
                    "descriptor": "acme.Book"
                }
            ]
        },
        { "file_path": "clean.proto", "problems": [] }
    ]"#;

    #[test]
    fn test_parse_blank_input() {
        assert!(parse_responses("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_input() {
        let err = parse_responses("{not json").unwrap_err();
        assert!(err.to_string().contains("Invalid lint responses"));
    }

    #[test]
    fn test_bind_sources_resolves_offsets() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("book.proto"),
            "syntax = \"proto3\";\nmessage Book {}\n",
        )
        .unwrap();

        let mut responses = parse_responses(RESPONSES).unwrap();
        bind_sources(&mut responses, dir.path()).unwrap();

        let problem = &responses[0].problems[0];
        let Some(location) = &problem.location else {
            panic!("expected location");
        };
        assert!(matches!(location, Location::Offsets(_)));
        assert_eq!(
            FileLocation::resolve(location, &problem.descriptor).unwrap(),
            FileLocation::new(Position::new(2, 9), Position::new(2, 12))
        );
    }

    #[test]
    fn test_bind_sources_missing_file() {
        let mut responses = parse_responses(RESPONSES).unwrap();
        let err = bind_sources(&mut responses, Path::new("/nonexistent/lintnote")).unwrap_err();

        assert!(err.to_string().contains("Failed to read source"));
    }
}
