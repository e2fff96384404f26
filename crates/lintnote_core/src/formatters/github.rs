//! GitHub Actions annotation formatter.
//!
//! Emits one `::error` workflow command per problem:
//!
//! ```text
//! ::error file={path}[,line={n},col={n},endLine={n},endColumn={n}],title={title}::{message}
//! ```
//!
//! See <https://docs.github.com/en/actions/using-workflows/workflow-commands-for-github-actions#setting-an-error-message>.

use std::borrow::Cow;

use super::OutputFormatter;
use crate::error::{FormatError, LocationError};
use crate::position::FileLocation;
use crate::problem::Problem;
use crate::response::Response;

/// Percent-encoded form of the `::` command delimiter.
const ESCAPED_DELIMITER: &str = "%3A%3A";

/// Percent-encoded newline.
const ESCAPED_NEWLINE: &str = "%0A";

/// Formats responses as GitHub Actions `::error` annotations.
#[derive(Debug, Clone, Copy, Default)]
pub struct GithubFormatter;

impl OutputFormatter for GithubFormatter {
    fn format(&self, responses: &[Response]) -> Result<Vec<u8>, FormatError> {
        Ok(format_github_actions(responses)?)
    }
}

/// Formats every problem of every response as a workflow command line.
///
/// The only failure is a location that cannot be resolved against its
/// descriptor; it is propagated as is.
pub fn format_github_actions(responses: &[Response]) -> Result<Vec<u8>, LocationError> {
    let mut out = String::new();
    for response in responses {
        for problem in &response.problems {
            write_annotation(&mut out, &response.file_path, problem)?;
        }
    }
    Ok(out.into_bytes())
}

fn write_annotation(
    out: &mut String,
    file_path: &str,
    problem: &Problem,
) -> Result<(), LocationError> {
    let location = problem
        .location
        .as_ref()
        .map(|location| FileLocation::resolve(location, &problem.descriptor))
        .transpose()?;

    out.push_str("::error file=");
    out.push_str(file_path);
    if let Some(loc) = &location {
        out.push_str(&format!(
            ",line={},col={},endLine={},endColumn={}",
            loc.start.line, loc.start.column, loc.end.line, loc.end.column
        ));
    }

    let mut message = escape_message(&problem.message).into_owned();
    let uri = problem.rule_uri();
    if !uri.is_empty() {
        message.push_str(ESCAPED_NEWLINE);
        message.push_str(uri);
    }

    out.push_str(",title=");
    out.push_str(&escape_title(&problem.rule_id));
    out.push_str("::");
    out.push_str(&message);

    match location {
        Some(loc) => out.push_str(&format!(
            "<br>line={}, col={}, endLine={}, endCol={}\n",
            loc.start.line, loc.start.column, loc.end.line, loc.end.column
        )),
        None => out.push_str("%0Ano location info found\n"),
    }

    Ok(())
}

/// Escapes the `::` command delimiter in an annotation title.
pub fn escape_title(title: &str) -> Cow<'_, str> {
    if title.contains("::") {
        Cow::Owned(title.replace("::", ESCAPED_DELIMITER))
    } else {
        Cow::Borrowed(title)
    }
}

/// Escapes newlines in an annotation message.
pub fn escape_message(message: &str) -> Cow<'_, str> {
    if message.contains('\n') {
        Cow::Owned(message.replace('\n', ESCAPED_NEWLINE))
    } else {
        Cow::Borrowed(message)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::descriptor::Descriptor;
    use crate::location::{Location, SourceSpan};
    use crate::position::Span;
    use crate::source::LineIndex;

    const RULE: &str = "core::0131::request-message-name";

    fn output(responses: &[Response]) -> String {
        String::from_utf8(format_github_actions(responses).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(format_github_actions(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_response_without_problems() {
        assert_eq!(output(&[Response::new("a.proto", vec![])]), "");
    }

    #[test]
    fn test_problem_without_location() {
        let responses = vec![Response::new("a.proto", vec![Problem::new(RULE, "bad name")])];

        assert_eq!(
            output(&responses),
            "::error file=a.proto,title=core%3A%3A0131%3A%3Arequest-message-name::bad name%0Ano location info found\n"
        );
    }

    #[test]
    fn test_problem_with_location() {
        let problem = Problem::new(RULE, "bad name")
            .with_location(Location::Span(SourceSpan::try_from(vec![4, 0, 10]).unwrap()));
        let responses = vec![Response::new("a.proto", vec![problem])];

        assert_eq!(
            output(&responses),
            "::error file=a.proto,line=5,col=1,endLine=5,endColumn=10,title=core%3A%3A0131%3A%3Arequest-message-name::bad name<br>line=5, col=1, endLine=5, endCol=10\n"
        );
    }

    #[test]
    fn test_multiline_message_with_uri() {
        let problem = Problem::new(RULE, "first\nsecond")
            .with_rule_uri("https://linter.aip.dev/131/request-message-name");
        let responses = vec![Response::new("a.proto", vec![problem])];

        assert_eq!(
            output(&responses),
            "::error file=a.proto,title=core%3A%3A0131%3A%3Arequest-message-name::first%0Asecond%0Ahttps://linter.aip.dev/131/request-message-name%0Ano location info found\n"
        );
    }

    #[test]
    fn test_offset_location_uses_descriptor_source() {
        let source = "syntax = \"proto3\";\nmessage Book {}\n";
        let start = source.find("Book").unwrap() as u32;
        let descriptor =
            Descriptor::new("acme.Book").with_source(Arc::new(LineIndex::new(source)));
        let problem = Problem::new("core::0123::resource-annotation", "missing annotation")
            .with_location(Location::Offsets(Span::new(start, start + 4)))
            .with_descriptor(descriptor);
        let responses = vec![Response::new("acme/book.proto", vec![problem])];

        assert_eq!(
            output(&responses),
            "::error file=acme/book.proto,line=2,col=9,endLine=2,endColumn=12,title=core%3A%3A0123%3A%3Aresource-annotation::missing annotation<br>line=2, col=9, endLine=2, endCol=12\n"
        );
    }

    #[test]
    fn test_unresolvable_location_is_propagated() {
        let problem =
            Problem::new("rule", "message").with_location(Location::Offsets(Span::new(0, 3)));
        let responses = vec![Response::new("a.proto", vec![problem])];

        assert!(matches!(
            format_github_actions(&responses),
            Err(LocationError::MissingSource { .. })
        ));
    }

    #[test]
    fn test_order_and_line_count_preserved() {
        let responses = vec![
            Response::new(
                "b.proto",
                vec![Problem::new("r1", "one"), Problem::new("r2", "two")],
            ),
            Response::new("empty.proto", vec![]),
            Response::new("a.proto", vec![Problem::new("r3", "three")]),
        ];
        let text = output(&responses);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("::error file=b.proto,title=r1::one"));
        assert!(lines[1].starts_with("::error file=b.proto,title=r2::two"));
        assert!(lines[2].starts_with("::error file=a.proto,title=r3::three"));
    }

    #[test]
    fn test_file_path_is_not_escaped() {
        let responses = vec![Response::new("dir::odd/a.proto", vec![Problem::new("r", "m")])];
        assert!(output(&responses).starts_with("::error file=dir::odd/a.proto,title=r::m"));
    }

    #[rstest]
    #[case::plain("request-message-name", "request-message-name")]
    #[case::delimiters("core::0131::x", "core%3A%3A0131%3A%3Ax")]
    #[case::single_colon("a:b", "a:b")]
    #[case::triple_colon("a:::b", "a%3A%3A:b")]
    fn test_escape_title(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_title(input), expected);
    }

    #[rstest]
    #[case::plain("bad name", "bad name")]
    #[case::newlines("a\nb\n", "a%0Ab%0A")]
    #[case::carriage_return_kept("a\r\nb", "a\r%0Ab")]
    fn test_escape_message(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_message(input), expected);
    }

    #[test]
    fn test_escape_borrows_when_unchanged() {
        assert!(matches!(escape_title("plain"), Cow::Borrowed(_)));
        assert!(matches!(escape_message("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escaped_fields_contain_no_raw_delimiters() {
        let problem = Problem::new("a::b::c", "line one\nline two\nline three");
        let responses = vec![Response::new("a.proto", vec![problem])];
        let text = output(&responses);
        let line = text.strip_suffix('\n').unwrap();

        assert!(!line.contains('\n'));
        // One `::` opens the command, one separates the fields from the message.
        assert_eq!(line.matches("::").count(), 2);
    }
}
