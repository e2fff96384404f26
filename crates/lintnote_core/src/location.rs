//! Problem locations and their resolution into [`FileLocation`]s.

use serde::{Deserialize, Serialize};

use crate::descriptor::Descriptor;
use crate::error::{LocationError, SpanError};
use crate::position::{FileLocation, Position, Span};

/// Where in a file a problem applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// A protobuf `SourceCodeInfo` span.
    Span(SourceSpan),
    /// A byte range into the file source.
    Offsets(Span),
}

/// A validated protobuf `SourceCodeInfo.Location.span`.
///
/// Lines and columns are zero-based and the end column is exclusive. The
/// three element form `[line, column, end_column]` implies the span ends on
/// its start line. Serialized in the four element form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct SourceSpan {
    start_line: u32,
    start_column: u32,
    end_line: u32,
    end_column: u32,
}

impl SourceSpan {
    /// Creates a span from its zero-based components.
    pub const fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    fn to_file_location(self) -> FileLocation {
        FileLocation::new(
            Position::new(self.start_line + 1, self.start_column + 1),
            Position::new(self.end_line + 1, self.end_column),
        )
    }
}

impl TryFrom<Vec<i32>> for SourceSpan {
    type Error = SpanError;

    fn try_from(span: Vec<i32>) -> Result<Self, Self::Error> {
        if let Some(negative) = span.iter().copied().find(|v| *v < 0) {
            return Err(SpanError::Negative(negative));
        }
        let v: Vec<u32> = span.iter().map(|v| *v as u32).collect();
        match v.as_slice() {
            [line, column, end_column] => Ok(Self::new(*line, *column, *line, *end_column)),
            [line, column, end_line, end_column] => {
                Ok(Self::new(*line, *column, *end_line, *end_column))
            }
            _ => Err(SpanError::InvalidLength(span.len())),
        }
    }
}

impl From<SourceSpan> for Vec<i32> {
    fn from(span: SourceSpan) -> Self {
        vec![
            span.start_line as i32,
            span.start_column as i32,
            span.end_line as i32,
            span.end_column as i32,
        ]
    }
}

impl FileLocation {
    /// Resolves a location using `descriptor` as the frame of reference.
    ///
    /// Protobuf spans are self-contained. Byte offsets need the descriptor to
    /// carry the line index of its file; the end position points at the last
    /// byte of the range.
    pub fn resolve(location: &Location, descriptor: &Descriptor) -> Result<Self, LocationError> {
        match location {
            Location::Span(span) => Ok(span.to_file_location()),
            Location::Offsets(span) => {
                if span.end < span.start {
                    return Err(LocationError::InvertedRange {
                        start: span.start,
                        end: span.end,
                    });
                }
                let source = descriptor
                    .source()
                    .ok_or_else(|| LocationError::MissingSource {
                        descriptor: descriptor.full_name().to_string(),
                    })?;
                if span.end > source.len() {
                    return Err(LocationError::OffsetOutOfRange {
                        offset: span.end,
                        len: source.len(),
                    });
                }
                let position = |offset: u32| {
                    source
                        .position(offset)
                        .ok_or(LocationError::OffsetOutOfRange {
                            offset,
                            len: source.len(),
                        })
                };
                Ok(Self::new(position(span.start)?, position(span.last_byte())?))
            }
        }
    }
}
