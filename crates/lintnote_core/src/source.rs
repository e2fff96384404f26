//! Line index for converting byte offsets into line/column positions.

use crate::position::Position;

/// Pre-computed line start offsets of a source text.
///
/// Both `\n` and `\r\n` line endings are recognised; the `\r` of a CRLF pair
/// is counted as the last byte of its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of each line start. Always contains at least `0`.
    line_starts: Vec<u32>,
    /// Total length of the source in bytes.
    len: u32,
}

impl LineIndex {
    /// Builds a line index from source text.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i as u32 + 1),
        );

        Self {
            line_starts,
            len: source.len() as u32,
        }
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the source length in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns true if the indexed source is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Converts a byte offset into a 1-indexed line/column position.
    ///
    /// The offset equal to the source length (end of file) is accepted.
    /// Uses binary search for O(log n) lookup.
    pub fn position(&self, offset: u32) -> Option<Position> {
        if offset > self.len {
            return None;
        }

        let idx = self.line_starts.partition_point(|start| *start <= offset);
        // line_starts[0] == 0, so idx >= 1 for every offset.
        let line_idx = idx - 1;
        let line_start = self.line_starts[line_idx];

        Some(Position::new(line_idx as u32 + 1, offset - line_start + 1))
    }
}
