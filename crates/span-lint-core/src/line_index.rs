//! Byte-offset to line/column resolution.
//!
//! A [`LineIndex`] is a pure function of a file's contents, built once per
//! file and then shared read-only across every rule evaluation for that
//! file. Rules never scan line contents; they resolve byte offsets to line
//! numbers and work on the resolved integers.

/// A resolved position within a file (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Byte column within the line (1-indexed).
    pub column: usize,
}

/// Maps byte offsets within a file's contents to line/column positions.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset at which each line starts. Always non-empty; entry 0 is 0.
    line_starts: Vec<usize>,
    /// Total length of the indexed contents in bytes.
    len: usize,
}

impl LineIndex {
    /// Builds an index from file contents.
    #[must_use]
    pub fn new(content: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in content.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            line_starts,
            len: content.len(),
        }
    }

    /// Resolves a byte offset to a position.
    ///
    /// Returns `None` when the offset lies past the end of the indexed
    /// contents. An offset equal to the length resolves to the position
    /// just past the final byte.
    #[must_use]
    pub fn position(&self, offset: usize) -> Option<Position> {
        if offset > self.len {
            return None;
        }
        // Index of the last line start <= offset.
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Some(Position {
            line: line + 1,
            column: offset - self.line_starts[line] + 1,
        })
    }

    /// Resolves a 1-indexed line/column pair to a byte offset.
    ///
    /// Returns `None` when the line does not exist. The column is not
    /// bounds-checked against the line's length; callers resolving
    /// positions reported by the parser stay within the line by
    /// construction.
    #[must_use]
    pub fn offset(&self, line: usize, column: usize) -> Option<usize> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        Some(start + column.saturating_sub(1))
    }

    /// Number of lines in the indexed contents.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
