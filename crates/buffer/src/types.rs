/// Position in the document as (line, column) where both are 0-indexed.
///
/// `col` is a codepoint index into the line and may equal the line's
/// length (the "after last character" address).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Compare by line first, then by column
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

/// Opaque content-version tag.
///
/// Changes exactly when document content changes. Downstream caches
/// compare tags for equality; the numeric value has no other meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Revision(u64);

impl Revision {
    pub(crate) fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// An index outside the valid bounds of a buffer operation.
///
/// This is a caller error, not a user-facing one: the cursor clamps
/// before addressing the buffer, so an `OutOfRange` surfacing past it
/// indicates broken clamping discipline in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OutOfRange {
    /// Line index at or past the current line count.
    #[error("line {line} out of range ({line_count} lines)")]
    Line { line: usize, line_count: usize },
    /// Column past the addressed line's length.
    #[error("column {column} out of range on line {line} (length {line_len})")]
    Column {
        line: usize,
        column: usize,
        line_len: usize,
    },
}
