//! TextBuffer is the sole authority over document content and structural edits.
//!
//! The document is an ordered vector of lines addressed at codepoint
//! granularity. Lines never contain a line terminator; line boundaries are
//! structural. A buffer always holds at least one line, possibly empty.
//!
//! Index-out-of-range conditions are reported, never silently clamped:
//! clamping a read pointer into valid bounds is the [`Cursor`]'s job, and
//! the buffer enforcing structural correctness is what keeps the two
//! responsibilities from bleeding into each other.
//!
//! [`Cursor`]: crate::Cursor

use crate::types::{OutOfRange, Revision};

/// Byte index of the given codepoint column within `line`.
///
/// `column == char count` addresses the end of the line. Returns `None`
/// when `column` is past that.
fn byte_index(line: &str, column: usize) -> Option<usize> {
    line.char_indices()
        .map(|(at, _)| at)
        .chain(std::iter::once(line.len()))
        .nth(column)
}

/// A line-oriented text buffer with content-revision tracking.
///
/// Every successful mutation bumps the buffer's [`Revision`], which is the
/// invalidation token for downstream render caches. The buffer knows
/// nothing about cursors or rendering.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    revision: Revision,
}

impl TextBuffer {
    /// Creates an empty buffer holding a single blank line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            revision: Revision::default(),
        }
    }

    /// Creates a buffer initialized with the given content.
    ///
    /// Note: We don't implement `FromStr` because it requires returning
    /// `Result`, but parsing a string into a TextBuffer cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        Self {
            lines: split_lines(content),
            revision: Revision::default(),
        }
    }

    // ==================== Accessors ====================

    /// Returns the number of lines in the buffer.
    ///
    /// Always at least 1 (even for an empty buffer).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the content of the addressed line, without a terminator.
    pub fn line(&self, index: usize) -> Result<&str, OutOfRange> {
        self.lines
            .get(index)
            .map(String::as_str)
            .ok_or(OutOfRange::Line {
                line: index,
                line_count: self.lines.len(),
            })
    }

    /// Returns the codepoint length of the addressed line.
    pub fn line_len(&self, index: usize) -> Result<usize, OutOfRange> {
        self.line(index).map(|line| line.chars().count())
    }

    /// Returns the current content-revision tag.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Returns true if the buffer holds nothing but a single blank line.
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Returns the entire buffer content, lines joined with `\n`.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    // ==================== Mutations ====================

    /// Inserts `ch` at `column` in the addressed line, shifting subsequent
    /// characters right.
    ///
    /// A `'\n'` is routed to [`insert_line_break`] so a terminator can
    /// never be embedded in a line. Out-of-range line or column is
    /// rejected, never clamped.
    ///
    /// [`insert_line_break`]: TextBuffer::insert_line_break
    pub fn insert_char(&mut self, line: usize, column: usize, ch: char) -> Result<(), OutOfRange> {
        if ch == '\n' {
            return self.insert_line_break(line, column);
        }

        let text = self.line_mut(line)?;
        let at = byte_index(text, column).ok_or(OutOfRange::Column {
            line,
            column,
            line_len: text.chars().count(),
        })?;

        text.insert(at, ch);
        self.revision.bump();
        Ok(())
    }

    /// Splits the addressed line at `column`.
    ///
    /// The text before `column` stays at `line`; the text from `column`
    /// onward becomes a new line at `line + 1`. All following lines shift
    /// down by one index.
    pub fn insert_line_break(&mut self, line: usize, column: usize) -> Result<(), OutOfRange> {
        let text = self.line_mut(line)?;
        let at = byte_index(text, column).ok_or(OutOfRange::Column {
            line,
            column,
            line_len: text.chars().count(),
        })?;

        let tail = text.split_off(at);
        self.lines.insert(line + 1, tail);
        self.revision.bump();
        Ok(())
    }

    /// Deletes the character before `column` in the addressed line. This
    /// is the buffer's sole backspace primitive.
    ///
    /// Three cases:
    /// - `column > 0`: removes the character at `column - 1`.
    /// - `column == 0` on a line after the first: merges the addressed
    ///   line into the end of the previous one, shrinking the line count.
    /// - `column == 0` on line 0: no-op (the revision is not bumped).
    ///
    /// Returns the new logical column (the junction point in the merge
    /// case, `column - 1` otherwise) so the caller can reposition its
    /// cursor without re-deriving line lengths.
    pub fn delete_char_before(&mut self, line: usize, column: usize) -> Result<usize, OutOfRange> {
        let line_len = self.line_len(line)?;
        if column > line_len {
            return Err(OutOfRange::Column {
                line,
                column,
                line_len,
            });
        }

        if column > 0 {
            let text = &mut self.lines[line];
            let at = byte_index(text, column - 1).expect("column bounds checked above");
            text.remove(at);
            self.revision.bump();
            Ok(column - 1)
        } else if line > 0 {
            let removed = self.lines.remove(line);
            let previous = &mut self.lines[line - 1];
            let junction = previous.chars().count();
            previous.push_str(&removed);
            self.revision.bump();
            Ok(junction)
        } else {
            // Document start: nothing before (0, 0)
            Ok(0)
        }
    }

    /// Replaces the entire document, e.g. when loading a file.
    ///
    /// Callers holding a cursor into this buffer must re-validate it
    /// afterwards; the previous address may no longer exist.
    pub fn replace_content(&mut self, content: &str) {
        self.lines = split_lines(content);
        self.revision.bump();
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut String, OutOfRange> {
        let line_count = self.lines.len();
        self.lines.get_mut(index).ok_or(OutOfRange::Line {
            line: index,
            line_count,
        })
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

fn split_lines(content: &str) -> Vec<String> {
    content.split('\n').map(String::from).collect()
}
