//! Cursor: a single (column, line) address into a [`TextBuffer`].
//!
//! The cursor never mutates the buffer; it only reads line counts and
//! lengths through the buffer's query interface. All movement operations
//! are total (they clamp internally instead of failing), so the address
//! is valid against the given buffer when any of them returns.
//!
//! [`clamp`] is not a convenience: it is the mandatory post-condition
//! step after every buffer mutation that could shrink the addressed line
//! or remove lines.
//!
//! [`clamp`]: Cursor::clamp

use crate::text_buffer::TextBuffer;
use crate::types::Position;

/// An insertion point into a [`TextBuffer`].
///
/// Invariant (holding whenever a movement operation returns, and after
/// `clamp` following a mutation): `line < buffer.line_count()` and
/// `column <= line length`; the column may legally sit just past the
/// last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    column: usize,
    line: usize,
}

impl Cursor {
    /// Creates a cursor at the document start.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Pulls the address back into the buffer's bounds: line first, then
    /// column against the (possibly different) addressed line's length.
    ///
    /// Idempotent.
    pub fn clamp(&mut self, buffer: &TextBuffer) {
        if self.line >= buffer.line_count() {
            self.line = buffer.line_count() - 1;
        }
        let line_len = buffer.line_len(self.line).unwrap_or(0);
        if self.column > line_len {
            self.column = line_len;
        }
    }

    /// Moves one character left, wrapping to the end of the previous line
    /// at column 0. No-op at the document start.
    pub fn move_left(&mut self, buffer: &TextBuffer) {
        if self.column > 0 {
            self.column -= 1;
        } else if self.line > 0 {
            self.line -= 1;
            self.column = buffer.line_len(self.line).unwrap_or(0);
        }
    }

    /// Moves one character right, wrapping to the start of the next line
    /// at the line end. No-op at the document end.
    pub fn move_right(&mut self, buffer: &TextBuffer) {
        let line_len = buffer.line_len(self.line).unwrap_or(0);
        if self.column < line_len {
            self.column += 1;
        } else if self.line + 1 < buffer.line_count() {
            self.line += 1;
            self.column = 0;
        }
    }

    /// Moves one line up, clamping the column to the target line's
    /// length. No sticky-column memory: a clamped column stays clamped.
    pub fn move_up(&mut self, buffer: &TextBuffer) {
        if self.line > 0 {
            self.line -= 1;
            let line_len = buffer.line_len(self.line).unwrap_or(0);
            self.column = self.column.min(line_len);
        }
    }

    /// Moves one line down, clamping the column to the target line's
    /// length.
    pub fn move_down(&mut self, buffer: &TextBuffer) {
        if self.line + 1 < buffer.line_count() {
            self.line += 1;
            let line_len = buffer.line_len(self.line).unwrap_or(0);
            self.column = self.column.min(line_len);
        }
    }

    /// Sets both fields, then clamps against the buffer.
    pub fn set_position(&mut self, pos: Position, buffer: &TextBuffer) {
        self.line = pos.line;
        self.column = pos.col;
        self.clamp(buffer);
    }
}
