//! EditorSession: the thin dispatcher between input events and the core.
//!
//! One input event maps to exactly one buffer mutation and/or one cursor
//! movement, followed by one render pass driven by the caller. The
//! session owns the buffer, the cursor and the renderer exclusively;
//! nothing else aliases them.
//!
//! Mutations re-establish the cursor invariant immediately: every edit
//! entry point repositions through [`Cursor::set_position`], which
//! clamps. A buffer rejection surfacing out of an edit entry point means
//! that discipline broke and is reported as an invariant violation
//! (panic in debug builds), never silently swallowed.

use std::fs;
use std::path::{Path, PathBuf};

use scrawl_buffer::{Cursor, OutOfRange, Position, TextBuffer};
use scrawl_input::{Key, KeyEvent};

use crate::config::EditorConfig;
use crate::diagnostics::DiagnosticSink;
use crate::renderer::{Frame, IncrementalRenderer};

/// What the dispatcher did with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The event was translated into an edit or movement.
    Handled,
    /// The event has no mapping; it was reported to the diagnostic sink.
    Ignored,
    /// The event asks the host loop to shut down.
    Quit,
}

/// Errors from the file collaborators (open/save).
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no file path associated with this buffer")]
    NoPath,
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single editing session: one buffer, one cursor, one renderer.
#[derive(Debug)]
pub struct EditorSession {
    buffer: TextBuffer,
    cursor: Cursor,
    renderer: IncrementalRenderer,
    path: Option<PathBuf>,
    modified: bool,
}

impl EditorSession {
    /// Creates a session over a fresh single-blank-line document.
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            buffer: TextBuffer::new(),
            cursor: Cursor::new(),
            renderer: IncrementalRenderer::new(config.cursor_glyph),
            path: None,
            modified: false,
        }
    }

    // ==================== Queries ====================

    pub fn cursor_position(&self) -> Position {
        self.cursor.position()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn line(&self, index: usize) -> Result<&str, OutOfRange> {
        self.buffer.line(index)
    }

    /// Returns true if the buffer has edits not yet written to disk.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // ==================== Mutation entry points ====================

    /// Inserts `ch` at the cursor and advances the cursor past it.
    pub fn insert_char(&mut self, ch: char) -> Result<(), OutOfRange> {
        if ch == '\n' {
            return self.insert_line_break();
        }
        let pos = self.cursor.position();
        self.buffer.insert_char(pos.line, pos.col, ch)?;
        self.cursor
            .set_position(Position::new(pos.line, pos.col + 1), &self.buffer);
        self.modified = true;
        Ok(())
    }

    /// Splits the current line at the cursor; the cursor lands at the
    /// start of the new line.
    pub fn insert_line_break(&mut self) -> Result<(), OutOfRange> {
        let pos = self.cursor.position();
        self.buffer.insert_line_break(pos.line, pos.col)?;
        self.cursor
            .set_position(Position::new(pos.line + 1, 0), &self.buffer);
        self.modified = true;
        Ok(())
    }

    /// Deletes the character before the cursor; at column 0 the current
    /// line merges into the previous one and the cursor lands at the
    /// junction point the buffer reports back.
    pub fn delete_backward(&mut self) -> Result<(), OutOfRange> {
        let pos = self.cursor.position();
        if pos.line == 0 && pos.col == 0 {
            return Ok(());
        }
        let merged = pos.col == 0;
        let column = self.buffer.delete_char_before(pos.line, pos.col)?;
        let line = if merged { pos.line - 1 } else { pos.line };
        self.cursor
            .set_position(Position::new(line, column), &self.buffer);
        self.modified = true;
        Ok(())
    }

    // ==================== Navigation entry points ====================

    pub fn move_left(&mut self) {
        self.cursor.move_left(&self.buffer);
    }

    pub fn move_right(&mut self) {
        self.cursor.move_right(&self.buffer);
    }

    pub fn move_up(&mut self) {
        self.cursor.move_up(&self.buffer);
    }

    pub fn move_down(&mut self) {
        self.cursor.move_down(&self.buffer);
    }

    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor.set_position(pos, &self.buffer);
    }

    // ==================== Rendering ====================

    /// Runs one render pass; `changed == false` means the display layer
    /// can skip the repaint.
    pub fn render(&mut self) -> Frame<'_> {
        self.renderer.render(&self.buffer, &self.cursor)
    }

    // ==================== Dispatch ====================

    /// Maps a key event to exactly one entry point above.
    ///
    /// Events with no mapping go to the injected diagnostic sink, never
    /// to stdout and never to process-global state.
    pub fn handle_key(
        &mut self,
        event: &KeyEvent,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> KeyOutcome {
        if event.modifiers.control || event.modifiers.alt {
            return self.handle_chord(event, diagnostics);
        }

        match event.key {
            Key::Char(ch) => self.edit(|session| session.insert_char(ch)),
            Key::Return => self.edit(Self::insert_line_break),
            Key::Backspace => self.edit(Self::delete_backward),
            Key::Left => {
                self.move_left();
                KeyOutcome::Handled
            }
            Key::Right => {
                self.move_right();
                KeyOutcome::Handled
            }
            Key::Up => {
                self.move_up();
                KeyOutcome::Handled
            }
            Key::Down => {
                self.move_down();
                KeyOutcome::Handled
            }
            Key::Home => {
                self.set_cursor(Position::new(self.cursor.line(), 0));
                KeyOutcome::Handled
            }
            Key::End => {
                let line = self.cursor.line();
                let line_len = self.buffer.line_len(line).unwrap_or(0);
                self.set_cursor(Position::new(line, line_len));
                KeyOutcome::Handled
            }
            Key::Tab | Key::Escape => {
                diagnostics.unhandled_key(event);
                KeyOutcome::Ignored
            }
        }
    }

    fn handle_chord(
        &mut self,
        event: &KeyEvent,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> KeyOutcome {
        if event.is_ctrl('q') || event.is_ctrl('c') {
            return KeyOutcome::Quit;
        }
        if event.is_ctrl('s') {
            if let Err(err) = self.save() {
                tracing::warn!(%err, "save failed");
            }
            return KeyOutcome::Handled;
        }
        diagnostics.unhandled_key(event);
        KeyOutcome::Ignored
    }

    fn edit(&mut self, op: impl FnOnce(&mut Self) -> Result<(), OutOfRange>) -> KeyOutcome {
        if let Err(err) = op(self) {
            // A clamped cursor cannot address out of range; reaching this
            // branch means the clamping discipline broke somewhere.
            debug_assert!(false, "cursor-addressed edit rejected: {err}");
            tracing::error!(%err, "cursor-addressed edit rejected");
        }
        KeyOutcome::Handled
    }

    // ==================== File collaborators ====================

    /// Replaces the document with the file's content and moves the
    /// cursor to the document start.
    pub fn open(&mut self, path: impl Into<PathBuf>) -> Result<(), SessionError> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|source| SessionError::Io {
            path: path.clone(),
            source,
        })?;
        self.buffer.replace_content(&content);
        self.cursor.set_position(Position::new(0, 0), &self.buffer);
        self.path = Some(path);
        self.modified = false;
        Ok(())
    }

    /// Associates a path without reading it, for files that do not exist
    /// yet; the first save creates them.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Writes the buffer to its associated path.
    pub fn save(&mut self) -> Result<(), SessionError> {
        let path = self.path.clone().ok_or(SessionError::NoPath)?;
        self.save_as(path)
    }

    /// Writes the buffer to `path` and adopts it as the session's path.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<(), SessionError> {
        let path = path.into();
        fs::write(&path, self.buffer.content()).map_err(|source| SessionError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "buffer saved");
        self.path = Some(path);
        self.modified = false;
        Ok(())
    }
}
