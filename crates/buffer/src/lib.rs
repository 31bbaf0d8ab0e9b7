//! scrawl-buffer: the line-oriented text buffer and cursor for scrawl.
//!
//! This crate owns the two leaf components of the editor core:
//!
//! - [`TextBuffer`]: the document as an ordered sequence of lines, with
//!   structural mutation primitives (character insert, line split,
//!   backspace-merge) and a content [`Revision`] tag for downstream cache
//!   invalidation.
//! - [`Cursor`]: a (column, line) address kept valid against a buffer by
//!   clamping, with the directional movement algorithm for arrow input.
//!
//! The split is deliberate: the buffer rejects invalid indices and the
//! cursor is the component that clamps. A rejected index surfacing past
//! the cursor is a bug in the caller, not a runtime condition to recover
//! from.
//!
//! # Example
//!
//! ```
//! use scrawl_buffer::{Cursor, Position, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_str("hello world");
//! let mut cursor = Cursor::new();
//!
//! buffer.insert_line_break(0, 5).unwrap();
//! cursor.set_position(Position::new(1, 0), &buffer);
//!
//! assert_eq!(buffer.line_count(), 2);
//! assert_eq!(buffer.line(1), Ok(" world"));
//! assert_eq!(cursor.position(), Position::new(1, 0));
//! ```

mod cursor;
mod text_buffer;
mod types;

pub use cursor::Cursor;
pub use text_buffer::TextBuffer;
pub use types::{OutOfRange, Position, Revision};
