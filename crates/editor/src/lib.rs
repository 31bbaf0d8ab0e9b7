//! scrawl: a terminal-resident plain-text editor.
//!
//! The core pipeline is buffer → cursor clamp → renderer → frame:
//!
//! - [`EditorSession`] dispatches one input event into exactly one
//!   buffer mutation and/or cursor movement, then the host runs one
//!   render pass.
//! - [`IncrementalRenderer`] caches a cursor-free base frame keyed on
//!   the buffer's revision tag, splices in the cursor glyph, and
//!   string-diffs against the last emitted frame so the terminal is only
//!   repainted when something visible changed.
//!
//! The terminal driver, config loading and diagnostics live in their own
//! modules as glue around that core; the buffer and cursor themselves
//! come from the `scrawl-buffer` crate.

pub mod config;
pub mod diagnostics;
pub mod renderer;
pub mod session;
pub mod terminal;

pub use config::EditorConfig;
pub use diagnostics::{DiagnosticSink, TraceSink};
pub use renderer::{Frame, IncrementalRenderer};
pub use session::{EditorSession, KeyOutcome, SessionError};
