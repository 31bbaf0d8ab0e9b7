//! Injected diagnostic sink for dispatcher-level noise.
//!
//! Keys the session does not map to an edit or movement are reported
//! here instead of being printed to stdout or a process-global log file.
//! The sink is passed into the dispatcher by the host; the core buffer
//! and renderer never touch it.

use scrawl_input::KeyEvent;

/// Receives dispatcher diagnostics.
pub trait DiagnosticSink {
    /// Called for every key event the session leaves unhandled.
    fn unhandled_key(&mut self, event: &KeyEvent);
}

/// Sink that forwards diagnostics to the `tracing` subscriber.
#[derive(Debug, Default)]
pub struct TraceSink;

impl DiagnosticSink for TraceSink {
    fn unhandled_key(&mut self, event: &KeyEvent) {
        tracing::debug!(?event, "unhandled key");
    }
}
