//! scrawl entrypoint: logging, config, terminal loop.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing_subscriber::EnvFilter;

use scrawl::session::{EditorSession, KeyOutcome, SessionError};
use scrawl::terminal::{convert_key, status_line, TerminalGuard};
use scrawl::{EditorConfig, TraceSink};

fn main() -> Result<()> {
    let config = EditorConfig::load();
    let _log_guard = init_logging(&config);

    let mut session = EditorSession::new(&config);
    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        match session.open(&path) {
            Ok(()) => {}
            // A new file: remember the path, create it on first save
            Err(SessionError::Io { ref source, .. }) if source.kind() == ErrorKind::NotFound => {
                session.set_path(path);
            }
            Err(err) => return Err(err).context("opening file"),
        }
    }

    tracing::info!(path = ?session.path(), "session started");
    let terminal = TerminalGuard::enter().context("entering raw mode")?;
    let result = run(session, terminal);
    tracing::info!("session ended");
    result
}

fn run(mut session: EditorSession, mut terminal: TerminalGuard) -> Result<()> {
    let mut sink = TraceSink;
    let mut last_status = String::new();

    loop {
        // Paint before blocking: the status can change (save, resize)
        // even when the frame itself did not.
        let status = status_line(&session);
        let frame = session.render();
        if frame.changed || status != last_status {
            terminal
                .draw(frame.text, &status)
                .context("painting frame")?;
            last_status = status;
        }

        match event::read().context("reading terminal event")? {
            Event::Key(key) => {
                let Some(key) = convert_key(&key) else {
                    continue;
                };
                if session.handle_key(&key, &mut sink) == KeyOutcome::Quit {
                    break;
                }
            }
            Event::Resize(..) => {
                // Force a repaint on the resized screen
                last_status.clear();
            }
            _ => {}
        }
    }
    Ok(())
}

/// Logs go to a file: stderr would corrupt the alternate screen.
fn init_logging(config: &EditorConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let appender = tracing_appender::rolling::never(".", "scrawl.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}
