//! Terminal driver glue: raw mode, alternate screen, frame painting and
//! key decoding.
//!
//! Everything here sits outside the core pipeline; the session renders
//! the same frames under tests as under a live terminal. The driver's
//! only jobs are translating crossterm key events into the shared input
//! types and painting frames the renderer reports as changed.

use std::io::{self, Stdout, Write};

use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

use scrawl_input::{Key, KeyEvent, Modifiers};

use crate::session::EditorSession;

/// Raw-mode + alternate-screen guard; restores the terminal on drop so
/// a panic or early return cannot leave the shell unusable.
pub struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { out })
    }

    /// Clears the screen and paints the frame with the status line
    /// underneath.
    pub fn draw(&mut self, frame: &str, status: &str) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        for line in frame.split('\n') {
            queue!(self.out, style::Print(line), cursor::MoveToNextLine(1))?;
        }
        queue!(
            self.out,
            cursor::MoveToNextLine(1),
            style::Print(status)
        )?;
        self.out.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Translates a crossterm key event into the shared input type.
///
/// Returns `None` for key releases and for keys outside the editor's
/// vocabulary (function keys, page movement); the session's diagnostic
/// sink only sees keys that decode but have no mapping.
pub fn convert_key(event: &crossterm::event::KeyEvent) -> Option<KeyEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let key = match event.code {
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Enter => Key::Return,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Tab => Key::Tab,
        KeyCode::Esc => Key::Escape,
        _ => return None,
    };

    Some(KeyEvent::new(
        key,
        Modifiers {
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
            control: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
        },
    ))
}

/// One-line session summary painted under the frame.
pub fn status_line(session: &EditorSession) -> String {
    let name = session
        .path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "[No Name]".to_string());
    let flag = if session.is_modified() { " *" } else { "" };
    let pos = session.cursor_position();
    format!(
        "{}{}  Ln {}, Col {}  {} lines  ^S save  ^Q quit",
        name,
        flag,
        pos.line + 1,
        pos.col + 1,
        session.line_count()
    )
}
