//! Integration tests driving the whole pipeline the way the terminal
//! loop does: key event → session dispatch → render pass.

use scrawl::diagnostics::DiagnosticSink;
use scrawl::session::{EditorSession, KeyOutcome};
use scrawl::{EditorConfig, IncrementalRenderer};
use scrawl_buffer::{Cursor, Position, TextBuffer};
use scrawl_input::{Key, KeyEvent, Modifiers};

#[derive(Default)]
struct Recording(Vec<KeyEvent>);

impl DiagnosticSink for Recording {
    fn unhandled_key(&mut self, event: &KeyEvent) {
        self.0.push(*event);
    }
}

fn session() -> EditorSession {
    EditorSession::new(&EditorConfig::default())
}

fn press(session: &mut EditorSession, sink: &mut Recording, key: Key) -> KeyOutcome {
    session.handle_key(&KeyEvent::new(key, Modifiers::default()), sink)
}

#[test]
fn test_insert_into_empty_document() {
    let mut session = session();
    let mut sink = Recording::default();

    press(&mut session, &mut sink, Key::Char('h'));
    press(&mut session, &mut sink, Key::Char('i'));

    assert_eq!(session.line_count(), 1);
    assert_eq!(session.line(0), Ok("hi"));
    assert_eq!(session.cursor_position(), Position::new(0, 2));
}

#[test]
fn test_line_break_at_line_end_leaves_cursor_until_repositioned() {
    // Buffer-level contract: the split itself does not know about the
    // cursor; repositioning is a separate, explicit step.
    let mut buffer = TextBuffer::from_str("ab\ncd");
    let mut cursor = Cursor::new();
    cursor.set_position(Position::new(0, 2), &buffer);

    buffer.insert_line_break(0, 2).unwrap();
    assert_eq!(buffer.line(0), Ok("ab"));
    assert_eq!(buffer.line(1), Ok(""));
    assert_eq!(buffer.line(2), Ok("cd"));
    assert_eq!(cursor.position(), Position::new(0, 2));

    cursor.set_position(Position::new(1, 0), &buffer);
    assert_eq!(cursor.position(), Position::new(1, 0));
}

#[test]
fn test_backspace_at_line_start_joins_lines() {
    let mut session = session();
    let mut sink = Recording::default();
    for key in [Key::Char('a'), Key::Char('b'), Key::Return, Key::Char('c'), Key::Char('d')] {
        press(&mut session, &mut sink, key);
    }
    session.set_cursor(Position::new(1, 0));

    press(&mut session, &mut sink, Key::Backspace);
    assert_eq!(session.line_count(), 1);
    assert_eq!(session.line(0), Ok("abcd"));
    assert_eq!(session.cursor_position(), Position::new(0, 2));
}

#[test]
fn test_moves_at_document_start_are_noops() {
    let mut session = session();
    let mut sink = Recording::default();

    press(&mut session, &mut sink, Key::Left);
    press(&mut session, &mut sink, Key::Up);
    assert_eq!(session.cursor_position(), Position::new(0, 0));
}

#[test]
fn test_move_right_at_end_of_one_line_document_is_noop() {
    let mut session = session();
    let mut sink = Recording::default();
    for ch in "abc".chars() {
        press(&mut session, &mut sink, Key::Char(ch));
    }

    assert_eq!(session.cursor_position(), Position::new(0, 3));
    press(&mut session, &mut sink, Key::Right);
    assert_eq!(session.cursor_position(), Position::new(0, 3));
}

// ==================== Render pipeline ====================

#[test]
fn test_consecutive_renders_are_stable() {
    let mut session = session();
    let mut sink = Recording::default();
    for ch in "stable".chars() {
        press(&mut session, &mut sink, Key::Char(ch));
    }

    let first = {
        let frame = session.render();
        assert!(frame.changed);
        frame.text.to_string()
    };
    let second = session.render();
    assert!(!second.changed);
    assert_eq!(second.text, first);
}

#[test]
fn test_noop_event_suppresses_repaint() {
    let mut session = session();
    let mut sink = Recording::default();
    session.render();

    // Move-left at the document start reaches the renderer but changes
    // nothing visible.
    press(&mut session, &mut sink, Key::Left);
    assert!(!session.render().changed);
}

#[test]
fn test_every_visible_edit_changes_the_frame() {
    let mut session = session();
    let mut sink = Recording::default();
    session.render();

    for key in [Key::Char('x'), Key::Return, Key::Char('y'), Key::Backspace, Key::Left] {
        press(&mut session, &mut sink, key);
        assert!(session.render().changed, "no repaint after {key:?}");
    }
}

#[test]
fn test_frame_places_glyph_at_cursor() {
    let mut buffer = TextBuffer::from_str("one\ntwo");
    let mut cursor = Cursor::new();
    let mut renderer = IncrementalRenderer::new('█');

    cursor.set_position(Position::new(1, 1), &buffer);
    assert_eq!(renderer.render(&buffer, &cursor).text, "one\nt█wo");

    buffer.insert_char(1, 1, 'x').unwrap();
    cursor.set_position(Position::new(1, 2), &buffer);
    assert_eq!(renderer.render(&buffer, &cursor).text, "one\ntx█wo");
}

// ==================== Invariants under dispatch ====================

#[test]
fn test_cursor_invariant_holds_through_event_storm() {
    let mut session = session();
    let mut sink = Recording::default();

    let storm = [
        Key::Char('a'),
        Key::Return,
        Key::Char('b'),
        Key::Char('c'),
        Key::Up,
        Key::End,
        Key::Return,
        Key::Backspace,
        Key::Down,
        Key::Down,
        Key::Backspace,
        Key::Backspace,
        Key::Backspace,
        Key::Backspace,
        Key::Left,
        Key::Up,
        Key::Home,
    ];
    for key in storm {
        press(&mut session, &mut sink, key);

        let pos = session.cursor_position();
        assert!(session.line_count() >= 1);
        assert!(pos.line < session.line_count());
        let line_len = session.line(pos.line).unwrap().chars().count();
        assert!(pos.col <= line_len);
    }
}

// ==================== Files ====================

#[test]
fn test_edit_save_reload_flow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("draft.txt");
    std::fs::write(&path, "hello world\nsecond").unwrap();

    let mut session = session();
    let mut sink = Recording::default();
    session.open(&path).unwrap();
    assert_eq!(session.cursor_position(), Position::new(0, 0));

    session.set_cursor(Position::new(0, 5));
    press(&mut session, &mut sink, Key::Char(','));
    assert!(session.is_modified());

    session.handle_key(&KeyEvent::ctrl('s'), &mut sink);
    assert!(!session.is_modified());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "hello, world\nsecond"
    );
}

#[test]
fn test_unmapped_keys_are_diagnosed_not_inserted() {
    let mut session = session();
    let mut sink = Recording::default();

    press(&mut session, &mut sink, Key::Tab);
    session.handle_key(&KeyEvent::ctrl('z'), &mut sink);

    assert_eq!(sink.0.len(), 2);
    assert_eq!(session.line(0), Ok(""));
}
