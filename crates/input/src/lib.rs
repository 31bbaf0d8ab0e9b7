//! Input event types for keyboard handling.
//!
//! These types abstract over the terminal backend's event encoding and
//! provide a clean Rust-native interface for input handling. The editor
//! session dispatches on these and never sees backend types directly.

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a KeyEvent for a control chord, e.g. Ctrl+S.
    pub fn ctrl(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers {
                control: true,
                ..Default::default()
            },
        }
    }

    /// Returns true if this event is the given control chord.
    pub fn is_ctrl(&self, ch: char) -> bool {
        self.modifiers.control && self.key == Key::Char(ch)
    }
}

/// Modifier keys that can be held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Control key
    pub control: bool,
    /// Alt/Meta key
    pub alt: bool,
}

impl Modifiers {
    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.control && !self.alt
    }

    /// Returns true if only shift is held (for uppercase letters).
    pub fn is_shift_only(&self) -> bool {
        self.shift && !self.control && !self.alt
    }
}

/// Keys that can be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    /// Return / Enter
    Return,
    /// Backspace / Delete backward
    Backspace,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Home key
    Home,
    /// End key
    End,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_constructor_has_no_modifiers() {
        let event = KeyEvent::char('a');
        assert_eq!(event.key, Key::Char('a'));
        assert!(event.modifiers.is_empty());
    }

    #[test]
    fn test_ctrl_chord_detection() {
        let event = KeyEvent::ctrl('s');
        assert!(event.is_ctrl('s'));
        assert!(!event.is_ctrl('q'));
        assert!(!KeyEvent::char('s').is_ctrl('s'));
    }

    #[test]
    fn test_is_shift_only() {
        let shifted = KeyEvent::new(
            Key::Char('A'),
            Modifiers {
                shift: true,
                ..Default::default()
            },
        );
        assert!(shifted.modifiers.is_shift_only());
        assert!(!KeyEvent::ctrl('a').modifiers.is_shift_only());
    }
}
