//! Translation of crossterm events into effect inputs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_effects::konami::Key;
use folio_effects::scroll::Modifiers;

/// Key as seen by the Konami detector.
pub fn konami_key(key: &KeyEvent) -> Key {
    match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

/// Ctrl / Meta state of a key press.
pub fn modifiers(key: &KeyEvent) -> Modifiers {
    Modifiers {
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        meta: key.modifiers.intersects(KeyModifiers::META | KeyModifiers::SUPER),
    }
}

/// Nav link index for the number keys `1`-`9`.
pub fn nav_index(key: &KeyEvent) -> Option<usize> {
    match key.code {
        KeyCode::Char(c @ '1'..='9') if key.modifiers.is_empty() => {
            c.to_digit(10).map(|d| d as usize - 1)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_konami_key() {
        assert_eq!(konami_key(&KeyEvent::from(KeyCode::Up)), Key::Up);
        assert_eq!(konami_key(&KeyEvent::from(KeyCode::Char('b'))), Key::Char('b'));
        assert_eq!(konami_key(&KeyEvent::from(KeyCode::Enter)), Key::Other);
    }

    #[test]
    fn test_modifiers() {
        let key = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL);
        assert!(modifiers(&key).ctrl);
        assert!(!modifiers(&key).meta);
        let key = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::SUPER);
        assert!(modifiers(&key).meta);
    }

    #[test]
    fn test_nav_index() {
        assert_eq!(nav_index(&KeyEvent::from(KeyCode::Char('1'))), Some(0));
        assert_eq!(nav_index(&KeyEvent::from(KeyCode::Char('5'))), Some(4));
        assert_eq!(nav_index(&KeyEvent::from(KeyCode::Char('0'))), None);
        let ctrl = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::CONTROL);
        assert_eq!(nav_index(&ctrl), None);
    }
}
