//! Key mapping from crossterm events to normalized keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Normalize a console key event.
///
/// Only presses count; release and repeat events (reported on Windows) are dropped.
pub fn normalize_key_event(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Some(Key::Interrupt),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(ch) => Some(Key::from_char(ch)),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Enter => Some(Key::Char('\r')),
        KeyCode::Tab => Some(Key::Char('\t')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(normalize_key_event(KeyEvent::from(KeyCode::Up)), Some(Key::Up));
        assert_eq!(normalize_key_event(KeyEvent::from(KeyCode::Down)), Some(Key::Down));
        assert_eq!(normalize_key_event(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(normalize_key_event(KeyEvent::from(KeyCode::Right)), None);
    }

    #[test]
    fn test_chars_are_lowercased() {
        assert_eq!(
            normalize_key_event(KeyEvent::from(KeyCode::Char('W'))),
            Some(Key::Char('w'))
        );
        assert_eq!(
            normalize_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(Key::Char('s'))
        );
        assert_eq!(normalize_key_event(KeyEvent::from(KeyCode::Esc)), None);
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        assert_eq!(
            normalize_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Interrupt)
        );
        assert_eq!(
            normalize_key_event(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('w'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(normalize_key_event(release), None);
    }
}
