//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use wt_core::Event;

/// Longest query the picker accepts, in characters
pub const QUERY_LIMIT: usize = 100;

/// Translate a key press into a model event.
///
/// `query` is the current query text; editing keys return the edited query in
/// [`Event::TextChanged`]. Returns `None` for keys with no binding and for
/// key releases.
pub fn map_key(key: KeyEvent, query: &str) -> Option<Event> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Event::Cancel),
        KeyCode::Enter => Some(Event::Confirm),
        KeyCode::Up => Some(Event::MoveUp),
        KeyCode::Down => Some(Event::MoveDown),
        KeyCode::Backspace => {
            let mut next = query.to_string();
            next.pop()?;
            Some(Event::TextChanged(next))
        }
        KeyCode::Char(c) if ctrl => match c {
            'c' => Some(Event::Cancel),
            'p' | 'k' => Some(Event::MoveUp),
            'n' | 'j' => Some(Event::MoveDown),
            'u' if !query.is_empty() => Some(Event::TextChanged(String::new())),
            _ => None,
        },
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(_) if query.chars().count() >= QUERY_LIMIT => None,
        KeyCode::Char(c) => {
            let mut next = query.to_string();
            next.push(c);
            Some(Event::TextChanged(next))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_cancel_keys() {
        assert_eq!(map_key(press(KeyCode::Esc), ""), Some(Event::Cancel));
        assert_eq!(map_key(ctrl('c'), "abc"), Some(Event::Cancel));
    }

    #[test]
    fn test_confirm_key() {
        assert_eq!(map_key(press(KeyCode::Enter), "x"), Some(Event::Confirm));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(press(KeyCode::Up), ""), Some(Event::MoveUp));
        assert_eq!(map_key(ctrl('p'), ""), Some(Event::MoveUp));
        assert_eq!(map_key(ctrl('k'), ""), Some(Event::MoveUp));
        assert_eq!(map_key(press(KeyCode::Down), ""), Some(Event::MoveDown));
        assert_eq!(map_key(ctrl('n'), ""), Some(Event::MoveDown));
        assert_eq!(map_key(ctrl('j'), ""), Some(Event::MoveDown));
    }

    #[test]
    fn test_typing_appends() {
        assert_eq!(
            map_key(press(KeyCode::Char('a')), "fe"),
            Some(Event::TextChanged("fea".to_string()))
        );
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(
            map_key(shifted, ""),
            Some(Event::TextChanged("A".to_string()))
        );
    }

    #[test]
    fn test_query_length_limit() {
        let full = "x".repeat(QUERY_LIMIT);
        assert_eq!(map_key(press(KeyCode::Char('y')), &full), None);
        assert_eq!(
            map_key(press(KeyCode::Backspace), &full),
            Some(Event::TextChanged("x".repeat(QUERY_LIMIT - 1)))
        );

        let almost = "ä".repeat(QUERY_LIMIT - 1);
        assert_eq!(
            map_key(press(KeyCode::Char('y')), &almost),
            Some(Event::TextChanged(format!("{}y", almost)))
        );
    }

    #[test]
    fn test_backspace() {
        assert_eq!(
            map_key(press(KeyCode::Backspace), "feä"),
            Some(Event::TextChanged("fe".to_string()))
        );
        assert_eq!(map_key(press(KeyCode::Backspace), ""), None);
    }

    #[test]
    fn test_ctrl_u_clears() {
        assert_eq!(
            map_key(ctrl('u'), "feature"),
            Some(Event::TextChanged(String::new()))
        );
        assert_eq!(map_key(ctrl('u'), ""), None);
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(map_key(press(KeyCode::Tab), ""), None);
        assert_eq!(map_key(ctrl('x'), ""), None);
        let alt = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::ALT);
        assert_eq!(map_key(alt, ""), None);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release, ""), None);
    }
}
