//! Keyboard mapping
//!
//! Front-ends translate their native key events into [`Key`], then
//! [`event_for_key`] decides which [`GameEvent`] (if any) it triggers.

use super::GameEvent;

/// Front-end independent key identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Enter,
    Escape,
    Other,
}

/// Map a key press to a game event
///
/// Lowercase letters type, Backspace/Delete erase, Enter submits, and Escape
/// starts a new game but only once the current one is over. Everything else
/// is ignored.
#[must_use]
pub fn event_for_key(key: Key, game_over: bool) -> Option<GameEvent> {
    match key {
        Key::Char(c) if c.is_ascii_lowercase() => Some(GameEvent::Letter(c)),
        Key::Backspace | Key::Delete => Some(GameEvent::Backspace),
        Key::Enter => Some(GameEvent::Submit),
        Key::Escape if game_over => Some(GameEvent::Reset),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_typing() {
        assert_eq!(event_for_key(Key::Char('q'), false), Some(GameEvent::Letter('q')));
        assert_eq!(event_for_key(Key::Char('Q'), false), None);
        assert_eq!(event_for_key(Key::Char('5'), false), None);
    }

    #[test]
    fn editing_keys() {
        assert_eq!(event_for_key(Key::Backspace, false), Some(GameEvent::Backspace));
        assert_eq!(event_for_key(Key::Delete, false), Some(GameEvent::Backspace));
        assert_eq!(event_for_key(Key::Enter, false), Some(GameEvent::Submit));
        assert_eq!(event_for_key(Key::Other, false), None);
    }

    #[test]
    fn escape_only_resets_finished_games() {
        assert_eq!(event_for_key(Key::Escape, false), None);
        assert_eq!(event_for_key(Key::Escape, true), Some(GameEvent::Reset));
    }
}
