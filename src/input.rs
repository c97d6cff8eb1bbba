//! Key-event mapping for the game loop.
//!
//! Jump input is edge-triggered: crossterm delivers one press event per
//! keystroke, and only press events count — repeats and releases from
//! terminals that report them are ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// What a key event means to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Flap upward (Space, Up or Enter); also starts and restarts a session.
    Jump,
    /// Leave the game (Esc or q).
    Quit,
    /// Anything else.
    Other,
}

/// Map one key event to a game input.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind != KeyEventKind::Press {
        return GameInput::Other;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => GameInput::Jump,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_jump_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), GameInput::Jump);
        assert_eq!(map_key(press(KeyCode::Up)), GameInput::Jump);
        assert_eq!(map_key(press(KeyCode::Enter)), GameInput::Jump);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), GameInput::Quit);
        assert_eq!(map_key(press(KeyCode::Char('q'))), GameInput::Quit);
        assert_eq!(map_key(press(KeyCode::Char('Q'))), GameInput::Quit);
    }

    #[test]
    fn test_unrelated_keys_do_nothing() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), GameInput::Other);
        assert_eq!(map_key(press(KeyCode::Down)), GameInput::Other);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), GameInput::Other);
    }
}
