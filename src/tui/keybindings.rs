//! Key bindings: maps key events to application actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application-level actions triggered by key events.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Reload the program from its source and restart play.
    Reload,
    /// Submit the typed guess.
    Submit,
    /// Insert a character into the guess line.
    InputChar(char),
    /// Delete the character before the cursor.
    InputBackspace,
    /// Clear the guess line.
    InputClear,
    ToggleHelp,
    ToggleEventLog,
    CycleTheme,
    /// Close the open overlay, or quit when none is open.
    Escape,
    HelpScrollUp,
    HelpScrollDown,
}

/// Map a key event to an action.
///
/// While the help overlay is visible the arrow keys scroll it and typing
/// is ignored.
pub fn map_key(key: KeyEvent, help_visible: bool) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Reload),
            KeyCode::Char('l') => Some(Action::ToggleEventLog),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            KeyCode::Char('u') => Some(Action::InputClear),
            _ => None,
        };
    }

    match key.code {
        KeyCode::F(1) => return Some(Action::ToggleHelp),
        KeyCode::Esc => return Some(Action::Escape),
        _ => {}
    }

    if help_visible {
        return match key.code {
            KeyCode::Up => Some(Action::HelpScrollUp),
            KeyCode::Down => Some(Action::HelpScrollDown),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::InputBackspace),
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl_key(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn ctrl_q_quits() {
        assert_eq!(map_key(ctrl_key('q'), false), Some(Action::Quit));
        assert_eq!(map_key(ctrl_key('q'), true), Some(Action::Quit));
        assert_eq!(map_key(ctrl_key('c'), false), Some(Action::Quit));
    }

    #[test]
    fn ctrl_r_reloads() {
        assert_eq!(map_key(ctrl_key('r'), false), Some(Action::Reload));
    }

    #[test]
    fn ctrl_l_and_t() {
        assert_eq!(map_key(ctrl_key('l'), false), Some(Action::ToggleEventLog));
        assert_eq!(map_key(ctrl_key('t'), true), Some(Action::CycleTheme));
    }

    #[test]
    fn typing_goes_to_input() {
        assert_eq!(
            map_key(key(KeyCode::Char('f')), false),
            Some(Action::InputChar('f'))
        );
        assert_eq!(
            map_key(key(KeyCode::Char(' ')), false),
            Some(Action::InputChar(' '))
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace), false),
            Some(Action::InputBackspace)
        );
        assert_eq!(map_key(key(KeyCode::Enter), false), Some(Action::Submit));
        assert_eq!(map_key(ctrl_key('u'), false), Some(Action::InputClear));
    }

    #[test]
    fn uppercase_letters_are_plain_input() {
        let event = KeyEvent {
            code: KeyCode::Char('F'),
            modifiers: KeyModifiers::SHIFT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(event, false), Some(Action::InputChar('F')));
    }

    #[test]
    fn f1_toggles_help() {
        assert_eq!(map_key(key(KeyCode::F(1)), false), Some(Action::ToggleHelp));
        assert_eq!(map_key(key(KeyCode::F(1)), true), Some(Action::ToggleHelp));
    }

    #[test]
    fn help_overlay_swallows_typing() {
        assert_eq!(map_key(key(KeyCode::Char('a')), true), None);
        assert_eq!(map_key(key(KeyCode::Enter), true), None);
        assert_eq!(map_key(key(KeyCode::Up), true), Some(Action::HelpScrollUp));
        assert_eq!(
            map_key(key(KeyCode::Down), true),
            Some(Action::HelpScrollDown)
        );
    }

    #[test]
    fn esc_always_maps() {
        assert_eq!(map_key(key(KeyCode::Esc), false), Some(Action::Escape));
        assert_eq!(map_key(key(KeyCode::Esc), true), Some(Action::Escape));
    }

    #[test]
    fn unbound_keys() {
        assert_eq!(map_key(key(KeyCode::Tab), false), None);
        assert_eq!(map_key(ctrl_key('x'), false), None);
    }
}
