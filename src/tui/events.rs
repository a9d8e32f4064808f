use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    ClearSearch,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Select,
    CopyLink,
    ToggleDropdown,
    UpdateSearch(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::ClearSearch,

        // Navigation (Vim/Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,

        (KeyCode::Enter, _) => Action::Select,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyLink,
        (KeyCode::Tab, _) => Action::ToggleDropdown,

        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::UpdateSearch(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Action {
        key_to_action(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_and_clear() {
        assert_eq!(key(KeyCode::Char('c'), KeyModifiers::CONTROL), Action::Quit);
        assert_eq!(key(KeyCode::Esc, KeyModifiers::NONE), Action::ClearSearch);
    }

    #[test]
    fn test_navigation() {
        assert_eq!(key(KeyCode::Char('p'), KeyModifiers::CONTROL), Action::MoveUp);
        assert_eq!(key(KeyCode::Char('n'), KeyModifiers::CONTROL), Action::MoveDown);
        assert_eq!(key(KeyCode::Up, KeyModifiers::NONE), Action::MoveUp);
        assert_eq!(key(KeyCode::Down, KeyModifiers::NONE), Action::MoveDown);
        assert_eq!(key(KeyCode::PageUp, KeyModifiers::NONE), Action::PageUp);
        assert_eq!(key(KeyCode::PageDown, KeyModifiers::NONE), Action::PageDown);
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(key(KeyCode::Enter, KeyModifiers::NONE), Action::Select);
        assert_eq!(key(KeyCode::Char('y'), KeyModifiers::CONTROL), Action::CopyLink);
        assert_eq!(key(KeyCode::Tab, KeyModifiers::NONE), Action::ToggleDropdown);
    }

    #[test]
    fn test_search_input() {
        assert_eq!(key(KeyCode::Char('đ'), KeyModifiers::NONE), Action::UpdateSearch('đ'));
        assert_eq!(key(KeyCode::Char('A'), KeyModifiers::SHIFT), Action::UpdateSearch('A'));
        assert_eq!(key(KeyCode::Backspace, KeyModifiers::NONE), Action::DeleteChar);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(key(KeyCode::F(1), KeyModifiers::NONE), Action::None);
    }
}
