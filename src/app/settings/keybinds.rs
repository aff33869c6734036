// Key bindings for the browser.
//
// The single-letter keys are the classic home-row layout (`s`/`d` to move,
// `a` up a level, `f` to the previous directory, `e` to exit); arrows and
// the usual quit keys work as well.

use crate::app::types::Command;
use crate::input::{KeyCode, KeyEvent, KeyModifiers};

pub fn is_quit(ev: &KeyEvent) -> bool {
    match ev.code {
        KeyCode::Char('c') if ev.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Char('e') | KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    }
}

pub fn is_up(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('s') | KeyCode::Up)
}

pub fn is_down(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('d') | KeyCode::Down)
}

pub fn is_back(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('a') | KeyCode::Left | KeyCode::Backspace)
}

pub fn is_previous(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('f'))
}

pub fn is_enter(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Right)
}

/// Map a key press to a browser command. Unbound keys yield `None`.
pub fn command_for(ev: &KeyEvent) -> Option<Command> {
    let code = &ev.code;
    if is_quit(ev) {
        Some(Command::Exit)
    } else if is_up(code) {
        Some(Command::MoveUp)
    } else if is_down(code) {
        Some(Command::MoveDown)
    } else if is_back(code) {
        Some(Command::Ascend)
    } else if is_previous(code) {
        Some(Command::JumpToPrevious)
    } else if is_enter(code) {
        Some(Command::Confirm)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn classic_letters_map_to_commands() {
        assert_eq!(command_for(&key(KeyCode::Char('e'))), Some(Command::Exit));
        assert_eq!(command_for(&key(KeyCode::Char('s'))), Some(Command::MoveUp));
        assert_eq!(command_for(&key(KeyCode::Char('d'))), Some(Command::MoveDown));
        assert_eq!(command_for(&key(KeyCode::Char('a'))), Some(Command::Ascend));
        assert_eq!(command_for(&key(KeyCode::Char('f'))), Some(Command::JumpToPrevious));
        assert_eq!(command_for(&key(KeyCode::Enter)), Some(Command::Confirm));
    }

    #[test]
    fn arrows_and_ctrl_c() {
        assert_eq!(command_for(&key(KeyCode::Up)), Some(Command::MoveUp));
        assert_eq!(command_for(&key(KeyCode::Down)), Some(Command::MoveDown));
        assert_eq!(command_for(&key(KeyCode::Backspace)), Some(Command::Ascend));
        assert_eq!(
            command_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Exit)
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(command_for(&key(KeyCode::Char('x'))), None);
        assert_eq!(command_for(&key(KeyCode::Char('c'))), None);
        assert_eq!(command_for(&key(KeyCode::Tab)), None);
    }
}
