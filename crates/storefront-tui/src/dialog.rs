use crate::input::InputState;
use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Cancel,
    Confirm,
}

/// Route a key press into a text dialog. Empty input may always be confirmed,
/// since an empty search or filter means "clear it".
pub fn handle_dialog_input(input: &mut InputState, key_code: KeyCode) -> DialogAction {
    match key_code {
        KeyCode::Esc => DialogAction::Cancel,
        KeyCode::Enter => DialogAction::Confirm,
        KeyCode::Char(c) => {
            input.insert_char(c);
            DialogAction::None
        }
        KeyCode::Backspace => {
            input.backspace();
            DialogAction::None
        }
        KeyCode::Delete => {
            input.delete();
            DialogAction::None
        }
        KeyCode::Left => {
            input.move_left();
            DialogAction::None
        }
        KeyCode::Right => {
            input.move_right();
            DialogAction::None
        }
        KeyCode::Home => {
            input.move_home();
            DialogAction::None
        }
        KeyCode::End => {
            input.move_end();
            DialogAction::None
        }
        _ => DialogAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_then_confirm() {
        let mut input = InputState::new();
        assert_eq!(handle_dialog_input(&mut input, KeyCode::Char('4')), DialogAction::None);
        assert_eq!(handle_dialog_input(&mut input, KeyCode::Char('0')), DialogAction::None);
        assert_eq!(handle_dialog_input(&mut input, KeyCode::Backspace), DialogAction::None);
        assert_eq!(input.as_str(), "4");
        assert_eq!(handle_dialog_input(&mut input, KeyCode::Enter), DialogAction::Confirm);
    }

    #[test]
    fn test_empty_confirm_allowed() {
        let mut input = InputState::new();
        assert_eq!(handle_dialog_input(&mut input, KeyCode::Enter), DialogAction::Confirm);
        assert_eq!(handle_dialog_input(&mut input, KeyCode::Esc), DialogAction::Cancel);
    }
}
