use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kanban_core::InputState;

/// Route a key to a single-line text field. Navigation keys are reported
/// back to the caller, everything else edits `input` in place.
pub fn handle_dialog_input(input: &mut InputState, key: KeyEvent) -> DialogAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => DialogAction::Cancel,
            _ => DialogAction::None,
        };
    }

    match key.code {
        KeyCode::Esc => DialogAction::Cancel,
        KeyCode::Enter | KeyCode::Tab => DialogAction::Confirm,
        KeyCode::BackTab => DialogAction::Back,
        KeyCode::Char(c) => {
            if !input.insert_char(c) {
                tracing::debug!("field is full, dropped {c:?}");
            }
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Cancel,
    /// Enter or Tab: move to the next field
    Confirm,
    /// Shift-Tab: move to the previous field
    Back,
}
