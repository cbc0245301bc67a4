use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key pressed on the board screen to its action.
pub fn board_action(key: &KeyEvent) -> Option<KeybindingAction> {
    use KeybindingAction::*;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('h') | KeyCode::Left => FocusLeft,
        KeyCode::Char('l') | KeyCode::Right => FocusRight,
        KeyCode::Char('k') | KeyCode::Up => SelectUp,
        KeyCode::Char('j') | KeyCode::Down => SelectDown,
        KeyCode::Char('K') => MoveTaskUp,
        KeyCode::Char('J') => MoveTaskDown,
        KeyCode::Char('H') => MoveTaskLeft,
        KeyCode::Char('L') => MoveTaskRight,
        KeyCode::Char('o') => CreateTask,
        KeyCode::Char('i') => EditTask,
        KeyCode::Char('x') => DeleteTask,
        KeyCode::Char('u') => Undo,
        KeyCode::Char('/') => StartFilter,
        KeyCode::Esc => ClearFilter,
        KeyCode::Char('?') => ShowHelp,
        KeyCode::Char('q') => Quit,
        _ => return None,
    };
    Some(action)
}

pub struct BoardProvider;

impl KeybindingProvider for BoardProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Board",
            vec![
                Keybinding::new("h/l", "focus", "Focus previous/next column"),
                Keybinding::new("j/k", "select", "Select next/previous task"),
                Keybinding::new("H/L", "move", "Move task to previous/next column"),
                Keybinding::new("J/K", "reorder", "Move task down/up in its column"),
                Keybinding::new("o", "new", "Create task in focused column"),
                Keybinding::new("i", "edit", "Edit selected task"),
                Keybinding::new("x", "delete", "Delete selected task"),
                Keybinding::new("u", "undo", "Restore last deleted task"),
                Keybinding::new("/", "filter", "Filter tasks by title or description"),
                Keybinding::new("Esc", "clear", "Clear the filter"),
                Keybinding::new("?", "help", "Show all keybindings"),
                Keybinding::new("q", "quit", "Save and quit"),
            ],
        )
    }
}
