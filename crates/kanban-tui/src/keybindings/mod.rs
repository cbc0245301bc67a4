pub mod board;
pub mod filter;
pub mod form;
pub mod registry;

pub use board::board_action;
pub use registry::KeybindingRegistry;

/// Logical board commands, decoupled from the keys that trigger them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeybindingAction {
    FocusLeft,
    FocusRight,
    SelectUp,
    SelectDown,
    MoveTaskUp,
    MoveTaskDown,
    MoveTaskLeft,
    MoveTaskRight,
    CreateTask,
    EditTask,
    DeleteTask,
    Undo,
    StartFilter,
    ClearFilter,
    ShowHelp,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: String,
    pub short_description: String,
    /// Longer text for the help popup
    pub description: String,
}

impl Keybinding {
    pub fn new(
        key: impl Into<String>,
        short_description: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            short_description: short_description.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingContext {
    pub name: String,
    pub bindings: Vec<Keybinding>,
}

impl KeybindingContext {
    pub fn new(name: impl Into<String>, bindings: Vec<Keybinding>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }

    /// One-line summary for the footer, e.g. `o new · x delete`.
    pub fn footer(&self) -> String {
        self.bindings
            .iter()
            .map(|b| format!("{} {}", b.key, b.short_description))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

pub trait KeybindingProvider {
    fn get_context(&self) -> KeybindingContext;
}
