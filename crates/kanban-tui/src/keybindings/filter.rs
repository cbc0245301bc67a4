use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct FilterProvider;

impl KeybindingProvider for FilterProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Filter",
            vec![
                Keybinding::new("Type", "query", "Narrow the board as you type"),
                Keybinding::new("Enter", "keep", "Keep the filter and return to the board"),
                Keybinding::new("Esc", "clear", "Clear the filter and return to the board"),
            ],
        )
    }
}
