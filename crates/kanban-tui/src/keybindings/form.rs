use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct FormProvider {
    heading: String,
}

impl FormProvider {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
        }
    }
}

impl KeybindingProvider for FormProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            format!("{} - Form", self.heading),
            vec![
                Keybinding::new("Enter/Tab", "next", "Next field, commit on the last"),
                Keybinding::new("Shift-Tab", "prev", "Previous field"),
                Keybinding::new("Esc", "cancel", "Discard changes"),
            ],
        )
    }
}
