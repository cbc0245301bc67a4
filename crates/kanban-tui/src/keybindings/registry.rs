use super::{board::BoardProvider, filter::FilterProvider, form::FormProvider, KeybindingProvider};
use crate::app::{App, Screen};

pub struct KeybindingRegistry;

impl KeybindingRegistry {
    pub fn get_provider(app: &App) -> Box<dyn KeybindingProvider> {
        match &app.screen {
            // Help lists the bindings of the board underneath it
            Screen::Board | Screen::Help => Box::new(BoardProvider),
            Screen::Form(form) => Box::new(FormProvider::new(form.heading())),
            Screen::Filter(_) => Box::new(FilterProvider),
        }
    }
}
