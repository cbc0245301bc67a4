pub mod app;
pub mod components;
pub mod dialog;
pub mod events;
pub mod form;
pub mod keybindings;
pub mod theme;
pub mod ui;

pub use app::{App, SaveStatus, Screen};
pub use events::{Event, EventHandler};
pub use form::{FormAction, FormField, FormState};
