pub mod panel;
pub mod popup;

pub use panel::PanelConfig;
pub use popup::{centered_rect, render_form_popup, FormFieldView};
