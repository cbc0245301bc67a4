use crate::theme::{focused_border, normal_text, unfocused_border};
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// Bordered pane whose border and title follow keyboard focus.
pub struct PanelConfig {
    pub title: String,
    pub title_style: Style,
    pub is_focused: bool,
}

impl PanelConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            title_style: normal_text(),
            is_focused: false,
        }
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn border_style(&self) -> Style {
        if self.is_focused {
            focused_border()
        } else {
            unfocused_border()
        }
    }

    pub fn title_line(&self) -> Line<'static> {
        let marker = if self.is_focused { "> " } else { "" };
        Line::from(vec![
            Span::styled(marker, focused_border()),
            Span::styled(self.title.clone(), self.title_style),
        ])
    }

    pub fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(self.title_line())
    }
}
