use crate::theme::{focused_border, highlight_text, label_text, normal_text, popup_bg};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rect of `percent_x` of the width and a fixed `height`, centered in `r`.
pub fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// One labelled input box inside a form popup.
pub struct FormFieldView<'a> {
    pub label: &'a str,
    pub text: &'a str,
    /// Cursor column in characters
    pub cursor: usize,
    pub focused: bool,
}

/// Draw a stacked set of input fields in a centered popup and place the
/// terminal cursor in the focused one.
pub fn render_form_popup(frame: &mut Frame, title: &str, fields: &[FormFieldView<'_>]) {
    // label + boxed input per field, plus border and margin
    let height = u16::try_from(fields.len() * 4 + 4).unwrap_or(u16::MAX);
    let area = centered_rect(60, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = Vec::with_capacity(fields.len() * 2 + 1);
    for _ in fields {
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(3));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(inner);

    for (i, field) in fields.iter().enumerate() {
        let label_area = chunks[i * 2];
        let input_area = chunks[i * 2 + 1];

        let label_style = if field.focused {
            highlight_text()
        } else {
            label_text()
        };
        frame.render_widget(Paragraph::new(field.label).style(label_style), label_area);

        let border = if field.focused {
            focused_border()
        } else {
            label_text()
        };
        let input = Paragraph::new(field.text)
            .style(normal_text())
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(input, input_area);

        if field.focused {
            let max_x = input_area.width.saturating_sub(2);
            let offset = u16::try_from(field.cursor).unwrap_or(u16::MAX).min(max_x);
            frame.set_cursor_position((input_area.x + 1 + offset, input_area.y + 1));
        }
    }
}
