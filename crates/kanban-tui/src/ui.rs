use crate::app::{App, SaveStatus, Screen};
use crate::components::{centered_rect, render_form_popup, FormFieldView, PanelConfig};
use crate::form::{FormField, FormState};
use crate::keybindings::KeybindingRegistry;
use crate::theme::{
    error_text, focused_border, highlight_text, label_text, normal_text, popup_bg, selected_item,
    status_title,
};
use kanban_domain::{Board, TaskStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(app: &App, frame: &mut Frame) {
    if app.viewport.is_none() {
        frame.render_widget(Paragraph::new("loading..."), frame.area());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_columns(app, frame, chunks[0]);
    render_status_line(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);

    match &app.screen {
        Screen::Form(form) => render_form(form, frame),
        Screen::Help => render_help_popup(app, frame),
        Screen::Board | Screen::Filter(_) => {}
    }
}

fn render_columns(app: &App, frame: &mut Frame, area: Rect) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let board_focused = matches!(app.screen, Screen::Board | Screen::Filter(_));
    for (status, pane) in TaskStatus::ALL.into_iter().zip(panes.iter()) {
        let focused = board_focused && app.board.focused() == status;
        render_column(&app.board, status, focused, frame, *pane);
    }
}

/// Draw the tasks of `status` that pass the board filter.
fn render_column(board: &Board, status: TaskStatus, focused: bool, frame: &mut Frame, area: Rect) {
    let column = board.column(status);
    let visible = board.visible_indices(status);
    let title = match board.filter() {
        Some(_) => format!("{} ({}/{})", status.label(), visible.len(), column.len()),
        None => format!("{} ({})", status.label(), column.len()),
    };
    let panel = PanelConfig::new(title)
        .title_style(status_title(status))
        .focused(focused);

    let items: Vec<ListItem> = visible
        .iter()
        .map(|idx| &column.items()[*idx])
        .map(|task| {
            let mut lines = vec![Line::from(Span::styled(task.title.clone(), normal_text()))];
            if !task.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", task.description),
                    label_text(),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(panel.block())
        .highlight_style(selected_item(focused));

    let mut state = ListState::default();
    state.select(board.visible_selection(status));
    frame.render_stateful_widget(list, area, &mut state);
}

/// The filter prompt while typing one, otherwise the active filter and the
/// last save result.
fn render_status_line(app: &App, frame: &mut Frame, area: Rect) {
    if let Screen::Filter(input) = &app.screen {
        let line = Line::from(vec![
            Span::styled("/", highlight_text()),
            Span::styled(input.as_str().to_string(), normal_text()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        let offset = u16::try_from(input.cursor_column()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(offset);
        frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
        return;
    }

    let mut spans = Vec::new();
    if let Some(query) = app.board.filter() {
        spans.push(Span::styled(format!("filter: {query}  "), highlight_text()));
    }
    spans.push(match &app.last_save {
        None => Span::styled("not saved yet", label_text()),
        Some(SaveStatus::Saved(metadata)) => Span::styled(
            format!(
                "saved {} tasks at {}",
                metadata.task_count,
                metadata.saved_at.format("%H:%M:%S")
            ),
            label_text(),
        ),
        Some(SaveStatus::Failed(reason)) => {
            Span::styled(format!("save failed: {reason}"), error_text())
        }
    });
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let context = KeybindingRegistry::get_provider(app).get_context();
    frame.render_widget(Paragraph::new(context.footer()).style(label_text()), area);
}

fn render_help_popup(app: &App, frame: &mut Frame) {
    let context = KeybindingRegistry::get_provider(app).get_context();
    let height = u16::try_from(context.bindings.len() + 4).unwrap_or(u16::MAX);
    let area = centered_rect(70, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!("Help - {}", context.name))
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());

    let key_width = context
        .bindings
        .iter()
        .map(|b| b.key.chars().count())
        .max()
        .unwrap_or(0);
    let mut lines: Vec<Line> = context
        .bindings
        .iter()
        .map(|binding| {
            Line::from(vec![
                Span::styled(format!(" {:<key_width$}  ", binding.key), highlight_text()),
                Span::styled(binding.description.clone(), normal_text()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Esc or ? to close", label_text())));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_form(form: &FormState, frame: &mut Frame) {
    let fields = [
        FormFieldView {
            label: "Title",
            text: form.title().as_str(),
            cursor: form.title().cursor_column(),
            focused: form.field() == FormField::Title,
        },
        FormFieldView {
            label: "Description",
            text: form.description().as_str(),
            cursor: form.description().cursor_column(),
            focused: form.field() == FormField::Description,
        },
    ];
    render_form_popup(frame, &form.heading(), &fields);
}
