use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::interactive::app::InteractiveApp;
use crate::interactive::layout::centered_popup;

/// Draw the add or edit form for the current table. The create form also
/// shows the last error the server returned for it.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp, field: usize, creating: bool) {
    let Some(table) = &app.table else {
        return;
    };

    let (title, fields, error) = if creating {
        (
            format!(" New {} ", table.kind()),
            table.create_fields(),
            table.create_error(),
        )
    } else {
        let id = table.selected_id().map(|id| format!(" #{}", id)).unwrap_or_default();
        (format!(" Edit {}{} ", table.kind(), id), table.update_fields(), None)
    };

    let width: u16 = 60;
    let height: u16 = (fields.len() as u16) * 2 + if error.is_some() { 6 } else { 4 };
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let label_style = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    for (index, form_field) in fields.iter().enumerate() {
        let active = index == field;
        lines.push(Line::from(Span::styled(
            form_field.label,
            if active {
                label_style.fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                label_style
            },
        )));

        let mut value = vec![Span::styled(
            form_field.value.clone(),
            Style::default().fg(Color::White),
        )];
        if active {
            value.push(Span::styled(
                " ",
                Style::default().bg(Color::White).add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(value));
    }

    if let Some(message) = error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red),
        )));
    }

    let busy = app.pending.is_some();
    let can_submit = !creating || table.can_submit_create();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        if busy {
            "Aguarde..."
        } else if can_submit {
            "Enter: Save  Tab: Next field  Esc: Close"
        } else {
            "Name is required  Esc: Close"
        },
        Style::default().fg(if busy { Color::Yellow } else { Color::DarkGray }),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
