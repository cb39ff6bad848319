use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::InteractiveApp;
use crate::interactive::layout::centered_popup;

/// Draw the date range input: `from..to` in ISO dates.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width: u16 = 60;
    let height: u16 = 6;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.date_range.label()))
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let input_line = if app.date_input.is_empty() {
        Line::from(Span::styled(
            "yyyy-mm-dd..yyyy-mm-dd",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled(app.date_input.clone(), Style::default().fg(Color::White)),
            Span::styled(
                " ",
                Style::default().bg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ])
    };
    frame.render_widget(
        Paragraph::new(input_line),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let hints = Paragraph::new(Line::from(Span::styled(
        "Enter: Filtrar  Ctrl+U: Remover  Esc: Cancel",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hints, hints_area);
}
