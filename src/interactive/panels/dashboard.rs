use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interactive::app::InteractiveApp;

pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let range = &app.date_range;
    let label_style = if range.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" 📅 ", Style::default().fg(Color::Cyan)),
            Span::styled(range.label(), label_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Press f to change the date filter",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Dashboard ")
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
