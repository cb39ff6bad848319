use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::InteractiveApp;
use crate::interactive::layout::centered_popup;

const NAVIGATION: &[(&str, &str)] = &[
    ("j/k", "Move up/down"),
    ("/", "Search"),
    ("n/p", "Next/previous page"),
    ("r", "Reload"),
    ("Tab", "Next page in sidebar"),
    ("f", "Date filter"),
];

const ACTIONS: &[(&str, &str)] = &[
    ("a", "Add"),
    ("e", "Edit"),
    ("x", "Delete"),
    ("s", "Configurações"),
    ("L", "Sair"),
    ("q", "Quit"),
];

/// Draw the keyboard shortcuts overlay.
pub fn draw(frame: &mut Frame, area: Rect, _app: &InteractiveApp) {
    let width: u16 = 56;
    let height: u16 = (NAVIGATION.len().max(ACTIONS.len()) as u16) + 6;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<26}", "Navigation"), header_style),
            Span::styled("Actions", header_style),
        ]),
        Line::from(Span::styled(
            format!("{:<26}{}", "─".repeat(10), "─".repeat(7)),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    for i in 0..NAVIGATION.len().max(ACTIONS.len()) {
        let mut spans = Vec::new();
        match NAVIGATION.get(i) {
            Some((key, desc)) => {
                spans.push(Span::styled(format!("{:<5}", key), key_style));
                spans.push(Span::styled(format!("{:<21}", desc), desc_style));
            }
            None => spans.push(Span::raw(format!("{:<26}", ""))),
        }
        if let Some((key, desc)) = ACTIONS.get(i) {
            spans.push(Span::styled(format!("{:<3}", key), key_style));
            spans.push(Span::styled(*desc, desc_style));
        }
        lines.push(Line::from(spans));
    }

    let content_area = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    );
    frame.render_widget(Paragraph::new(lines), content_area);

    let footer_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let footer = Paragraph::new(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, footer_area);
}
