use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::interactive::app::InteractiveApp;

/// Role links on top, then the footer actions. When compact only the
/// first letter of each entry is shown.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp, compact: bool) {
    let Some(sidebar) = &app.sidebar else {
        frame.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", sidebar.title(compact)),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::DarkGray));

    let shorten = |label: &str| -> String {
        if compact {
            label.chars().next().map(String::from).unwrap_or_default()
        } else {
            label.to_string()
        }
    };

    let mut items: Vec<ListItem> = sidebar
        .links
        .iter()
        .map(|link| {
            let active = link.route == app.location.route;
            let style = if active {
                Style::default()
                    .bg(Color::Rgb(30, 35, 50))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if active && !compact { "► " } else { "" };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", marker, shorten(link.label)),
                style,
            )))
        })
        .collect();

    // Push the footer actions to the bottom of the panel.
    let inner_height = area.height.saturating_sub(2) as usize;
    let footer = sidebar.footer();
    let filler = inner_height.saturating_sub(items.len() + footer.len());
    items.extend((0..filler).map(|_| ListItem::new("")));

    items.extend(footer.iter().map(|action| {
        ListItem::new(Line::from(Span::styled(
            shorten(action.label()),
            Style::default().fg(Color::DarkGray),
        )))
    }));

    frame.render_widget(List::new(items).block(block), area);
}
