use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{AppMode, InteractiveApp, Popup};
use super::layout::{app_layout, is_compact};
use super::{notifications, panels, popups};
use crate::nav::Route;

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let area = frame.size();
    let layout = app_layout(area, app.notifications.len());

    draw_header(frame, layout.header, app);
    panels::sidebar::draw(frame, layout.sidebar, app, is_compact(area));

    match app.location.route {
        Route::Dashboard => panels::dashboard::draw(frame, layout.main, app),
        Route::Login | Route::Root => draw_login(frame, layout.main),
        _ => panels::table::draw(frame, layout.main, app),
    }

    notifications::draw(frame, layout.notifications, app);
    draw_footer(frame, layout.footer, app);
    popups::draw_popup(frame, area, app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.location),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            match app.session.role() {
                Some(role) => role.to_string(),
                None => "anonymous".to_string(),
            },
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if let Some(action) = app.pending {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("⟳ {}", action.label()),
            Style::default().fg(Color::Yellow),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_login(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Not logged in",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Quit and run 'admin login --role <Admin|Colaborador>'."),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Login "));
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let hints = match (app.popup, app.mode) {
        (Some(Popup::Create { .. } | Popup::Update { .. }), _) => {
            "Tab: Next field  Enter: Save  Esc: Close"
        }
        (Some(Popup::ConfirmDelete(_)), _) => "y: Delete  n: Keep",
        (Some(Popup::DateRange), _) => "Enter: Filtrar  Ctrl+U: Remover  Esc: Close",
        (Some(Popup::Help), _) => "Any key: Close",
        (None, AppMode::Search) => "Type to filter  Enter: Keep  Esc: Clear",
        (None, AppMode::Normal) => match app.location.route {
            Route::Dashboard => "f: Date filter  Tab: Next page  ?: Help  q: Quit",
            Route::Login | Route::Root => "q: Quit",
            _ => "j/k: Move  /: Search  a: Add  e: Edit  x: Delete  n/p: Page  r: Reload  ?: Help  q: Quit",
        },
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
