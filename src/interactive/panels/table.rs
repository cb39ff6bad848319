use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row as TableRow, Table},
    Frame,
};

use crate::formatting::utils::truncate;
use crate::interactive::app::{AppMode, InteractiveApp};
use crate::table::Activity;

/// Search bar, the rows of the loaded page, and the pagination line.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let Some(table) = &app.table else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_search(frame, chunks[0], app);

    let columns = table.columns();
    let rows = app.rows();
    let busy = matches!(table.activity(), Activity::Busy(_)) || app.pending.is_some();

    let title = format!(" {} ({}) ", table.kind().title(), rows.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if busy {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Cyan)
        });

    if rows.is_empty() {
        let message = if busy {
            "Loading...".to_string()
        } else if app.search_query.is_empty() {
            format!("No {}s on this page", table.kind())
        } else {
            format!("No {}s match '{}'", table.kind(), app.search_query)
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, chunks[1]);
    } else {
        let inner_height = chunks[1].height.saturating_sub(3) as usize;
        let scroll_offset = if app.selected_index >= inner_height && inner_height > 0 {
            app.selected_index - inner_height + 1
        } else {
            0
        };

        let header = TableRow::new(columns.iter().map(|c| Cell::from(*c))).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let body: Vec<TableRow> = rows
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(inner_height.max(1))
            .map(|(i, row)| {
                let style = if i == app.selected_index {
                    Style::default()
                        .bg(Color::Rgb(30, 35, 50))
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                TableRow::new(row.cells.iter().map(|cell| Cell::from(truncate(cell, 40)))).style(style)
            })
            .collect();

        let widths: Vec<Constraint> = columns
            .iter()
            .enumerate()
            .map(|(i, _)| match i {
                0 => Constraint::Length(8),
                1 => Constraint::Min(16),
                _ => Constraint::Min(12),
            })
            .collect();

        let widget = Table::new(body, widths).header(header).block(block);
        frame.render_widget(widget, chunks[1]);
    }

    let pagination = table.pagination();
    let nav = Line::from(vec![
        Span::styled(
            if pagination.has_previous() { " ◀ p " } else { "     " },
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(pagination.label(), Style::default().fg(Color::White)),
        Span::styled(
            if pagination.has_next() { " n ▶" } else { "" },
            Style::default().fg(Color::Cyan),
        ),
    ]);
    frame.render_widget(Paragraph::new(nav), chunks[2]);
}

fn draw_search(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let searching = app.mode == AppMode::Search;
    let text = if app.search_query.is_empty() && !searching {
        Span::styled("Search by id or name ( / )", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            format!("{}{}", app.search_query, if searching { "▏" } else { "" }),
            Style::default().fg(Color::White),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if searching {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);
}
