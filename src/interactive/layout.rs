use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminals narrower than this get the compact sidebar.
const COMPACT_WIDTH: u16 = 80;

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub main: Rect,
    pub notifications: Rect,
    pub footer: Rect,
}

/// Calculate the top-level layout
pub fn app_layout(area: Rect, notification_count: usize) -> AppLayout {
    let notif_height = if notification_count > 0 {
        (notification_count as u16).min(3) + 2
    } else {
        0
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(notif_height),
            Constraint::Length(3),
        ])
        .split(area);

    let sidebar_width = if is_compact(area) { 5 } else { 22 };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(20)])
        .split(rows[1]);

    AppLayout {
        header: rows[0],
        sidebar: columns[0],
        main: columns[1],
        notifications: rows[2],
        footer: rows[3],
    }
}

/// Whether the sidebar collapses to initials and icons
pub fn is_compact(area: Rect) -> bool {
    area.width < COMPACT_WIDTH
}

/// Center a popup of given width/height in the area
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_sidebar_on_narrow_terminals() {
        let narrow = app_layout(Rect::new(0, 0, 60, 30), 0);
        assert_eq!(narrow.sidebar.width, 5);

        let wide = app_layout(Rect::new(0, 0, 120, 30), 2);
        assert_eq!(wide.sidebar.width, 22);
        assert_eq!(wide.notifications.height, 4);
    }

    #[test]
    fn test_popup_fits_inside_area() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered_popup(60, 20, area);
        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 10);
    }
}
