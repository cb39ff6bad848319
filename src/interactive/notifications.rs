use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interactive::app::InteractiveApp;

/// How long success and info messages stay up. Errors stay until dismissed.
const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.kind != NotificationKind::Error && self.created_at.elapsed() >= NOTIFICATION_TTL
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    if app.notifications.is_empty() || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .notifications
        .iter()
        .rev()
        .take(3)
        .map(|n| {
            let (icon, color) = match n.kind {
                NotificationKind::Success => ("✓", Color::Green),
                NotificationKind::Error => ("✗", Color::Red),
                NotificationKind::Info => ("ⓘ", Color::Blue),
            };
            let timer = match n.kind {
                NotificationKind::Error => "[c: dismiss]".to_string(),
                _ => {
                    let remaining = NOTIFICATION_TTL
                        .as_secs()
                        .saturating_sub(n.created_at.elapsed().as_secs());
                    format!("[{}s]", remaining)
                }
            };
            Line::from(vec![
                Span::styled(
                    format!(" {} ", icon),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(n.message.clone(), Style::default().fg(color)),
                Span::styled(format!("  {}", timer), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_do_not_expire() {
        let mut error = Notification::new(NotificationKind::Error, "boom");
        error.created_at = Instant::now() - Duration::from_secs(60);
        assert!(!error.is_expired());

        let mut info = Notification::new(NotificationKind::Info, "hello");
        info.created_at = Instant::now() - Duration::from_secs(60);
        assert!(info.is_expired());
    }
}
