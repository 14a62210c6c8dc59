//! Notification toast in the top-right corner

use crate::auth::Severity;
use crate::state::Notification;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 44;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    }
}

/// Render the toast over whatever is on screen
pub fn render_notification(frame: &mut Frame, notification: &Notification) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height: 3.min(area.height),
    };

    let color = severity_color(notification.severity);
    let content = Line::from(vec![
        Span::styled(
            format!("{} ", notification.icon()),
            Style::default().fg(color),
        ),
        Span::raw(notification.message.as_str()),
    ]);

    frame.render_widget(Clear, toast_area);
    let toast = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(toast, toast_area);
}
