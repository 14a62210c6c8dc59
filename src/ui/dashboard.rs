//! Dashboard shown after a successful sign-in

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the dashboard
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("You're in. Welcome to {}!", app.app_name),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match &app.state.session {
        Some(session) => {
            let method = session.provider.as_deref().unwrap_or("email");
            lines.push(Line::from(vec![
                Span::styled("Account   ", label),
                Span::raw(session.subject.clone()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Method    ", label),
                Span::raw(method.to_string()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Session   ", label),
                Span::raw(session.short_id()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Since     ", label),
                Span::raw(session.issued_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
            ]));
        }
        None => lines.push(Line::from(Span::styled("No active session", label))),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Ctrl+L to sign out",
        Style::default().fg(Color::Cyan),
    )));

    let width = 50.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let panel_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Dashboard ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(panel, panel_area);
}
