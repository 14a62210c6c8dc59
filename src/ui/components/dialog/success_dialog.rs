//! Success dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the post-submission success dialog
pub fn render_success_dialog(frame: &mut Frame, message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Redirecting to your dashboard. Press "),
        Span::styled("Enter", key_style),
        Span::raw(" to close"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "✓ Success",
            title_color: Color::Green,
            border_color: Color::Green,
            message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
