//! Field rendering utilities for forms

use crate::state::{FieldStatus, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn border_color(field: &FormField, is_active: bool) -> Color {
    match (&field.status, is_active) {
        (FieldStatus::Error(_), _) => Color::Red,
        (_, true) => Color::Cyan,
        (FieldStatus::Valid, false) => Color::Green,
        (FieldStatus::Unchecked, false) => Color::DarkGray,
    }
}

/// Draw a boxed input; validation errors go on the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let color = border_color(field, is_active);
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let content = if field.is_checkbox() {
        Line::from(vec![
            Span::styled(field.display_value(), Style::default().fg(color)),
            Span::styled(format!(" {}", field.label), text_style),
        ])
    } else {
        let cursor = if is_active { "▌" } else { "" };
        Line::from(vec![
            Span::styled(field.display_value(), text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    if !field.is_checkbox() {
        block = block.title(format!(" {} ", field.label));
    }
    match &field.status {
        FieldStatus::Error(message) => {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {message} "),
                Style::default().fg(Color::Red),
            )));
        }
        FieldStatus::Valid => {
            block = block.title_bottom(Line::from(Span::styled(
                " ✓ ",
                Style::default().fg(Color::Green),
            )));
        }
        FieldStatus::Unchecked => {}
    }

    frame.render_widget(Paragraph::new(content).block(block), area);
}
