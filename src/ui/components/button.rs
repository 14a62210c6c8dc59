//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Spinner frames for a busy button
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Visual state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub is_selected: bool,
    /// Submission in flight; `frame` drives the spinner
    pub loading: Option<usize>,
    pub accent: Color,
}

/// Label shown on the button, swapped for a spinner while loading
pub fn button_label(content: &str, loading: Option<usize>) -> String {
    match loading {
        Some(frame) => format!("{} {content}", SPINNER[frame % SPINNER.len()]),
        None => content.to_string(),
    }
}

/// Render a generic button with border
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, state: ButtonState) {
    let border_style = if state.is_selected {
        Style::default().fg(state.accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if state.loading.is_some() {
        Style::default().fg(Color::Yellow)
    } else if state.is_selected {
        Style::default()
            .fg(state.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(button_label(content, state.loading))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_without_loading() {
        assert_eq!(button_label("Sign In", None), "Sign In");
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(button_label("GitHub", Some(0)), "◐ GitHub");
        assert_eq!(button_label("GitHub", Some(5)), "◓ GitHub");
    }
}
