//! Register form rendering

use super::action_row::draw_actions;
use super::field_renderer::draw_field;
use crate::app::App;
use crate::auth::{score_password_strength, FormId, StrengthLevel, MAX_STRENGTH};
use crate::state::Form;
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn strength_color(level: StrengthLevel) -> Color {
    match level {
        StrengthLevel::Weak => Color::Red,
        StrengthLevel::Fair => Color::Yellow,
        StrengthLevel::Good => Color::LightGreen,
        StrengthLevel::Strong => Color::Green,
    }
}

/// Meter line for `password`; a length hint while nothing is typed
pub fn strength_meter(password: &str, min_length: usize) -> Line<'static> {
    if password.is_empty() {
        return Line::from(Span::styled(
            format!(" At least {min_length} characters"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let score = score_password_strength(password);
    let level = StrengthLevel::from_score(score);
    let color = strength_color(level);
    let filled = "■".repeat(score as usize);
    let empty = "□".repeat((MAX_STRENGTH - score) as usize);
    Line::from(vec![
        Span::styled(" Strength ", Style::default().fg(Color::DarkGray)),
        Span::styled(filled, Style::default().fg(color)),
        Span::styled(empty, Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {}", level.label()), Style::default().fg(color)),
    ])
}

/// Draw the registration form inside `area`
pub fn draw_register(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.register_form;
    let terms_height = if form.show_terms { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Heading
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Password
            Constraint::Length(1),             // Strength meter
            Constraint::Length(3),             // Confirm
            Constraint::Length(terms_height),  // Terms
            Constraint::Length(BUTTON_HEIGHT), // Sign Up + providers
            Constraint::Min(0),
        ])
        .split(area);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Create Account",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    let active = form.active_field();
    draw_field(frame, chunks[1], &form.name, active == 0);
    draw_field(frame, chunks[2], &form.email, active == 1);
    draw_field(frame, chunks[3], &form.password, active == 2);
    let min_length = app.controller().settings().password_policy.min_length;
    frame.render_widget(
        Paragraph::new(strength_meter(form.password.as_text(), min_length)),
        chunks[4],
    );
    draw_field(frame, chunks[5], &form.confirm_password, active == 3);
    if form.show_terms {
        draw_field(frame, chunks[6], &form.accept_terms, active == 4);
    }

    draw_actions(
        frame,
        chunks[7],
        app,
        form,
        &FormId::Register,
        0..form.actions().len(),
        "Sign Up",
    );
}
