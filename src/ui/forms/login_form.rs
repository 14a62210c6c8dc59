//! Login form rendering

use super::action_row::draw_actions;
use super::field_renderer::draw_field;
use crate::app::App;
use crate::auth::FormId;
use crate::gateway::FORCED_FAILURE_EMAIL;
use crate::state::Form;
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the sign-in form inside `area`
pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.login_form;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Heading
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Password
            Constraint::Length(BUTTON_HEIGHT), // Sign In / Forgot Password
            Constraint::Length(1),             // Divider
            Constraint::Length(BUTTON_HEIGHT), // Social providers
            Constraint::Min(0),
            Constraint::Length(1), // Demo hint
        ])
        .split(area);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Welcome Back",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    draw_field(frame, chunks[1], &form.email, form.active_field() == 0);
    draw_field(frame, chunks[2], &form.password, form.active_field() == 1);

    draw_actions(frame, chunks[3], app, form, &FormId::Login, 0..2, "Sign In");
    let divider = Paragraph::new(Span::styled(
        "or continue with",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(divider, chunks[4]);
    draw_actions(frame, chunks[5], app, form, &FormId::Login, 2..5, "Sign In");

    let hint = Paragraph::new(Span::styled(
        format!("demo: {FORCED_FAILURE_EMAIL} always fails"),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[7]);
}
