//! Layout components (header, status bar)

use crate::app::App;
use crate::auth::SubmissionState;
use crate::state::{AuthView, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title line
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let section = match app.state.current_view {
        View::Splash => "",
        View::Auth => app.state.auth_view.title(),
        View::Dashboard => "Dashboard",
    };
    let header = Line::from(vec![
        Span::styled(
            format!(" ♪ {} ", app.app_name),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("· {section}"), Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Pending submission indicator
    if app.state.loading.is_empty() {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
    } else {
        spans.push(Span::styled(" ◌ ", Style::default().fg(Color::Yellow)));
    }

    let hints = get_view_hints(
        app.state.current_view,
        app.state.auth_view,
        app.state.register_form.show_terms,
    );
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let View::Auth = app.state.current_view {
        let form = app.state.active_form_id();
        if let SubmissionState::Failed { message } = app.controller().state(&form) {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("last attempt: {message}"),
                Style::default().fg(Color::Red),
            ));
        }
    }

    if let Some(session) = &app.state.session {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("👤 {}", session.subject),
            Style::default().fg(Color::Blue),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        y: area.y,
        width: quit_width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View, auth_view: AuthView, show_terms: bool) -> &'static str {
    match (view, auth_view) {
        (View::Splash, _) => "Press any key to skip",
        (View::Auth, AuthView::Login) => {
            "Tab:next  ←/→:button  Enter:submit  ^T:create account"
        }
        (View::Auth, AuthView::Register) if show_terms => {
            "Tab:next  Space:terms  Enter:submit  ^T:sign in instead"
        }
        (View::Auth, AuthView::Register) => {
            "Tab:next  ←/→:button  Enter:submit  ^T:sign in instead"
        }
        (View::Dashboard, _) => "^L:sign out  q:quit",
    }
}
