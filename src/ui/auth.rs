//! Sign-in / sign-up screen with the sliding panel pair

use super::forms::{draw_login, draw_register};
use crate::app::App;
use crate::state::AuthView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const FORM_WIDTH: u16 = 56;
const FORM_HEIGHT: u16 = 26;
const INFO_WIDTH: u16 = 30;

/// Shift `rect` horizontally by `offset` columns, staying inside `bounds`
fn shift(rect: Rect, offset: i16, bounds: Rect) -> Rect {
    let max_x = bounds.x + bounds.width.saturating_sub(rect.width);
    let x = (rect.x as i32 + offset as i32).clamp(bounds.x as i32, max_x as i32);
    Rect { x: x as u16, ..rect }
}

/// Draw the auth screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let offset = app
        .state
        .transition
        .as_ref()
        .map(|t| t.offset(Instant::now()))
        .unwrap_or(0);

    let show_info = area.width >= FORM_WIDTH + INFO_WIDTH + 4;
    let total_width = if show_info {
        FORM_WIDTH + INFO_WIDTH
    } else {
        FORM_WIDTH.min(area.width)
    };
    let height = FORM_HEIGHT.min(area.height);
    let centered = Rect {
        x: area.x + area.width.saturating_sub(total_width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: total_width,
        height,
    };

    let (form_area, info_area) = if show_info {
        // Login keeps the form on the left; register mirrors it
        let constraints = match app.state.auth_view {
            AuthView::Login => [Constraint::Length(FORM_WIDTH), Constraint::Length(INFO_WIDTH)],
            AuthView::Register => [Constraint::Length(INFO_WIDTH), Constraint::Length(FORM_WIDTH)],
        };
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(centered);
        match app.state.auth_view {
            AuthView::Login => (chunks[0], Some(chunks[1])),
            AuthView::Register => (chunks[1], Some(chunks[0])),
        }
    } else {
        (centered, None)
    };

    let form_area = shift(form_area, offset, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", app.state.auth_view.title()));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    match app.state.auth_view {
        AuthView::Login => draw_login(frame, inner, app),
        AuthView::Register => draw_register(frame, inner, app),
    }

    if let Some(info_area) = info_area {
        draw_info_panel(frame, info_area, app);
    }
}

/// Greeting beside the form that points at the other panel
fn draw_info_panel(frame: &mut Frame, area: Rect, app: &App) {
    let (title, body, action) = match app.state.auth_view {
        AuthView::Login => (
            format!("Hello, welcome to {}!", app.app_name),
            "Don't have an account?",
            "Ctrl+T  Register",
        ),
        AuthView::Register => (
            "Welcome back!".to_string(),
            "Already have an account?",
            "Ctrl+T  Sign In",
        ),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(body),
        Line::from(""),
        Line::from(Span::styled(action, Style::default().fg(Color::Black).bg(Color::Cyan))),
    ];
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .style(Style::default().bg(Color::Indexed(54))),
        );
    frame.render_widget(panel, area);
}
