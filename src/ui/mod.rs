//! UI module for rendering the TUI

mod auth;
mod components;
mod dashboard;
mod forms;
mod layout;
mod splash;

use crate::app::App;
use crate::state::View;
use components::{render_notification, render_success_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let View::Splash = app.state.current_view {
        if let Some(splash_state) = &app.splash_state {
            splash::draw(frame, area, splash_state);
        }
        return;
    }

    let (header_area, main_area, status_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Auth => auth::draw(frame, main_area, app),
        View::Dashboard => dashboard::draw(frame, main_area, app),
        View::Splash => {}
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlays
    if let Some(message) = &app.state.success_modal {
        render_success_dialog(frame, message);
    }
    if let Some(notification) = &app.state.notification {
        render_notification(frame, notification);
    }
}
