//! Reusable UI components

mod button;
mod dialog;
mod notification;

pub use button::{render_button, ButtonState, BUTTON_HEIGHT};
pub use dialog::render_success_dialog;
pub use notification::render_notification;
