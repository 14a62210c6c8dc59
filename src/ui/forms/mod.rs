//! Form rendering module
//!
//! - `field_renderer`: boxed inputs with validation feedback
//! - `action_row`: submit and social-provider buttons
//! - `login_form` / `register_form`: the two credential panels

mod action_row;
mod field_renderer;
mod login_form;
mod register_form;

pub use login_form::draw_login;
pub use register_form::draw_register;
