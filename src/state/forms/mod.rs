//! Form domain layer
//!
//! Type-safe form handling for the login and register panels.

mod field;
mod form_state;

pub use field::{FieldStatus, FormField};
pub use form_state::{Form, FormAction, LoginForm, RegisterForm, SocialProvider};
