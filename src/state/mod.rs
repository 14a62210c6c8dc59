//! Application state module

mod app_state;
mod forms;
mod notification;
mod splash_state;
mod transition;

pub use app_state::*;
pub use forms::*;
pub use notification::*;
pub use splash_state::*;
pub use transition::*;
