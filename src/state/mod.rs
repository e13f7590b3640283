//! Application state module

mod app_state;
mod forms;
mod modal;
mod popup;

pub use app_state::*;
pub use forms::*;
pub use popup::*;
