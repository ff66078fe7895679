mod app_state;
mod modal;
mod modal_action;
mod screen_state;
mod tabs;

pub use app_state::*;
pub use modal::*;
pub use modal_action::*;
pub use screen_state::*;
pub use tabs::*;
