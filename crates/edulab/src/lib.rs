//! Terminal front end for the edulab lessons: lotto draws and quadratic graphs.
//!
//! Screens read page output from `edulab_core` and feed key presses back in as
//! page inputs. Everything renders with ratatui.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod modals;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use config::AppConfig;
pub use logging::init_logging;
