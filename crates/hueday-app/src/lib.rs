//! Hueday Application
//!
//! The application shell: window, background rendering, the color overlay
//! and keyboard shortcuts, wired to a [`hueday_core::Session`].

mod app;
mod background;
mod platform;
mod shortcuts;
mod ui;

pub use app::{App, AppConfig};
pub use background::Fade;
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::{ColorView, UiAction, heading_size, render_ui};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
