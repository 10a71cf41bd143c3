//! KeyCanvas Application
//!
//! The native application shell providing windowing, rendering and the
//! bridge between egui input and the layout surface.

mod app;
mod error;
mod surface_view;
mod ui;

pub use app::{App, AppConfig};
pub use error::AppError;
pub use surface_view::{SurfaceConfig, SurfaceView};
pub use ui::{HELP_LINES, UiState, render_ui};
