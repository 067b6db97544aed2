//! miadash GUI Module
//!
//! egui/eframe front end over the headless dashboard core.

pub mod app;
pub mod icons;
pub mod overlay;
pub mod state;
pub mod tabs;
pub mod theme;
pub mod toast;
pub mod widgets;

// Re-export main types
pub use app::{MiaDashApp, run};
pub use state::GuiState;
