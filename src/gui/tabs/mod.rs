//! Module content panels
//!
//! The overview has its own page; every other module shares the
//! placeholder layout.

pub mod overview;
pub mod placeholder;

use crate::gui::state::GuiState;
use crate::modules::ModuleId;
use eframe::egui;
use std::time::Instant;

/// Render the content panel of the active module
pub fn render(ui: &mut egui::Ui, state: &mut GuiState, now: Instant) {
    match state.dashboard.panel().module {
        ModuleId::Overview => overview::render(ui, state, now),
        _ => placeholder::render(ui, state, now),
    }
}
