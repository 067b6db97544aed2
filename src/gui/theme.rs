//! GUI Theme Integration
//!
//! Bridges the theme tokens with egui visuals.

use crate::themes::{ThemeMode, ThemeTokens};
use eframe::egui;

/// Apply the tokens of `mode` to the egui context
pub fn apply_theme(ctx: &egui::Context, mode: ThemeMode) {
    let tokens = mode.tokens();
    let accent = tokens.accent.from;

    let mut visuals = if mode.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.panel_fill = tokens.background.to_egui();
    visuals.window_fill = tokens.surface.to_egui();
    visuals.extreme_bg_color = tokens.surface.to_egui();
    visuals.window_stroke = egui::Stroke::new(1.0, tokens.border.to_egui());
    visuals.widgets.noninteractive.bg_fill = tokens.surface.to_egui();
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, tokens.border.to_egui());
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, tokens.text.primary.to_egui());

    // Buttons use weak_bg_fill, not bg_fill (bg_fill is for sliders/checkboxes)
    visuals.widgets.inactive.weak_bg_fill = tokens.surface.to_egui();
    visuals.widgets.inactive.bg_fill = tokens.surface_active.to_egui();
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, tokens.text.secondary.to_egui());

    visuals.widgets.hovered.weak_bg_fill = tokens.surface_hover.to_egui();
    visuals.widgets.hovered.bg_fill = tokens.surface_hover.to_egui();
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.5, tokens.text.primary.to_egui());

    visuals.widgets.active.weak_bg_fill = tokens.surface_active.to_egui();
    visuals.widgets.active.bg_fill = accent.darken(0.15).to_egui();
    visuals.widgets.active.fg_stroke = egui::Stroke::new(2.0, tokens.text.primary.to_egui());

    visuals.selection.bg_fill = accent.to_egui();
    visuals.selection.stroke = egui::Stroke::new(1.0, accent.lighten(0.4).to_egui());
    visuals.hyperlink_color = accent.to_egui();

    ctx.set_visuals(visuals);
}

/// Icon for the button that switches away from `mode`
pub fn toggle_icon(mode: ThemeMode) -> &'static str {
    if mode.is_dark() {
        super::icons::LIGHT
    } else {
        super::icons::DARK
    }
}

/// Consistent spacing constants for the grid system
pub mod spacing {
    /// Small spacing (4px)
    pub const XS: f32 = 4.0;
    /// Medium spacing (8px)
    pub const SM: f32 = 8.0;
    /// Standard spacing (16px)
    pub const MD: f32 = 16.0;
    /// Large spacing (24px)
    pub const LG: f32 = 24.0;
    /// Card padding
    pub const CARD_PADDING: f32 = 16.0;
    /// Card rounding
    pub const CARD_ROUNDING: f32 = 12.0;
}

/// Card-style container in the surface color
pub fn card_frame(tokens: &ThemeTokens) -> egui::Frame {
    egui::Frame::none()
        .fill(tokens.surface.to_egui())
        .stroke(egui::Stroke::new(1.0, tokens.border.to_egui()))
        .rounding(spacing::CARD_ROUNDING)
        .inner_margin(spacing::CARD_PADDING)
        .outer_margin(spacing::XS)
}
