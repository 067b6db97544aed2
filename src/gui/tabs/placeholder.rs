//! Placeholder panel for modules still under construction

use eframe::egui;
use std::time::Instant;

use crate::animation::Animation;
use crate::enhance::ChartPeriod;
use crate::gui::state::GuiState;
use crate::gui::theme::spacing;
use crate::gui::widgets::metric_card;

use super::overview::chart_card;

pub fn render(ui: &mut egui::Ui, state: &mut GuiState, now: Instant) {
    let tokens = state.tokens();
    let fade = Animation::fade_in().frame(state.panel_elapsed(now));
    let panel = state.dashboard.panel();
    let descriptor = panel.module.descriptor();

    ui.set_opacity(fade.opacity);
    ui.vertical_centered(|ui| {
        ui.add_space(spacing::LG * 2.0);
        ui.label(egui::RichText::new(panel.emoji).size(48.0));
        ui.add_space(spacing::SM);
        ui.heading(panel.heading);
        ui.add_space(spacing::XS);
        ui.label(
            egui::RichText::new(panel.description)
                .color(tokens.text.secondary.to_egui()),
        );
        ui.add_space(spacing::SM);
        ui.label(
            egui::RichText::new(format!("Shortcut: {}", descriptor.shortcut_label()))
                .small()
                .color(tokens.text.muted.to_egui()),
        );
    });
    ui.add_space(spacing::LG);

    let mut picked: Option<(String, ChartPeriod)> = None;
    for chart in panel.page.charts() {
        if let Some(period) = chart_card(ui, chart, &tokens) {
            picked = Some((chart.id.clone(), period));
        }
    }
    ui.horizontal_top(|ui| {
        for metric in panel.page.metrics() {
            metric_card(ui, metric, &tokens, fade, 160.0);
        }
    });

    if let Some((chart_id, period)) = picked {
        state.dashboard.select_chart_period(&chart_id, period, now);
    }
}
