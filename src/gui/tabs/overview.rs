//! Overview Tab
//!
//! KPI cards with the page-load stagger and the two daily charts with their
//! period toolbars.

use eframe::egui;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};
use std::time::Instant;

use crate::animation::staggered_slide_up;
use crate::content::chart_series;
use crate::enhance::{ChartKind, ChartPanel, ChartPeriod};
use crate::gui::icons;
use crate::gui::state::GuiState;
use crate::gui::theme::spacing;
use crate::gui::widgets::{Card, metric_card};
use crate::themes::ThemeTokens;

pub fn render(ui: &mut egui::Ui, state: &mut GuiState, now: Instant) {
    let tokens = state.tokens();
    let elapsed = state.panel_elapsed(now);
    let panel = state.dashboard.panel();

    ui.heading(format!("{} {}", panel.emoji, panel.heading));
    ui.label(egui::RichText::new(panel.description).color(tokens.text.secondary.to_egui()));
    ui.add_space(spacing::MD);

    // KPI row
    let metrics = panel.page.metrics();
    let count = metrics.len().max(1) as f32;
    let card_width = ((ui.available_width() - spacing::MD * count) / count - spacing::CARD_PADDING * 2.0).max(120.0);
    ui.horizontal_top(|ui| {
        for (i, metric) in metrics.iter().enumerate() {
            metric_card(ui, metric, &tokens, staggered_slide_up(i, elapsed), card_width);
        }
    });
    ui.add_space(spacing::MD);

    // Charts
    let mut picked: Option<(String, ChartPeriod)> = None;
    let half = (ui.available_width() - spacing::LG) / 2.0;
    ui.horizontal_top(|ui| {
        for chart in panel.page.charts() {
            ui.vertical(|ui| {
                ui.set_width(half);
                if let Some(period) = chart_card(ui, chart, &tokens) {
                    picked = Some((chart.id.clone(), period));
                }
            });
        }
    });

    if let Some((chart_id, period)) = picked {
        state.dashboard.select_chart_period(&chart_id, period, now);
    }

    ui.add_space(spacing::MD);
    quick_actions(ui, state, &tokens, now);
}

/// Draw one chart; returns the period clicked on its toolbar, if any
pub fn chart_card(ui: &mut egui::Ui, chart: &ChartPanel, tokens: &ThemeTokens) -> Option<ChartPeriod> {
    let mut picked = None;
    Card::new(tokens).title(&chart.title).icon(icons::CHART).show(ui, |ui| {
        if let Some(toolbar) = chart.toolbar() {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&toolbar.title)
                        .size(12.0)
                        .color(tokens.text.muted.to_egui()),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for period in ChartPeriod::ALL.iter().rev() {
                        if ui.selectable_label(toolbar.active == *period, period.label()).clicked()
                            && toolbar.active != *period
                        {
                            picked = Some(*period);
                        }
                    }
                });
            });
            ui.add_space(spacing::SM);
        }

        let series = chart_series(&chart.id, chart.period());
        let color = tokens.accent.from.to_egui();
        Plot::new(format!("plot_{}", chart.id))
            .height(180.0)
            .allow_scroll(false)
            .allow_drag(false)
            .allow_zoom(false)
            .show_axes([true, true])
            .show(ui, |plot_ui| match chart.kind {
                ChartKind::Line => {
                    plot_ui.line(Line::new(PlotPoints::from(series)).color(color).width(2.0).name(&chart.title));
                }
                ChartKind::Bar => {
                    let bars = series.iter().map(|[x, y]| Bar::new(*x, *y).width(0.7)).collect();
                    plot_ui.bar_chart(BarChart::new(bars).color(color).name(&chart.title));
                }
            });
    });
    picked
}

fn quick_actions(ui: &mut egui::Ui, state: &mut GuiState, tokens: &ThemeTokens, now: Instant) {
    Card::new(tokens).title("Quick actions").icon(icons::CHART_UP).show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            if ui.button(format!("{} Confirm batch", icons::OK)).clicked() {
                state.dashboard.show_success("Batch confirmed", "42 orders moved to picking", now);
            }
            if ui.button(format!("{} Report delay", icons::WARN)).clicked() {
                state.dashboard.show_warning("SLA at risk", "3 P1 orders close to their deadline", now);
            }
            if ui.button(format!("{} Simulate failure", icons::ERR)).clicked() {
                state.dashboard.show_error("Sync failed", "Warehouse scanner gateway is not responding", now);
            }
            if ui.button(format!("{} Refresh data", icons::INFO)).clicked() {
                state.dashboard.start_refresh(now);
            }
        });
    });
}
