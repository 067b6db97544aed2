//! Bottom status bar

use crate::content::{ConnectionStatus, StatusInfo};
use crate::themes::{ThemeTokens, palette};
use chrono::{DateTime, Local};
use eframe::egui;

pub fn show(
    ui: &mut egui::Ui,
    info: &StatusInfo,
    last_update: &DateTime<Local>,
    connection: ConnectionStatus,
    tokens: &ThemeTokens,
) {
    let muted = tokens.text.muted.to_egui();
    let dot = if connection.is_connected() {
        palette::ONLINE
    } else {
        palette::DANGER
    };

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(info.product).size(11.0).color(muted));
        ui.separator();
        ui.label(egui::RichText::new(format!("Last update: {}", crate::format::format_datetime(last_update))).size(11.0).color(muted));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(crate::format::format_clock_seconds(&Local::now()))
                    .size(11.0)
                    .monospace()
                    .color(muted),
            );
            ui.separator();
            ui.label(egui::RichText::new(format!("Memory: {}%", info.memory_percent)).size(11.0).color(muted));
            ui.separator();
            ui.label(egui::RichText::new(format!("Latency: {}ms", info.latency_ms)).size(11.0).color(muted));
            ui.separator();
            ui.label(egui::RichText::new(format!("Server: {}", info.server)).size(11.0).color(muted));
            ui.separator();
            ui.label(egui::RichText::new(connection.long_label()).size(11.0).color(muted));
            ui.label(egui::RichText::new("●").size(11.0).color(dot.to_egui()));
        });
    });
}
