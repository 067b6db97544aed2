//! Sidebar navigation entry

use crate::modules::ModuleDescriptor;
use crate::themes::{ThemeTokens, palette};
use eframe::egui;
use std::time::Duration;

use super::StatusBadge;
use crate::gui::icons;

pub struct NavItem<'a> {
    module: &'static ModuleDescriptor,
    tokens: &'a ThemeTokens,
    active: bool,
    collapsed: bool,
    /// Drives the badge pulse on alert-style modules
    elapsed: Duration,
}

impl<'a> NavItem<'a> {
    pub fn new(module: &'static ModuleDescriptor, tokens: &'a ThemeTokens) -> Self {
        Self {
            module,
            tokens,
            active: false,
            collapsed: false,
            elapsed: Duration::ZERO,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Returns true when clicked
    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let tokens = self.tokens;
        let module = self.module;
        let fill = if self.active {
            module.color.from.to_egui_alpha(48)
        } else {
            egui::Color32::TRANSPARENT
        };
        let text_color = if self.active {
            tokens.text.primary.to_egui()
        } else {
            tokens.text.secondary.to_egui()
        };

        let response = egui::Frame::none()
            .fill(fill)
            .rounding(8.0)
            .inner_margin(egui::Margin::symmetric(10.0, 6.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(icons::module(module.icon))
                            .size(18.0)
                            .color(module.color.from.to_egui()),
                    );
                    if self.collapsed {
                        return;
                    }
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(module.title).strong().color(text_color));
                        ui.label(
                            egui::RichText::new(module.subtitle)
                                .size(10.0)
                                .color(tokens.text.muted.to_egui()),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some(badge) = module.badge_label() {
                            let pill = StatusBadge::count(&badge, palette::BADGE);
                            if self.active {
                                pill.show(ui);
                            } else {
                                pill.pulsing(self.elapsed).show(ui);
                            }
                        }
                    });
                });
            })
            .response;

        let response = response.interact(egui::Sense::click());
        let response = if self.collapsed {
            response.on_hover_text(format!("{} ({})", module.title, module.shortcut_label()))
        } else {
            response.on_hover_text(module.shortcut_label())
        };
        if response.hovered() && !self.active {
            ui.painter()
                .rect_stroke(response.rect, 8.0, egui::Stroke::new(1.0, tokens.border.to_egui()));
        }
        response.clicked()
    }
}
