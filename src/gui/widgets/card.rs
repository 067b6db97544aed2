//! Card Widget
//!
//! A card-style container with consistent styling, plus the KPI card drawn
//! on the overview.

use crate::animation::AnimationFrame;
use crate::enhance::MetricCard;
use crate::themes::{ThemeTokens, palette};
use eframe::egui;

/// Card widget for grouping related content
pub struct Card<'a> {
    title: Option<&'a str>,
    icon: Option<&'a str>,
    tokens: &'a ThemeTokens,
}

impl<'a> Card<'a> {
    /// Create a new card
    pub fn new(tokens: &'a ThemeTokens) -> Self {
        Self {
            title: None,
            icon: None,
            tokens,
        }
    }

    /// Set the card title
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the card icon
    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Show the card with content
    pub fn show<R>(self, ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
        crate::gui::theme::card_frame(self.tokens)
            .show(ui, |ui| {
                if let Some(title) = self.title {
                    ui.horizontal(|ui| {
                        if let Some(icon) = self.icon {
                            ui.label(
                                egui::RichText::new(icon)
                                    .size(16.0)
                                    .color(self.tokens.accent.from.to_egui()),
                            );
                        }
                        ui.label(
                            egui::RichText::new(title)
                                .strong()
                                .color(self.tokens.text.primary.to_egui()),
                        );
                    });
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);
                }

                add_contents(ui)
            })
            .inner
    }
}

/// KPI card: colored top edge, label, big value and change
pub fn metric_card(ui: &mut egui::Ui, metric: &MetricCard, tokens: &ThemeTokens, frame: AnimationFrame, width: f32) {
    let accent = metric.theme().map(|t| t.color()).unwrap_or(tokens.border);
    let change_color = if metric.is_positive() {
        palette::SUCCESS
    } else {
        palette::DANGER
    };

    ui.vertical(|ui| {
        ui.set_opacity(frame.opacity);
        ui.add_space(frame.offset_y);

        let response = crate::gui::theme::card_frame(tokens).show(ui, |ui| {
            ui.set_width(width);
            ui.label(
                egui::RichText::new(metric.display_label())
                    .size(13.0)
                    .color(tokens.text.secondary.to_egui()),
            );
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(&metric.value)
                    .size(28.0)
                    .strong()
                    .color(tokens.text.primary.to_egui()),
            );
            ui.label(
                egui::RichText::new(&metric.change)
                    .size(12.0)
                    .color(change_color.to_egui()),
            );
        });

        let rect = response.response.rect;
        ui.painter().rect_filled(
            egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), 4.0)),
            egui::Rounding {
                nw: 12.0,
                ne: 12.0,
                ..Default::default()
            },
            accent.to_egui(),
        );
    });
}
