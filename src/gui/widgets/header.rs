//! Header Bar Widget
//!
//! Active module title, sidebar search, connection pill, notification bell
//! and the theme and fullscreen buttons.

use crate::content::ConnectionStatus;
use crate::modules::ModuleDescriptor;
use crate::notify::FeedEntry;
use crate::themes::{ThemeTokens, palette};
use eframe::egui;

use super::StatusBadge;
use crate::gui::icons;

/// What the user did in the header this frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeaderResponse {
    pub search_changed: bool,
    pub theme_clicked: bool,
    pub fullscreen_clicked: bool,
}

/// Header bar widget
pub struct HeaderBar<'a> {
    module: &'static ModuleDescriptor,
    tokens: &'a ThemeTokens,
    connection: ConnectionStatus,
    feed: Vec<&'a FeedEntry>,
    bell_offset: f32,
    fullscreen: bool,
}

impl<'a> HeaderBar<'a> {
    pub fn new(module: &'static ModuleDescriptor, tokens: &'a ThemeTokens) -> Self {
        Self {
            module,
            tokens,
            connection: ConnectionStatus::default(),
            feed: Vec::new(),
            bell_offset: 0.0,
            fullscreen: false,
        }
    }

    pub fn connection(mut self, connection: ConnectionStatus) -> Self {
        self.connection = connection;
        self
    }

    /// Entries listed under the bell, oldest first
    pub fn feed(mut self, feed: impl Iterator<Item = &'a FeedEntry>) -> Self {
        self.feed = feed.collect();
        self
    }

    /// Vertical bell offset from the bounce animation
    pub fn bell_offset(mut self, offset: f32) -> Self {
        self.bell_offset = offset;
        self
    }

    pub fn fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Show the header bar
    pub fn show(self, ui: &mut egui::Ui, search: &mut String, feed_open: &mut bool) -> HeaderResponse {
        let mut out = HeaderResponse::default();
        let tokens = self.tokens;

        let frame = egui::Frame::none()
            .fill(tokens.surface.to_egui())
            .inner_margin(egui::Margin::symmetric(16.0, 8.0));

        frame.show(ui, |ui| {
            ui.horizontal(|ui| {
                // Left side: active module
                ui.label(
                    egui::RichText::new(icons::module(self.module.icon))
                        .size(24.0)
                        .color(self.module.color.from.to_egui()),
                );
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(self.module.title)
                            .strong()
                            .size(16.0)
                            .color(tokens.text.primary.to_egui()),
                    );
                    ui.label(
                        egui::RichText::new(self.module.subtitle)
                            .size(11.0)
                            .color(tokens.text.muted.to_egui()),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let fullscreen_icon = if self.fullscreen {
                        icons::EXIT_FULLSCREEN
                    } else {
                        icons::ENTER_FULLSCREEN
                    };
                    if ui
                        .button(egui::RichText::new(fullscreen_icon).size(16.0))
                        .on_hover_text("Fullscreen (F11)")
                        .clicked()
                    {
                        out.fullscreen_clicked = true;
                    }

                    let theme_icon = crate::gui::theme::toggle_icon(tokens.mode);
                    if ui
                        .button(egui::RichText::new(theme_icon).size(16.0))
                        .on_hover_text("Toggle theme")
                        .clicked()
                    {
                        out.theme_clicked = true;
                    }

                    self.show_bell(ui, feed_open);

                    let connection_color = if self.connection.is_connected() {
                        palette::ONLINE
                    } else {
                        palette::DANGER
                    };
                    let connection_icon = if self.connection.is_connected() {
                        icons::ONLINE
                    } else {
                        icons::OFFLINE
                    };
                    StatusBadge::new(
                        &format!("{} {}", connection_icon, self.connection.short_label()),
                        connection_color,
                    )
                    .show(ui)
                    .on_hover_text(self.connection.long_label());

                    ui.add_space(8.0);
                    let edit = ui.add(
                        egui::TextEdit::singleline(search)
                            .hint_text(format!("{} Search modules...", icons::SEARCH))
                            .desired_width(220.0),
                    );
                    out.search_changed = edit.changed();
                });
            });
        });

        out
    }

    fn show_bell(&self, ui: &mut egui::Ui, feed_open: &mut bool) {
        let tokens = self.tokens;
        let response = ui.add(
            egui::Button::new(egui::RichText::new(icons::ALERTS).size(16.0))
                .frame(false)
                .min_size(egui::vec2(32.0, 28.0)),
        );
        if response.clicked() {
            *feed_open = !*feed_open;
        }

        // Redraw the icon with the bounce offset and the count on top
        let painter = ui.painter();
        if self.bell_offset != 0.0 {
            painter.rect_filled(response.rect, 4.0, tokens.surface.to_egui());
            painter.text(
                response.rect.center() + egui::vec2(0.0, self.bell_offset),
                egui::Align2::CENTER_CENTER,
                icons::ALERTS,
                egui::FontId::proportional(16.0),
                tokens.text.primary.to_egui(),
            );
        }
        if !self.feed.is_empty() {
            let dot = response.rect.right_top() + egui::vec2(-6.0, 6.0);
            painter.circle_filled(dot, 7.0, palette::BADGE.to_egui());
            painter.text(
                dot,
                egui::Align2::CENTER_CENTER,
                self.feed.len().to_string(),
                egui::FontId::proportional(9.0),
                egui::Color32::WHITE,
            );
        }

        if !*feed_open {
            return;
        }
        let pos = egui::pos2(response.rect.right() - 300.0, response.rect.bottom() + 6.0);
        egui::Area::new(egui::Id::new("notification_feed"))
            .fixed_pos(pos)
            .order(egui::Order::Foreground)
            .show(ui.ctx(), |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_width(300.0);
                    ui.label(egui::RichText::new("Notifications").strong());
                    ui.separator();
                    if self.feed.is_empty() {
                        ui.label(egui::RichText::new("No notifications yet").weak());
                    }
                    for entry in self.feed.iter().rev() {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(icons::notification(entry.kind))
                                    .color(entry.kind.color().to_egui()),
                            );
                            ui.label(&entry.message);
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.label(egui::RichText::new(&entry.time).small().weak());
                            });
                        });
                    }
                });
            });
    }
}
