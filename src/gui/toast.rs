//! Toast rendering
//!
//! Draws the notification stack in the top-right corner. Entries slide in
//! from the right, slide back out once removed, and are dismissed on click.

use crate::animation::Animation;
use crate::notify::{Notification, NotificationCenter, NotificationKind, TRANSITION};
use crate::themes::ThemeTokens;
use eframe::egui;
use std::time::Instant;

const TOAST_WIDTH: f32 = 350.0;
const TOAST_HEIGHT: f32 = 68.0;
const MARGIN: f32 = 20.0;
const SPACING: f32 = 10.0;
/// Header height, so the stack starts below it
const TOP_OFFSET: f32 = 64.0;

/// Render visible toasts and dismiss the ones clicked this frame
pub fn show(ctx: &egui::Context, center: &mut NotificationCenter, tokens: &ThemeTokens, now: Instant) {
    let screen_rect = ctx.screen_rect();
    let mut clicked = Vec::new();

    for (i, toast) in center.visible().enumerate() {
        let frame = toast.frame(now, TOAST_WIDTH + MARGIN);
        let x = screen_rect.max.x - TOAST_WIDTH - MARGIN + frame.offset_x + shake_offset(toast, now);
        let y = screen_rect.min.y + TOP_OFFSET + (TOAST_HEIGHT + SPACING) * i as f32;

        let response = egui::Area::new(egui::Id::new(("toast", toast.id.get())))
            .fixed_pos(egui::pos2(x, y))
            .order(egui::Order::Tooltip)
            .interactable(!toast.is_leaving())
            .show(ctx, |ui| draw_toast(ui, toast, tokens, frame.alpha(), now))
            .inner;

        if response.clicked() {
            clicked.push(toast.id);
        }
    }

    for id in clicked {
        center.remove(id, now);
    }
}

/// Errors shake once their slide-in has settled
fn shake_offset(toast: &Notification, now: Instant) -> f32 {
    if toast.kind != NotificationKind::Error || toast.is_leaving() {
        return 0.0;
    }
    match now.saturating_duration_since(toast.created_at).checked_sub(TRANSITION) {
        Some(elapsed) => Animation::Shake.frame(elapsed).offset_x,
        None => 0.0,
    }
}

fn draw_toast(
    ui: &mut egui::Ui,
    toast: &Notification,
    tokens: &ThemeTokens,
    alpha: u8,
    now: Instant,
) -> egui::Response {
    let accent = toast.kind.color();

    let inner = egui::Frame::none()
        .fill(tokens.surface.to_egui_alpha(alpha))
        .stroke(egui::Stroke::new(1.0, tokens.border.to_egui_alpha(alpha)))
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(14.0, 10.0))
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(TOAST_WIDTH - 28.0, TOAST_HEIGHT - 20.0));
            ui.set_max_width(TOAST_WIDTH - 28.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(super::icons::notification(toast.kind))
                        .size(20.0)
                        .color(accent.to_egui_alpha(alpha)),
                );
                ui.add_space(8.0);

                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&toast.title)
                            .strong()
                            .color(tokens.text.primary.to_egui_alpha(alpha)),
                    );
                    ui.label(
                        egui::RichText::new(&toast.message)
                            .size(12.0)
                            .color(tokens.text.secondary.to_egui_alpha(alpha)),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.label(
                        egui::RichText::new(super::icons::CLOSE)
                            .size(12.0)
                            .color(tokens.text.muted.to_egui_alpha(alpha)),
                    );
                });
            });
        });

    let rect = inner.response.rect;

    // Accent strip on the left edge
    ui.painter().rect_filled(
        egui::Rect::from_min_max(rect.min, egui::pos2(rect.min.x + 4.0, rect.max.y)),
        egui::Rounding {
            nw: 8.0,
            sw: 8.0,
            ..Default::default()
        },
        accent.to_egui_alpha(alpha),
    );

    // Remaining display time along the bottom edge
    let progress = toast.remaining_fraction(now);
    ui.painter().rect_filled(
        egui::Rect::from_min_size(
            egui::pos2(rect.min.x + 4.0, rect.max.y - 3.0),
            egui::vec2((rect.width() - 4.0) * progress, 3.0),
        ),
        0.0,
        accent.to_egui_alpha(alpha / 2),
    );

    inner.response.interact(egui::Sense::click())
}
