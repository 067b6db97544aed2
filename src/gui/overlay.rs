//! Loading overlay
//!
//! Full-window dimmer with a spinner and optional message. While shown it
//! swallows pointer input for everything beneath it.

use crate::animation::Animation;
use crate::loader::LoadingOverlay;
use crate::themes::{ThemeTokens, palette};
use eframe::egui;
use std::time::Instant;

const SPINNER_RADIUS: f32 = 24.0;
const SPINNER_WIDTH: f32 = 4.0;
/// Portion of the circle covered by the colored arc
const ARC_SPAN: f32 = std::f32::consts::FRAC_PI_2;

pub fn show(ctx: &egui::Context, overlay: &LoadingOverlay, tokens: &ThemeTokens, now: Instant) {
    let Some(since) = overlay.shown_since() else {
        return;
    };
    let screen_rect = ctx.screen_rect();
    let rotation = Animation::Spin.frame(now.saturating_duration_since(since)).rotation;

    egui::Area::new(egui::Id::new("loading_overlay"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            // Block clicks to the panels below
            ui.allocate_rect(screen_rect, egui::Sense::click_and_drag());
            let painter = ui.painter();
            painter.rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(128));

            let message = overlay.message();
            let box_height = if message.is_some() { 140.0 } else { 100.0 };
            let card = egui::Rect::from_center_size(screen_rect.center(), egui::vec2(220.0, box_height));
            painter.rect_filled(card, 12.0, tokens.surface.to_egui());

            let center = egui::pos2(card.center().x, card.min.y + 20.0 + SPINNER_RADIUS);
            painter.circle_stroke(
                center,
                SPINNER_RADIUS,
                egui::Stroke::new(SPINNER_WIDTH, palette::SPINNER_TRACK.to_egui()),
            );
            painter.add(egui::Shape::line(
                arc_points(center, rotation),
                egui::Stroke::new(SPINNER_WIDTH, palette::PRIMARY.to_egui()),
            ));

            if let Some(message) = message {
                painter.text(
                    egui::pos2(card.center().x, card.max.y - 28.0),
                    egui::Align2::CENTER_CENTER,
                    message,
                    egui::FontId::proportional(14.0),
                    tokens.text.primary.to_egui(),
                );
            }
        });
}

fn arc_points(center: egui::Pos2, rotation: f32) -> Vec<egui::Pos2> {
    const SEGMENTS: usize = 16;
    (0..=SEGMENTS)
        .map(|i| {
            let angle = rotation + ARC_SPAN * i as f32 / SEGMENTS as f32;
            center + SPINNER_RADIUS * egui::vec2(angle.cos(), angle.sin())
        })
        .collect()
}
