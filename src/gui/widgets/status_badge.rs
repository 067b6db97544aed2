//! Status Badge Widget
//!
//! Small pills: module count badges in the sidebar and the connection
//! indicator in the header.

use crate::animation::Animation;
use crate::themes::Color;
use eframe::egui;
use std::time::Duration;

/// A small rounded pill
pub struct StatusBadge<'a> {
    text: &'a str,
    color: Color,
    solid: bool,
    pulse: Option<Duration>,
}

impl<'a> StatusBadge<'a> {
    /// Tinted pill with colored text
    pub fn new(text: &'a str, color: Color) -> Self {
        Self {
            text,
            color,
            solid: false,
            pulse: None,
        }
    }

    /// Filled pill with white text, as used for counts
    pub fn count(text: &'a str, color: Color) -> Self {
        Self {
            solid: true,
            ..Self::new(text, color)
        }
    }

    /// Scale with the pulse animation, `elapsed` being the time since start
    pub fn pulsing(mut self, elapsed: Duration) -> Self {
        self.pulse = Some(elapsed);
        self
    }

    /// Show the badge
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let (bg_color, fg_color) = if self.solid {
            (self.color.to_egui(), egui::Color32::WHITE)
        } else {
            (self.color.to_egui().gamma_multiply(0.2), self.color.to_egui())
        };
        let scale = self
            .pulse
            .map(|elapsed| Animation::Pulse.frame(elapsed).scale)
            .unwrap_or(1.0);

        egui::Frame::none()
            .fill(bg_color)
            .rounding(10.0)
            .inner_margin(egui::Margin::symmetric(6.0, 2.0))
            .show(ui, |ui| {
                ui.label(egui::RichText::new(self.text).size(11.0 * scale).strong().color(fg_color))
            })
            .response
    }
}
