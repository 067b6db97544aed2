//! Main GUI Application
//!
//! The MiaDashApp struct and eframe::App implementation.

use eframe::egui;
use std::time::{Duration, Instant};

use super::state::GuiState;
use super::theme;
use super::widgets::{HeaderBar, NavItem, status_bar};
use crate::config::Config;
use crate::shell::{Key, KeyPress, ShellAction};

const SIDEBAR_WIDTH: f32 = 280.0;
const SIDEBAR_COLLAPSED_WIDTH: f32 = 72.0;

/// Run the desktop dashboard
pub fn run(config: Config) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0])
            .with_title("MIA Warehouse Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "MIA Warehouse Dashboard",
        options,
        Box::new(move |cc| {
            let app = MiaDashApp::new(&config);
            app.init(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}

/// Main application struct
pub struct MiaDashApp {
    pub state: GuiState,
}

impl MiaDashApp {
    pub fn new(config: &Config) -> Self {
        Self {
            state: GuiState::new(config, Instant::now()),
        }
    }

    /// Initialize app with egui context (fonts)
    pub fn init(&self, ctx: &egui::Context) {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        ctx.set_fonts(fonts);
    }

    /// Translate egui key events into shell key presses
    fn handle_keyboard(&mut self, ctx: &egui::Context, now: Instant) {
        let presses: Vec<KeyPress> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => Some(KeyPress {
                        key: map_key(*key),
                        ctrl: modifiers.command,
                    }),
                    _ => None,
                })
                .collect()
        });

        for press in presses {
            if let Some(ShellAction::FullscreenToggled(on)) = self.state.handle_key(press, now) {
                ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(on));
            }
        }
    }

    /// Render the sidebar navigation
    fn render_sidebar(&mut self, ui: &mut egui::Ui, now: Instant) {
        let tokens = self.state.tokens();
        let collapsed = self.state.shell.sidebar_collapsed();

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if !collapsed {
                ui.label(
                    egui::RichText::new("MIA Dashboard")
                        .strong()
                        .size(18.0)
                        .color(tokens.text.primary.to_egui()),
                );
            }
            let icon = if collapsed {
                super::icons::EXPAND
            } else {
                super::icons::COLLAPSE
            };
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(icon).on_hover_text("Collapse sidebar").clicked() {
                    self.state.shell.toggle_sidebar();
                }
            });
        });
        ui.add_space(8.0);
        ui.separator();

        let mut clicked = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .max_height(ui.available_height() - 80.0)
            .show(ui, |ui| {
                for module in self.state.shell.sidebar_modules() {
                    let item = NavItem::new(module, &tokens)
                        .active(self.state.shell.is_active(module.id))
                        .collapsed(collapsed)
                        .elapsed(self.state.dashboard.uptime(now));
                    if item.show(ui) {
                        clicked = Some(module.id);
                    }
                    ui.add_space(2.0);
                }
                if self.state.shell.sidebar_modules().next().is_none() {
                    ui.label(egui::RichText::new("No matching modules").weak());
                }
            });
        if let Some(id) = clicked {
            self.state.select(id, now);
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
            ui.add_space(12.0);
            let profile = &self.state.profile;
            ui.horizontal(|ui| {
                egui::Frame::none()
                    .fill(tokens.accent.from.to_egui())
                    .rounding(18.0)
                    .inner_margin(egui::Margin::symmetric(8.0, 8.0))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(&profile.avatar).strong().color(egui::Color32::WHITE));
                    });
                if !collapsed {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&profile.name).strong().size(12.0));
                        ui.label(
                            egui::RichText::new(format!("{} · {}", profile.role, profile.shift))
                                .size(10.0)
                                .color(tokens.text.muted.to_egui()),
                        );
                    });
                }
            });
            ui.separator();
        });
    }

    fn render_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, now: Instant) {
        let tokens = self.state.tokens();
        let state = &mut self.state;

        let header = HeaderBar::new(state.shell.active_descriptor(), &tokens)
            .connection(state.connection)
            .feed(state.dashboard.feed.entries())
            .bell_offset(state.bell_frame(now).offset_y)
            .fullscreen(state.shell.is_fullscreen());
        let response = header.show(ui, &mut state.search_text, &mut state.feed_open);

        if response.search_changed {
            state.search_changed(now);
        }
        if response.theme_clicked {
            state.shell.toggle_theme();
        }
        if response.fullscreen_clicked {
            let on = state.shell.toggle_fullscreen();
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(on));
        }
    }
}

fn map_key(key: egui::Key) -> Key {
    use egui::Key as K;
    match key {
        K::Num0 => Key::Digit(0),
        K::Num1 => Key::Digit(1),
        K::Num2 => Key::Digit(2),
        K::Num3 => Key::Digit(3),
        K::Num4 => Key::Digit(4),
        K::Num5 => Key::Digit(5),
        K::Num6 => Key::Digit(6),
        K::Num7 => Key::Digit(7),
        K::Num8 => Key::Digit(8),
        K::Num9 => Key::Digit(9),
        K::F11 => Key::F11,
        _ => Key::Other,
    }
}

impl eframe::App for MiaDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.tick(now);

        if let Some(mode) = self.state.take_theme_change() {
            theme::apply_theme(ctx, mode);
        }

        self.handle_keyboard(ctx, now);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui, ctx, now);
        });

        let tokens = self.state.tokens();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::none()
                    .fill(tokens.surface.to_egui())
                    .inner_margin(egui::Margin::symmetric(16.0, 4.0)),
            )
            .show(ctx, |ui| {
                status_bar::show(
                    ui,
                    &self.state.status,
                    self.state.dashboard.last_update(),
                    self.state.connection,
                    &tokens,
                );
            });

        let width = if self.state.shell.sidebar_collapsed() {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_WIDTH
        };
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(width)
            .frame(
                egui::Frame::none()
                    .fill(tokens.surface.to_egui())
                    .inner_margin(egui::Margin::symmetric(8.0, 0.0)),
            )
            .show(ctx, |ui| {
                self.render_sidebar(ui, now);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                super::tabs::render(ui, &mut self.state, now);
            });
        });

        super::toast::show(ctx, &mut self.state.dashboard.notifications, &tokens, now);
        super::overlay::show(ctx, &self.state.dashboard.loader, &tokens, now);

        if self.state.is_animating(now) {
            ctx.request_repaint();
        } else {
            // Status bar clock
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(egui::Key::Num3), Key::Digit(3));
        assert_eq!(map_key(egui::Key::F11), Key::F11);
        assert_eq!(map_key(egui::Key::A), Key::Other);
    }
}
