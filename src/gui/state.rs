//! GUI State Management
//!
//! Everything the egui front end mutates between frames. The headless core
//! (`ShellState`, `Dashboard`) lives here together with the few bits that
//! only exist on screen: the search text buffer, the bell dropdown and the
//! page-load clock.

use crate::animation::{Animation, AnimationFrame};
use crate::config::Config;
use crate::content::{ConnectionStatus, StatusInfo, UserProfile};
use crate::dashboard::Dashboard;
use crate::modules::ModuleId;
use crate::shell::{KeyPress, ShellAction, ShellState};
use crate::themes::{ThemeMode, ThemeTokens};
use std::time::{Duration, Instant};

pub struct GuiState {
    pub shell: ShellState,
    pub dashboard: Dashboard,
    pub profile: UserProfile,
    pub connection: ConnectionStatus,
    pub status: StatusInfo,
    /// Text edit buffer behind the header search box
    pub search_text: String,
    pub feed_open: bool,
    /// When the current content panel appeared, for the page-load stagger
    panel_shown_at: Instant,
    /// Last feed entry the bell reacted to
    bell_seen: Option<u64>,
    bell_since: Option<Instant>,
    applied_theme: Option<ThemeMode>,
}

impl GuiState {
    pub fn new(config: &Config, now: Instant) -> Self {
        let shell = ShellState::from_config(config);
        let dashboard = Dashboard::new(config, shell.active(), now);
        Self {
            shell,
            dashboard,
            profile: UserProfile::default(),
            connection: ConnectionStatus::default(),
            status: StatusInfo::default(),
            search_text: String::new(),
            feed_open: false,
            panel_shown_at: now,
            bell_seen: None,
            bell_since: None,
            applied_theme: None,
        }
    }

    pub fn tokens(&self) -> ThemeTokens {
        self.shell.tokens()
    }

    /// Sidebar click
    pub fn select(&mut self, id: ModuleId, now: Instant) {
        self.shell.select(id);
        self.sync_panel(now);
    }

    pub fn handle_key(&mut self, press: KeyPress, now: Instant) -> Option<ShellAction> {
        let action = self.shell.handle_key(press)?;
        if let ShellAction::Selected(_) = action {
            self.sync_panel(now);
        }
        Some(action)
    }

    fn sync_panel(&mut self, now: Instant) {
        if self.dashboard.panel().module != self.shell.active() {
            self.dashboard.sync_module(self.shell.active());
            self.panel_shown_at = now;
        }
    }

    /// Time since the content panel appeared
    pub fn panel_elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.panel_shown_at)
    }

    /// Search box edited
    pub fn search_changed(&mut self, now: Instant) {
        self.shell.set_search_input(self.search_text.clone(), now);
    }

    /// Theme to push into egui, if it changed since the last call
    pub fn take_theme_change(&mut self) -> Option<ThemeMode> {
        let mode = self.shell.theme();
        if self.applied_theme == Some(mode) {
            return None;
        }
        self.applied_theme = Some(mode);
        Some(mode)
    }

    /// Once per frame
    pub fn tick(&mut self, now: Instant) {
        self.shell.tick(now);
        self.dashboard.tick(now);

        let newest = self.dashboard.feed.latest().map(|e| e.seq);
        if newest.is_some() && newest != self.bell_seen {
            self.bell_seen = newest;
            self.bell_since = Some(now);
        }
        if self
            .bell_since
            .is_some_and(|since| Animation::Bounce.is_finished(now.saturating_duration_since(since)))
        {
            self.bell_since = None;
        }
    }

    /// Bell icon offset while a new notification is announced
    pub fn bell_frame(&self, now: Instant) -> AnimationFrame {
        match self.bell_since {
            Some(since) => Animation::Bounce.frame(now.saturating_duration_since(since)),
            None => AnimationFrame::REST,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.bell_since.is_some()
            || self.shell.search_pending()
            || self.dashboard.needs_repaint()
            || !crate::animation::stagger_finished(
                self.dashboard.panel().page.metrics().len(),
                self.panel_elapsed(now),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Key;

    fn quiet_config() -> Config {
        let mut config = Config::default();
        config.notifications.welcome = false;
        config.notifications.live_feed = false;
        config
    }

    #[test]
    fn test_shortcut_switches_panel() {
        let start = Instant::now();
        let mut state = GuiState::new(&quiet_config(), start);
        let later = start + Duration::from_secs(2);

        let action = state.handle_key(KeyPress::ctrl(Key::Digit(5)), later);
        assert_eq!(action, Some(ShellAction::Selected(ModuleId::Analytics)));
        assert_eq!(state.dashboard.panel().module, ModuleId::Analytics);
        assert_eq!(state.panel_elapsed(later), Duration::ZERO);
    }

    #[test]
    fn test_theme_change_reported_once() {
        let mut state = GuiState::new(&quiet_config(), Instant::now());
        assert_eq!(state.take_theme_change(), Some(ThemeMode::Dark));
        assert_eq!(state.take_theme_change(), None);

        state.shell.toggle_theme();
        assert_eq!(state.take_theme_change(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_bell_bounces_on_new_notification() {
        let start = Instant::now();
        let mut state = GuiState::new(&quiet_config(), start);
        state.tick(start);
        assert_eq!(state.bell_frame(start), AnimationFrame::REST);

        state.dashboard.show_info("Sync", "Inventory synced", start);
        state.tick(start);
        assert!(state.is_animating(start));

        let done = start + Duration::from_secs(1);
        state.tick(done);
        assert_eq!(state.bell_frame(done), AnimationFrame::REST);
    }
}
