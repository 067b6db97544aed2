//! Navigation shell state
//!
//! Which module is selected plus the independent view flags. Front ends
//! translate their native key events into `KeyPress` and feed them here.

use crate::config::Config;
use crate::modules::{MODULES, ModuleDescriptor, ModuleId};
use crate::themes::{ThemeMode, ThemeTokens};
use crate::timing::Debouncer;
use std::time::{Duration, Instant};

/// Delay between the last keystroke in the search box and re-filtering
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);

/// Front-end independent key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    F11,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }
}

/// What a consumed key did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Selected(ModuleId),
    FullscreenToggled(bool),
}

#[derive(Debug, Clone)]
pub struct ShellState {
    active: ModuleId,
    sidebar_collapsed: bool,
    theme: ThemeMode,
    fullscreen: bool,
    search_input: String,
    search_query: String,
    search_debounce: Debouncer,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            active: ModuleId::Overview,
            sidebar_collapsed: false,
            theme: ThemeMode::Dark,
            fullscreen: false,
            search_input: String::new(),
            search_query: String::new(),
            search_debounce: Debouncer::new(SEARCH_DEBOUNCE),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            active: ModuleId::parse_or_default(&config.start_module),
            sidebar_collapsed: config.sidebar_collapsed,
            theme: ThemeMode::from_dark(config.dark_mode),
            ..Self::new()
        }
    }

    pub fn active(&self) -> ModuleId {
        self.active
    }

    pub fn active_descriptor(&self) -> &'static ModuleDescriptor {
        self.active.descriptor()
    }

    pub fn is_active(&self, id: ModuleId) -> bool {
        self.active == id
    }

    pub fn select(&mut self, id: ModuleId) {
        if self.active != id {
            tracing::debug!(from = self.active.as_str(), to = id.as_str(), "module selected");
            self.active = id;
        }
    }

    /// Apply a shortcut. Ctrl+1..8 selects a module, F11 toggles fullscreen.
    /// Returns `None` and leaves state untouched for anything else.
    pub fn handle_key(&mut self, press: KeyPress) -> Option<ShellAction> {
        match press.key {
            Key::Digit(d) if press.ctrl => {
                let id = ModuleId::from_shortcut_digit(d)?;
                self.select(id);
                Some(ShellAction::Selected(id))
            }
            Key::F11 => Some(ShellAction::FullscreenToggled(self.toggle_fullscreen())),
            _ => None,
        }
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.sidebar_collapsed
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn tokens(&self) -> ThemeTokens {
        self.theme.tokens()
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = self.theme.name(), "theme toggled");
        self.theme
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    /// Raw text of the search box
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Replace the search box text; the filter follows after the debounce
    pub fn set_search_input(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        if text != self.search_input {
            self.search_input = text;
            self.search_debounce.trigger(now);
        }
    }

    /// Apply a pending search once the debounce has elapsed.
    /// Returns true when the applied query changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.search_debounce.poll(now) && self.search_query != self.search_input {
            self.search_query = self.search_input.clone();
            tracing::debug!(query = %self.search_query, "sidebar filter applied");
            return true;
        }
        false
    }

    pub fn search_pending(&self) -> bool {
        self.search_debounce.is_pending()
    }

    /// Applied filter
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Sidebar entries matching the applied filter, in declaration order
    pub fn sidebar_modules(&self) -> impl Iterator<Item = &'static ModuleDescriptor> + '_ {
        MODULES.iter().filter(|m| m.matches(&self.search_query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_digit_selects_nth_module() {
        let mut shell = ShellState::new();
        for (n, id) in ModuleId::ALL.iter().enumerate() {
            let action = shell.handle_key(KeyPress::ctrl(Key::Digit(n as u8 + 1)));
            assert_eq!(action, Some(ShellAction::Selected(*id)));
            assert_eq!(shell.active(), *id);
        }
    }

    #[test]
    fn test_other_keys_leave_selection() {
        let mut shell = ShellState::new();
        shell.select(ModuleId::Alerts);

        for press in [
            KeyPress::plain(Key::Digit(2)),
            KeyPress::ctrl(Key::Digit(0)),
            KeyPress::ctrl(Key::Digit(9)),
            KeyPress::ctrl(Key::Char('s')),
            KeyPress::plain(Key::Other),
        ] {
            assert_eq!(shell.handle_key(press), None);
            assert_eq!(shell.active(), ModuleId::Alerts);
        }
        assert!(!shell.is_fullscreen());
    }

    #[test]
    fn test_f11_toggles_fullscreen() {
        let mut shell = ShellState::new();
        assert_eq!(
            shell.handle_key(KeyPress::plain(Key::F11)),
            Some(ShellAction::FullscreenToggled(true))
        );
        assert_eq!(
            shell.handle_key(KeyPress::ctrl(Key::F11)),
            Some(ShellAction::FullscreenToggled(false))
        );
        assert_eq!(shell.active(), ModuleId::Overview);
    }

    #[test]
    fn test_flags_are_independent() {
        let mut shell = ShellState::new();
        let tokens = shell.tokens();

        shell.toggle_sidebar();
        shell.toggle_theme();
        assert!(shell.sidebar_collapsed());
        assert!(!shell.is_dark());
        assert!(!shell.is_fullscreen());

        shell.toggle_theme();
        assert_eq!(shell.tokens(), tokens);
        assert!(shell.sidebar_collapsed());
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            dark_mode: false,
            sidebar_collapsed: true,
            start_module: "picking".into(),
            ..Config::default()
        };
        let shell = ShellState::from_config(&config);
        assert_eq!(shell.active(), ModuleId::Picking);
        assert!(shell.sidebar_collapsed());
        assert_eq!(shell.theme(), ThemeMode::Light);

        let unknown = Config {
            start_module: "inventory".into(),
            ..Config::default()
        };
        assert_eq!(ShellState::from_config(&unknown).active(), ModuleId::Overview);
    }

    #[test]
    fn test_search_is_debounced() {
        let start = Instant::now();
        let mut shell = ShellState::new();

        shell.set_search_input("ord", start);
        assert!(!shell.tick(start + Duration::from_millis(100)));
        assert_eq!(shell.sidebar_modules().count(), 8);

        shell.set_search_input("order", start + Duration::from_millis(150));
        assert!(!shell.tick(start + Duration::from_millis(300)));
        assert!(shell.tick(start + Duration::from_millis(400)));
        assert_eq!(shell.search_query(), "order");

        let ids: Vec<_> = shell.sidebar_modules().map(|m| m.id).collect();
        assert_eq!(ids, vec![ModuleId::Orders]);
    }
}
