//! Dashboard enhancement layer
//!
//! `Dashboard` owns the notification stack, the loading overlay, the
//! enhancer and the header feed. Front ends construct one explicitly and use
//! it through these methods; there is no global instance.
//!
//! While enabled, a simulated order feed rolls every `LIVE_FEED_INTERVAL` and
//! now and then adds a "New order needs processing" line to the bell
//! dropdown without raising a toast.

use crate::config::Config;
use crate::content::ContentPanel;
use crate::enhance::{ChartPeriod, EnhanceReport, Enhancer};
use crate::loader::LoadingOverlay;
use crate::modules::ModuleId;
use crate::notify::{NotificationCenter, NotificationFeed, NotificationId, NotificationKind};
use crate::timing::Throttle;
use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::time::{Duration, Instant};

/// Delay before the welcome toast
pub const WELCOME_DELAY: Duration = Duration::from_secs(1);
/// Minimum spacing between chart-update toasts
pub const CHART_TOAST_THROTTLE: Duration = Duration::from_millis(500);
/// How long a simulated data refresh keeps the loader up
pub const REFRESH_DURATION: Duration = Duration::from_millis(1500);
pub const REFRESH_MESSAGE: &str = "Refreshing dashboard data...";
/// How often the simulated order feed rolls
pub const LIVE_FEED_INTERVAL: Duration = Duration::from_secs(2);
/// Chance per roll that a new order arrives
const LIVE_FEED_CHANCE: f64 = 0.05;
/// Share of arrivals flagged as warnings
const LIVE_FEED_WARNING_CHANCE: f64 = 0.3;
const LIVE_FEED_MESSAGE: &str = "New order needs processing";

struct LiveFeed {
    rng: Box<dyn RngCore>,
    next_roll: Instant,
}

pub struct Dashboard {
    pub notifications: NotificationCenter,
    pub loader: LoadingOverlay,
    pub feed: NotificationFeed,
    enhancer: Enhancer,
    panel: ContentPanel,
    started_at: Instant,
    welcome_due: Option<Instant>,
    chart_toasts: Throttle,
    refresh_due: Option<Instant>,
    last_update: DateTime<Local>,
    live_feed: Option<LiveFeed>,
}

impl Dashboard {
    pub fn new(config: &Config, module: ModuleId, now: Instant) -> Self {
        let mut dashboard = Self {
            notifications: NotificationCenter::from_config(&config.notifications),
            loader: LoadingOverlay::new(),
            feed: NotificationFeed::default(),
            enhancer: Enhancer::new(),
            panel: ContentPanel::for_module(module),
            started_at: now,
            welcome_due: config.notifications.welcome.then(|| now + WELCOME_DELAY),
            chart_toasts: Throttle::new(CHART_TOAST_THROTTLE),
            refresh_due: None,
            last_update: Local::now(),
            live_feed: config.notifications.live_feed.then(|| LiveFeed {
                rng: Box::new(StdRng::from_entropy()),
                next_roll: now + LIVE_FEED_INTERVAL,
            }),
        };
        dashboard.enhance();
        dashboard
    }

    /// Show a notification of `kind` for the configured duration
    pub fn notify(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        now: Instant,
    ) -> NotificationId {
        let id = self.notifications.show(kind, title, message, now);
        if let Some(n) = self.notifications.get(id) {
            self.feed.record(n);
        }
        id
    }

    pub fn show_success(&mut self, title: impl Into<String>, message: impl Into<String>, now: Instant) -> NotificationId {
        self.notify(NotificationKind::Success, title, message, now)
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>, now: Instant) -> NotificationId {
        self.notify(NotificationKind::Error, title, message, now)
    }

    pub fn show_warning(&mut self, title: impl Into<String>, message: impl Into<String>, now: Instant) -> NotificationId {
        self.notify(NotificationKind::Warning, title, message, now)
    }

    pub fn show_info(&mut self, title: impl Into<String>, message: impl Into<String>, now: Instant) -> NotificationId {
        self.notify(NotificationKind::Info, title, message, now)
    }

    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        self.notifications.remove(id, now)
    }

    /// Show the loader. A different message while a refresh is running hands
    /// the overlay to the caller, so the refresh no longer closes it.
    pub fn show_loader(&mut self, message: Option<&str>, now: Instant) {
        if self.refresh_due.is_some() && message != Some(REFRESH_MESSAGE) {
            self.refresh_due = None;
        }
        self.loader.show(message, now);
    }

    pub fn hide_loader(&mut self) {
        self.refresh_due = None;
        self.loader.hide();
    }

    /// Simulated data refresh: loader up for `REFRESH_DURATION`, then a
    /// success toast
    pub fn start_refresh(&mut self, now: Instant) {
        self.loader.show(Some(REFRESH_MESSAGE), now);
        self.refresh_due = Some(now + REFRESH_DURATION);
    }

    /// When the dashboard figures were last loaded
    pub fn last_update(&self) -> &DateTime<Local> {
        &self.last_update
    }

    /// Drive the simulated order feed from `rng`, enabling it if the config
    /// turned it off
    pub fn set_feed_source(&mut self, rng: impl RngCore + 'static) {
        match self.live_feed.as_mut() {
            Some(live) => live.rng = Box::new(rng),
            None => {
                self.live_feed = Some(LiveFeed {
                    rng: Box::new(rng),
                    next_roll: self.started_at + LIVE_FEED_INTERVAL,
                })
            }
        }
    }

    /// Content currently rendered
    pub fn panel(&self) -> &ContentPanel {
        &self.panel
    }

    /// Swap the content panel when the active module changed
    pub fn sync_module(&mut self, module: ModuleId) {
        if self.panel.module != module {
            self.panel = ContentPanel::for_module(module);
            self.enhance();
        }
    }

    /// Decorate the current page; a no-op when the page is unchanged
    pub fn enhance(&mut self) -> EnhanceReport {
        self.enhancer.reconcile(&mut self.panel.page)
    }

    /// Toolbar click: activate `period` on chart `chart_id` and announce it
    pub fn select_chart_period(&mut self, chart_id: &str, period: ChartPeriod, now: Instant) -> bool {
        if !self.panel.page.select_period(chart_id, period) {
            return false;
        }
        if self.chart_toasts.try_fire(now) {
            self.show_info(
                "Chart updated",
                format!("Loading {} days of data...", period.days()),
                now,
            );
        }
        true
    }

    /// Time since construction, for page-load animations
    pub fn uptime(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Advance timers: welcome toast, refresh, order feed, notification expiry
    pub fn tick(&mut self, now: Instant) {
        if self.welcome_due.is_some_and(|due| now >= due) {
            self.welcome_due = None;
            self.show_success(
                "🎉 Welcome to MIA Dashboard!",
                "The system has been upgraded with a new interface",
                now,
            );
        }
        if self.refresh_due.is_some_and(|due| now >= due) {
            self.hide_loader();
            self.last_update = Local::now();
            self.show_success("Data refreshed", "Dashboard figures are up to date", now);
        }
        self.roll_live_feed(now);
        self.notifications.tick(now);
        for removal in self.notifications.take_removals() {
            tracing::trace!(id = %removal.id, reason = ?removal.reason, "notification gone");
        }
    }

    fn roll_live_feed(&mut self, now: Instant) {
        let Some(live) = self.live_feed.as_mut() else {
            return;
        };
        if now < live.next_roll {
            return;
        }
        live.next_roll = now + LIVE_FEED_INTERVAL;
        if live.rng.gen_bool(LIVE_FEED_CHANCE) {
            let kind = if live.rng.gen_bool(LIVE_FEED_WARNING_CHANCE) {
                NotificationKind::Warning
            } else {
                NotificationKind::Info
            };
            tracing::debug!(%kind, "simulated order arrived");
            self.feed.push(kind, LIVE_FEED_MESSAGE, &Local::now());
        }
    }

    /// Whether anything is animating or scheduled and needs another frame soon
    pub fn needs_repaint(&self) -> bool {
        !self.notifications.is_empty() || self.loader.is_visible() || self.welcome_due.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn config_without_welcome() -> Config {
        let mut config = Config::default();
        config.notifications.welcome = false;
        config.notifications.live_feed = false;
        config
    }

    #[test]
    fn test_welcome_after_delay() {
        let start = Instant::now();
        let mut config = Config::default();
        config.notifications.live_feed = false;
        let mut dash = Dashboard::new(&config, ModuleId::Overview, start);

        dash.tick(start + Duration::from_millis(999));
        assert!(dash.notifications.is_empty());

        dash.tick(start + WELCOME_DELAY);
        assert_eq!(dash.notifications.active_count(), 1);
        dash.tick(start + Duration::from_secs(3));
        assert_eq!(dash.notifications.active_count(), 1);
        assert_eq!(dash.feed.len(), 1);
    }

    #[test]
    fn test_panel_enhanced_on_construction_and_switch() {
        let now = Instant::now();
        let mut dash = Dashboard::new(&config_without_welcome(), ModuleId::Overview, now);
        assert!(dash.panel().page.metrics().iter().all(|m| m.is_enhanced()));
        assert!(dash.enhance().skipped);

        dash.sync_module(ModuleId::Analytics);
        assert_eq!(dash.panel().module, ModuleId::Analytics);
        assert!(dash.panel().page.charts().iter().all(|c| c.toolbar().is_some()));
    }

    #[test]
    fn test_chart_period_toast_is_throttled() {
        let now = Instant::now();
        let mut dash = Dashboard::new(&config_without_welcome(), ModuleId::Overview, now);

        assert!(dash.select_chart_period("orders-daily", ChartPeriod::Month, now));
        assert!(dash.select_chart_period("orders-daily", ChartPeriod::Quarter, now + Duration::from_millis(100)));
        assert_eq!(dash.notifications.active_count(), 1);
        assert_eq!(
            dash.panel().page.chart("orders-daily").unwrap().period(),
            ChartPeriod::Quarter
        );

        let first = dash.notifications.visible().next().unwrap();
        assert_eq!(first.message, "Loading 30 days of data...");
        assert!(!dash.select_chart_period("nope", ChartPeriod::Week, now));
    }

    #[test]
    fn test_loader_api() {
        let now = Instant::now();
        let mut dash = Dashboard::new(&config_without_welcome(), ModuleId::Overview, now);
        dash.hide_loader();
        dash.show_loader(Some("Syncing"), now);
        dash.show_loader(Some("Almost done"), now);
        assert_eq!(dash.loader.message(), Some("Almost done"));
        assert!(dash.needs_repaint());
        dash.hide_loader();
        assert!(!dash.needs_repaint());
    }

    #[test]
    fn test_refresh_hides_loader_when_done() {
        let start = Instant::now();
        let mut dash = Dashboard::new(&config_without_welcome(), ModuleId::Overview, start);

        dash.start_refresh(start);
        dash.tick(start + Duration::from_millis(500));
        assert!(dash.loader.is_visible());
        assert!(dash.notifications.is_empty());

        dash.tick(start + REFRESH_DURATION);
        assert!(!dash.loader.is_visible());
        assert_eq!(dash.notifications.active_count(), 1);

        // Hiding by hand cancels the pending completion toast
        dash.start_refresh(start + Duration::from_secs(3));
        dash.hide_loader();
        dash.tick(start + Duration::from_secs(10));
        assert_eq!(dash.feed.len(), 1);
    }

    #[test]
    fn test_host_loader_survives_pending_refresh() {
        let start = Instant::now();
        let mut dash = Dashboard::new(&config_without_welcome(), ModuleId::Overview, start);

        dash.start_refresh(start);
        dash.show_loader(Some("Exporting picking list"), start + Duration::from_millis(200));
        dash.tick(start + REFRESH_DURATION);
        assert_eq!(dash.loader.message(), Some("Exporting picking list"));
        assert!(dash.notifications.is_empty());

        // Re-showing the refresh message keeps the refresh in charge
        dash.hide_loader();
        dash.start_refresh(start + Duration::from_secs(5));
        dash.show_loader(Some(REFRESH_MESSAGE), start + Duration::from_secs(5));
        dash.tick(start + Duration::from_secs(5) + REFRESH_DURATION);
        assert!(!dash.loader.is_visible());
    }

    #[test]
    fn test_refresh_moves_last_update() {
        let start = Instant::now();
        let mut dash = Dashboard::new(&config_without_welcome(), ModuleId::Overview, start);
        let before = *dash.last_update();
        dash.start_refresh(start);
        dash.tick(start + REFRESH_DURATION);
        assert!(*dash.last_update() >= before);
    }

    #[test]
    fn test_live_feed_never_fires_on_high_rolls() {
        let start = Instant::now();
        let mut dash = Dashboard::new(&config_without_welcome(), ModuleId::Overview, start);
        dash.set_feed_source(StepRng::new(u64::MAX, 0));
        for secs in 1..=20 {
            dash.tick(start + Duration::from_secs(secs));
        }
        assert!(dash.feed.is_empty());
    }

    #[test]
    fn test_live_feed_adds_feed_only_entries() {
        let start = Instant::now();
        let mut dash = Dashboard::new(&config_without_welcome(), ModuleId::Overview, start);

        // Every draw is zero: each roll hits and is a warning
        dash.set_feed_source(StepRng::new(0, 0));
        dash.tick(start + Duration::from_millis(1999));
        assert!(dash.feed.is_empty());
        dash.tick(start + LIVE_FEED_INTERVAL);
        dash.tick(start + Duration::from_secs(3));
        assert_eq!(dash.feed.len(), 1);

        let entry = dash.feed.latest().unwrap();
        assert_eq!(entry.kind, NotificationKind::Warning);
        assert_eq!(entry.message, "New order needs processing");
        assert_eq!(entry.notification, None);
        assert!(dash.notifications.is_empty());

        // Hit on the first draw, high second draw: info
        dash.set_feed_source(StepRng::new(0, u64::MAX / 2));
        dash.tick(start + Duration::from_secs(4));
        assert_eq!(dash.feed.latest().unwrap().kind, NotificationKind::Info);

        // The feed keeps only the last five
        dash.set_feed_source(StepRng::new(0, 0));
        for step in 3..12 {
            dash.tick(start + LIVE_FEED_INTERVAL * step);
        }
        assert_eq!(dash.feed.len(), 5);
    }
}
