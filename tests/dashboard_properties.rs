//! Behaviour of the dashboard core through its public API
//!
//! Time is passed explicitly, so nothing here sleeps.

use miadash::content::ContentPanel;
use miadash::enhance::{ChartKind, ChartPanel, Enhancer, MetricCard, Page};
use miadash::loader::LoadingOverlay;
use miadash::notify::{RemovalReason, TRANSITION};
use miadash::shell::{Key, KeyPress};
use miadash::{Config, Dashboard, ModuleId, NotificationCenter, NotificationKind, ShellState};
use std::time::{Duration, Instant};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

// ============================================================================
// Navigation shell
// ============================================================================

#[test]
fn test_selecting_each_module_gives_one_active_entry() {
    let mut shell = ShellState::new();
    for id in ModuleId::ALL {
        shell.select(id);
        let active: Vec<_> = ModuleId::ALL.iter().filter(|m| shell.is_active(**m)).collect();
        assert_eq!(active, vec![&id]);
        assert_eq!(ContentPanel::for_module(shell.active()).module, id);
    }
}

#[test]
fn test_only_ctrl_digits_in_range_select() {
    let mut shell = ShellState::new();
    for digit in 0..=9u8 {
        shell.select(ModuleId::Staff);
        shell.handle_key(KeyPress::ctrl(Key::Digit(digit)));
        let expected = match digit {
            1..=8 => ModuleId::ALL[digit as usize - 1],
            _ => ModuleId::Staff,
        };
        assert_eq!(shell.active(), expected, "ctrl+{digit}");

        shell.select(ModuleId::Staff);
        shell.handle_key(KeyPress::plain(Key::Digit(digit)));
        assert_eq!(shell.active(), ModuleId::Staff, "plain {digit}");
    }
}

#[test]
fn test_theme_round_trip_restores_tokens() {
    let mut shell = ShellState::new();
    let before = shell.tokens();
    shell.toggle_theme();
    assert_ne!(shell.tokens(), before);
    shell.toggle_theme();
    assert_eq!(shell.tokens(), before);
}

#[test]
fn test_unknown_start_module_falls_back_to_overview() {
    let config = Config::from_toml("start_module = \"dock-doors\"").unwrap();
    assert_eq!(ShellState::from_config(&config).active(), ModuleId::Overview);
}

// ============================================================================
// Notifications
// ============================================================================

#[test]
fn test_expiry_removes_exactly_once() {
    let start = Instant::now();
    let mut center = NotificationCenter::new();
    let id = center.info("Wave released", "Wave 14 is ready for picking", start);

    center.tick(start + ms(4999));
    assert!(center.is_active(id));

    center.tick(start + ms(5000));
    center.tick(start + ms(5100));
    center.tick(start + ms(5000) + TRANSITION);
    let removals = center.take_removals();
    assert_eq!(removals.len(), 1);
    assert_eq!(removals[0].reason, RemovalReason::Expired);
    assert!(center.is_empty());
}

#[test]
fn test_dismissal_wins_over_later_expiry() {
    let start = Instant::now();
    let mut center = NotificationCenter::new();
    let id = center.error("Scanner offline", "Dock 2 scanner lost connection", start);

    assert!(center.remove(id, start + ms(1000)));
    assert!(!center.remove(id, start + ms(1100)));
    center.tick(start + ms(6000));

    let removals = center.take_removals();
    assert_eq!(removals.len(), 1);
    assert_eq!(removals[0].reason, RemovalReason::Dismissed);
}

#[test]
fn test_removing_unknown_id_changes_nothing() {
    let now = Instant::now();
    let mut center = NotificationCenter::new();
    let id = center.success("Saved", "Shift plan stored", now);
    center.remove(id, now);
    center.tick(now + TRANSITION);
    assert!(center.is_empty());

    assert!(!center.remove(id, now + ms(500)));
    assert!(center.is_empty());
    assert_eq!(center.take_removals().len(), 1);
}

#[test]
fn test_capacity_drops_oldest_first() {
    let now = Instant::now();
    let mut center = NotificationCenter::with_limits(3, 2, ms(5000));
    let ids: Vec<_> = (0..5)
        .map(|i| center.show(NotificationKind::Warning, format!("Alert {i}"), "", now))
        .collect();

    assert_eq!(center.len(), 3);
    assert!(!center.is_active(ids[0]));
    assert!(!center.is_active(ids[1]));
    let visible: Vec<_> = center.visible().map(|n| n.id).collect();
    assert_eq!(visible, vec![ids[2], ids[3]]);
}

#[test]
fn test_every_kind_has_a_style() {
    let colors: Vec<_> = NotificationKind::ALL.iter().map(|k| k.color()).collect();
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// ============================================================================
// Loading overlay
// ============================================================================

#[test]
fn test_show_twice_keeps_single_overlay_with_latest_message() {
    let now = Instant::now();
    let mut overlay = LoadingOverlay::new();
    overlay.show(Some("Loading orders"), now);
    overlay.show(Some("Loading picking routes"), now + ms(200));

    assert!(overlay.is_visible());
    assert_eq!(overlay.message(), Some("Loading picking routes"));
    assert_eq!(overlay.shown_since(), Some(now));
}

#[test]
fn test_hide_while_hidden_is_harmless() {
    let mut overlay = LoadingOverlay::new();
    overlay.hide();
    overlay.hide();
    assert!(!overlay.is_visible());
    assert_eq!(overlay.message(), None);
}

// ============================================================================
// Enhancer
// ============================================================================

#[test]
fn test_reconcile_is_idempotent() {
    let mut page = Page::new()
        .with_chart(ChartPanel::new("throughput", "Throughput", ChartKind::Line))
        .with_metric(MetricCard::new("Pending orders", "32", "+4"));
    let mut enhancer = Enhancer::new();

    let first = enhancer.reconcile(&mut page);
    assert!(first.changed());
    let snapshot = page.clone();

    enhancer.invalidate();
    let second = enhancer.reconcile(&mut page);
    assert!(!second.changed());
    assert_eq!(page, snapshot);
}

#[test]
fn test_new_content_is_enhanced_on_next_reconcile() {
    let mut page = Page::new();
    let mut enhancer = Enhancer::new();
    enhancer.reconcile(&mut page);

    page.push_metric(MetricCard::new("Revenue", "1.234.567 ₫", "+3%"));
    let report = enhancer.reconcile(&mut page);
    assert_eq!(report.metrics_enhanced, 1);
    assert_eq!(page.metrics()[0].icon(), Some("💰"));
}

// ============================================================================
// Dashboard facade
// ============================================================================

#[test]
fn test_dashboard_api_round_trip() {
    let start = Instant::now();
    let mut config = Config::default();
    config.notifications.welcome = false;
    config.notifications.live_feed = false;
    let mut dash = Dashboard::new(&config, ModuleId::Overview, start);

    let ok = dash.show_success("Batch confirmed", "42 orders", start);
    dash.show_error("Sync failed", "Gateway timeout", start);
    dash.show_warning("SLA at risk", "3 orders", start);
    dash.show_info("Chart updated", "Loading 30 days of data...", start);
    assert_eq!(dash.notifications.active_count(), 4);
    assert_eq!(dash.feed.len(), 4);

    assert!(dash.dismiss(ok, start + ms(100)));
    dash.tick(start + ms(100) + TRANSITION);
    assert_eq!(dash.notifications.len(), 3);
    // The feed keeps dismissed entries
    assert_eq!(dash.feed.len(), 4);

    dash.show_loader(None, start);
    assert!(dash.loader.is_visible());
    dash.hide_loader();
    assert!(!dash.loader.is_visible());
}
