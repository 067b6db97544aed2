//! Phosphor icon constants for consistent iconography across the GUI

use crate::modules::ModuleIcon;
use crate::notify::NotificationKind;
use egui_phosphor::regular::*;

// Modules
pub const OVERVIEW: &str = SQUARES_FOUR;
pub const ORDERS: &str = PACKAGE;
pub const PICKING: &str = NAVIGATION_ARROW;
pub const WAREHOUSE_ICON: &str = WAREHOUSE;
pub const ANALYTICS: &str = CHART_BAR;
pub const ALERTS: &str = BELL;
pub const STAFF: &str = USERS;
pub const SETTINGS: &str = GEAR;

// Status
pub const OK: &str = CHECK_CIRCLE;
pub const WARN: &str = WARNING;
pub const ERR: &str = X_CIRCLE;
pub const INFO: &str = egui_phosphor::regular::INFO;
pub const ONLINE: &str = WIFI_HIGH;
pub const OFFLINE: &str = WIFI_SLASH;

// Header controls
pub const SEARCH: &str = MAGNIFYING_GLASS;
pub const LIGHT: &str = SUN;
pub const DARK: &str = MOON;
pub const ENTER_FULLSCREEN: &str = ARROWS_OUT;
pub const EXIT_FULLSCREEN: &str = ARROWS_IN;
pub const MORE: &str = DOTS_THREE;
pub const EXPAND: &str = CARET_RIGHT;
pub const COLLAPSE: &str = CARET_DOWN;
pub const CLOSE: &str = X;

// Charts
pub const CHART: &str = CHART_LINE;
pub const CHART_UP: &str = CHART_LINE_UP;

pub fn module(icon: ModuleIcon) -> &'static str {
    match icon {
        ModuleIcon::Dashboard => OVERVIEW,
        ModuleIcon::Package => ORDERS,
        ModuleIcon::Navigation => PICKING,
        ModuleIcon::Warehouse => WAREHOUSE_ICON,
        ModuleIcon::BarChart => ANALYTICS,
        ModuleIcon::Bell => ALERTS,
        ModuleIcon::Users => STAFF,
        ModuleIcon::Gear => SETTINGS,
    }
}

pub fn notification(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => OK,
        NotificationKind::Error => ERR,
        NotificationKind::Warning => WARN,
        NotificationKind::Info => INFO,
    }
}
