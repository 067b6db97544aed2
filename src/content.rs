//! Module content panels
//!
//! Static placeholder content for each module plus the mock chart data shown
//! on the overview.

use crate::enhance::{ChartKind, ChartPanel, ChartPeriod, MetricCard, Page};
use crate::format::format_currency;
use crate::modules::ModuleId;

/// Content shown in the main area for one module
#[derive(Debug, Clone, PartialEq)]
pub struct ContentPanel {
    pub module: ModuleId,
    pub emoji: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    pub page: Page,
}

impl ContentPanel {
    pub fn for_module(module: ModuleId) -> Self {
        let (emoji, heading, description) = match module {
            ModuleId::Overview => (
                "🏗️",
                "Overview area",
                "Detailed content for each module will be developed in later phases. \
                 The current focus is the main dashboard structure.",
            ),
            ModuleId::Orders => (
                "📦",
                "Order Management module",
                "This module will contain: SLA tracking, workflow automation, order management, bulk operations...",
            ),
            ModuleId::Picking => (
                "🎯",
                "Picking System module",
                "This module will contain: route optimization, barcode scanning, voice picking, error prevention...",
            ),
            ModuleId::Warehouse => (
                "🏭",
                "Warehouse module",
                "This module will contain: 3D warehouse map, inventory management, space optimization...",
            ),
            ModuleId::Analytics => (
                "📊",
                "Analytics & Reports module",
                "This module will contain: interactive charts, predictive analytics, custom dashboards...",
            ),
            ModuleId::Alerts => (
                "🚨",
                "Alerts & Notifications module",
                "This module will contain: real-time alerts, escalation rules, multi-channel notifications...",
            ),
            ModuleId::Staff => (
                "👥",
                "Staff module",
                "This module will contain: schedule management, performance tracking, skill matrix...",
            ),
            ModuleId::Settings => (
                "⚙️",
                "System Settings module",
                "This module will contain: system configuration, user management, permissions, integrations...",
            ),
        };

        Self {
            module,
            emoji,
            heading,
            description,
            page: page_for(module),
        }
    }

    /// Whether the panel has KPI cards or charts besides its placeholder text
    pub fn has_widgets(&self) -> bool {
        !self.page.charts().is_empty() || !self.page.metrics().is_empty()
    }
}

fn page_for(module: ModuleId) -> Page {
    match module {
        ModuleId::Overview => Page::new()
            .with_metric(MetricCard::new("Orders today", "1,247", "+12%"))
            .with_metric(MetricCard::new("SLA compliance", "94.2%", "+2.1%"))
            .with_metric(MetricCard::new("P1 orders waiting", "15", "-8"))
            .with_metric(MetricCard::new("Average efficiency", "87%", "+5%"))
            .with_chart(ChartPanel::new("orders-daily", "Orders per day", ChartKind::Line))
            .with_chart(ChartPanel::new("sla-daily", "On-time rate per day", ChartKind::Bar)),
        ModuleId::Analytics => Page::new()
            .with_metric(MetricCard::new("Revenue today", format_currency(184_350_000.0), "+3%"))
            .with_metric(MetricCard::new("Revenue per order", format_currency(147_800.0), "-1%"))
            .with_chart(ChartPanel::new("analytics-trend", "Fulfilment trend", ChartKind::Line)),
        _ => Page::new(),
    }
}

/// Mock series for a chart: one point per day of `period`, oldest first.
/// Deterministic so the same chart and period always draw the same line.
pub fn chart_series(chart_id: &str, period: ChartPeriod) -> Vec<[f64; 2]> {
    let seed = chart_id.bytes().fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    let phase = (seed % 360) as f64 * std::f64::consts::PI / 180.0;
    let (base, amplitude) = if chart_id.starts_with("sla") {
        (92.0, 4.0)
    } else {
        (1200.0, 180.0)
    };

    (0..period.days())
        .map(|day| {
            let x = day as f64;
            let weekly = (x * std::f64::consts::TAU / 7.0 + phase).sin();
            let drift = (x / period.days() as f64 - 0.5) * amplitude * 0.3;
            [x, base + weekly * amplitude + drift]
        })
        .collect()
}

/// Signed-in user shown in the sidebar footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub shift: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Head of Warehouse Logistics".to_string(),
            role: "Warehouse Manager".to_string(),
            avatar: "TK".to_string(),
            shift: "Morning shift 6:00-14:00".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "Online",
            ConnectionStatus::Disconnected => "Offline",
        }
    }

    pub fn long_label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "Connection stable",
            ConnectionStatus::Disconnected => "Connection lost",
        }
    }
}

/// Figures in the bottom status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub product: &'static str,
    pub server: &'static str,
    pub latency_ms: u32,
    pub memory_percent: u8,
}

impl Default for StatusInfo {
    fn default() -> Self {
        Self {
            product: "Warehouse SLA Dashboard v2.0",
            server: "Asia-Southeast-1",
            latency_ms: 12,
            memory_percent: 67,
        }
    }
}
