//! Module descriptors
//!
//! The eight top-level sections of the dashboard, in sidebar order.

use crate::themes::Gradient;
use serde::{Deserialize, Serialize};

/// All navigable modules. Declaration order is sidebar and shortcut order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    #[default]
    Overview,
    Orders,
    Picking,
    Warehouse,
    Analytics,
    Alerts,
    Staff,
    Settings,
}

/// Icon reference, resolved to a glyph by each front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleIcon {
    Dashboard,
    Package,
    Navigation,
    Warehouse,
    BarChart,
    Bell,
    Users,
    Gear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub id: ModuleId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: ModuleIcon,
    pub color: Gradient,
    pub badge: Option<u32>,
    /// Digit pressed together with Ctrl
    pub shortcut: u8,
}

pub const MODULES: [ModuleDescriptor; 8] = [
    ModuleDescriptor {
        id: ModuleId::Overview,
        title: "Overview",
        subtitle: "Main dashboard & KPIs",
        icon: ModuleIcon::Dashboard,
        color: Gradient::new(0x3b82f6, 0x06b6d4),
        badge: None,
        shortcut: 1,
    },
    ModuleDescriptor {
        id: ModuleId::Orders,
        title: "Order Management",
        subtitle: "SLA tracking & workflow",
        icon: ModuleIcon::Package,
        color: Gradient::new(0x22c55e, 0x10b981),
        badge: Some(15),
        shortcut: 2,
    },
    ModuleDescriptor {
        id: ModuleId::Picking,
        title: "Picking System",
        subtitle: "Route optimization & scanning",
        icon: ModuleIcon::Navigation,
        color: Gradient::new(0xa855f7, 0x8b5cf6),
        badge: Some(12),
        shortcut: 3,
    },
    ModuleDescriptor {
        id: ModuleId::Warehouse,
        title: "Warehouse",
        subtitle: "Layout & inventory mapping",
        icon: ModuleIcon::Warehouse,
        color: Gradient::new(0xf97316, 0xef4444),
        badge: None,
        shortcut: 4,
    },
    ModuleDescriptor {
        id: ModuleId::Analytics,
        title: "Analytics & Reports",
        subtitle: "Performance insights",
        icon: ModuleIcon::BarChart,
        color: Gradient::new(0x6366f1, 0xa855f7),
        badge: None,
        shortcut: 5,
    },
    ModuleDescriptor {
        id: ModuleId::Alerts,
        title: "Alerts & Notifications",
        subtitle: "Real-time monitoring",
        icon: ModuleIcon::Bell,
        color: Gradient::new(0xeab308, 0xf97316),
        badge: Some(7),
        shortcut: 6,
    },
    ModuleDescriptor {
        id: ModuleId::Staff,
        title: "Staff",
        subtitle: "Schedule & performance",
        icon: ModuleIcon::Users,
        color: Gradient::new(0x14b8a6, 0x22c55e),
        badge: None,
        shortcut: 7,
    },
    ModuleDescriptor {
        id: ModuleId::Settings,
        title: "System Settings",
        subtitle: "Configuration & admin",
        icon: ModuleIcon::Gear,
        color: Gradient::new(0x6b7280, 0x64748b),
        badge: None,
        shortcut: 8,
    },
];

impl ModuleId {
    pub const ALL: [ModuleId; 8] = [
        ModuleId::Overview,
        ModuleId::Orders,
        ModuleId::Picking,
        ModuleId::Warehouse,
        ModuleId::Analytics,
        ModuleId::Alerts,
        ModuleId::Staff,
        ModuleId::Settings,
    ];

    /// Position in declaration order
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn descriptor(&self) -> &'static ModuleDescriptor {
        &MODULES[self.index()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Overview => "overview",
            ModuleId::Orders => "orders",
            ModuleId::Picking => "picking",
            ModuleId::Warehouse => "warehouse",
            ModuleId::Analytics => "analytics",
            ModuleId::Alerts => "alerts",
            ModuleId::Staff => "staff",
            ModuleId::Settings => "settings",
        }
    }

    /// Module selected by Ctrl + `digit` (1-8)
    pub fn from_shortcut_digit(digit: u8) -> Option<ModuleId> {
        MODULES.iter().find(|m| m.shortcut == digit).map(|m| m.id)
    }

    pub fn parse(s: &str) -> Option<ModuleId> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
    }

    /// Parse a module id, falling back to overview for anything unknown
    pub fn parse_or_default(s: &str) -> ModuleId {
        Self::parse(s).unwrap_or_else(|| {
            tracing::warn!(module = s, "unknown module id, falling back to overview");
            ModuleId::Overview
        })
    }
}

impl ModuleDescriptor {
    /// Badge label; counts above 99 show as "99+"
    pub fn badge_label(&self) -> Option<String> {
        self.badge.filter(|&n| n > 0).map(|n| {
            if n > 99 { "99+".to_string() } else { n.to_string() }
        })
    }

    /// Shortcut as shown in the sidebar, e.g. "Ctrl+3"
    pub fn shortcut_label(&self) -> String {
        format!("Ctrl+{}", self.shortcut)
    }

    /// Case-insensitive title/subtitle match; an empty query matches all
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.title.to_lowercase().contains(&query)
            || self.subtitle.to_lowercase().contains(&query)
    }
}
