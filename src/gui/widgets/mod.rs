//! Reusable GUI Widgets
//!
//! Custom widgets for the miadash GUI.

pub mod card;
pub mod header;
pub mod nav_item;
pub mod status_badge;
pub mod status_bar;

pub use card::{Card, metric_card};
pub use header::{HeaderBar, HeaderResponse};
pub use nav_item::NavItem;
pub use status_badge::StatusBadge;
