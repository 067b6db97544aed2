//! Startup configuration
//!
//! Read once at launch from `config.toml` in the platform config directory.
//! View state toggled at runtime (theme, sidebar) is never written back.

use crate::DashResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Start in dark mode
    pub dark_mode: bool,
    /// Start with the sidebar collapsed
    pub sidebar_collapsed: bool,
    /// Module id shown at startup; unknown ids fall back to overview
    pub start_module: String,
    /// Enable debug logging
    pub debug: bool,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Default display duration in milliseconds
    pub duration_ms: u64,
    /// Oldest notifications are dropped beyond this many
    pub capacity: usize,
    /// How many toasts are drawn at once
    pub max_visible: usize,
    /// Show the welcome toast shortly after startup
    pub welcome: bool,
    /// Simulate incoming orders in the bell dropdown
    pub live_feed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_mode: true,
            sidebar_collapsed: false,
            start_module: "overview".to_string(),
            debug: false,
            notifications: NotificationConfig::default(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 5000,
            capacity: 20,
            max_visible: 5,
            welcome: true,
            live_feed: true,
        }
    }
}

impl Config {
    /// Load from `path`, logging and falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Load from `path`, surfacing read and parse errors
    pub fn load_from(path: &Path) -> DashResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> DashResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> DashResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write a default config file if none exists yet
    pub fn write_default(path: &Path) -> DashResult<()> {
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, Self::default().to_toml()?)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        if let Some(config_dir) = directories::ProjectDirs::from("vn", "mia", "miadash") {
            config_dir.config_dir().join("config.toml")
        } else {
            PathBuf::from("miadash_config.toml")
        }
    }
}
