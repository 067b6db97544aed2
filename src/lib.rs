use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse failed: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Config serialize failed: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
    #[error("Terminal error: {0}")]
    Terminal(String),
}

pub type DashResult<T> = Result<T, DashError>;

pub mod animation;
pub mod config;
pub mod content;
pub mod dashboard;
pub mod enhance;
pub mod format;
pub mod loader;
pub mod logging;
pub mod modules;
pub mod notify;
pub mod shell;
pub mod themes;
pub mod timing;
pub mod tui;

#[cfg(feature = "gui")]
pub mod gui;

// Re-export commonly used types
pub use config::Config;
pub use dashboard::Dashboard;
pub use modules::ModuleId;
pub use notify::{NotificationCenter, NotificationId, NotificationKind};
pub use shell::ShellState;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let error = DashError::Terminal("no tty".into());
        assert_eq!(error.to_string(), "Terminal error: no tty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: DashError = io.into();
        assert!(matches!(error, DashError::Io(_)));
    }
}
