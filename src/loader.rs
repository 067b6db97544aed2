//! Loading overlay state
//!
//! One full-screen overlay, one visibility flag. Opening while open only
//! replaces the message.

use std::time::Instant;

pub const DEFAULT_MESSAGE: &str = "Loading...";

#[derive(Debug, Clone, Default)]
pub struct LoadingOverlay {
    visible: bool,
    message: Option<String>,
    shown_since: Option<Instant>,
}

impl LoadingOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the overlay with `message`, or the default message when `None`.
    /// An empty message shows the spinner alone.
    pub fn show(&mut self, message: Option<&str>, now: Instant) {
        let message = message.unwrap_or(DEFAULT_MESSAGE);
        self.message = (!message.is_empty()).then(|| message.to_string());
        if !self.visible {
            self.visible = true;
            self.shown_since = Some(now);
            tracing::debug!(message = message, "loader shown");
        } else {
            tracing::trace!(message = message, "loader message updated");
        }
    }

    /// Hide the overlay; no-op when hidden
    pub fn hide(&mut self) {
        if self.visible {
            self.visible = false;
            self.shown_since = None;
            tracing::debug!("loader hidden");
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|_| self.visible)
    }

    /// When the current overlay was opened, for the spinner phase
    pub fn shown_since(&self) -> Option<Instant> {
        self.shown_since
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_twice_keeps_single_overlay_with_latest_message() {
        let start = Instant::now();
        let mut loader = LoadingOverlay::new();
        loader.show(Some("Fetching orders"), start);
        loader.show(Some("Building report"), start + std::time::Duration::from_secs(1));

        assert!(loader.is_visible());
        assert_eq!(loader.message(), Some("Building report"));
        // The spinner keeps its original phase
        assert_eq!(loader.shown_since(), Some(start));
    }

    #[test]
    fn test_default_and_empty_message() {
        let now = Instant::now();
        let mut loader = LoadingOverlay::new();
        loader.show(None, now);
        assert_eq!(loader.message(), Some(DEFAULT_MESSAGE));

        loader.show(Some(""), now);
        assert_eq!(loader.message(), None);
        assert!(loader.is_visible());
    }

    #[test]
    fn test_hide_when_hidden_is_noop() {
        let mut loader = LoadingOverlay::new();
        loader.hide();
        assert!(!loader.is_visible());
        assert_eq!(loader.message(), None);

        loader.show(None, Instant::now());
        loader.hide();
        loader.hide();
        assert!(!loader.is_visible());
        assert_eq!(loader.shown_since(), None);
    }
}
