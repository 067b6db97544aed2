//! Debounce and throttle helpers
//!
//! Both are driven by explicit `Instant`s from the caller's frame loop
//! instead of owning timers.

use std::time::{Duration, Instant};

/// Fires once, `wait` after the most recent trigger
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    pending_since: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending_since: None,
        }
    }

    /// Record an event; restarts the wait
    pub fn trigger(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    /// True exactly once when the wait has elapsed since the last trigger
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending_since {
            Some(since) if now.saturating_duration_since(since) >= self.wait => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Time left until the pending event fires
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending_since
            .map(|since| self.wait.saturating_sub(now.saturating_duration_since(since)))
    }

    pub fn cancel(&mut self) {
        self.pending_since = None;
    }
}

/// Lets a call through at most once per `limit`
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self { limit, last: None }
    }

    /// True if the call may run now; starts a new quiet window when it does
    pub fn try_fire(&mut self, now: Instant) -> bool {
        let open = self
            .last
            .is_none_or(|last| now.saturating_duration_since(last) >= self.limit);
        if open {
            self.last = Some(now);
        }
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_debounce_fires_after_quiet_period() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(ms(250));

        debounce.trigger(start);
        assert!(!debounce.poll(start + ms(100)));

        // Retrigger restarts the wait
        debounce.trigger(start + ms(200));
        assert!(!debounce.poll(start + ms(300)));
        assert!(debounce.poll(start + ms(450)));

        // Only once
        assert!(!debounce.poll(start + ms(900)));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_debounce_remaining_and_cancel() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(ms(250));
        assert_eq!(debounce.remaining(start), None);

        debounce.trigger(start);
        assert_eq!(debounce.remaining(start + ms(50)), Some(ms(200)));

        debounce.cancel();
        assert!(!debounce.poll(start + ms(500)));
    }

    #[test]
    fn test_throttle_limits_rate() {
        let start = Instant::now();
        let mut throttle = Throttle::new(ms(1000));

        assert!(throttle.try_fire(start));
        assert!(!throttle.try_fire(start + ms(10)));
        assert!(!throttle.try_fire(start + ms(999)));
        assert!(throttle.try_fire(start + ms(1000)));
        assert!(!throttle.try_fire(start + ms(1500)));
    }
}
