//! Toast Notification Manager
//!
//! Ordered stack of transient notifications with timed expiry, click
//! dismissal and a bounded capacity. Time is always passed in by the caller,
//! so expiry is driven by the frame loop and is deterministic under test.
//!
//! Removal is two-phase: a notification first starts its slide-out, then is
//! purged once the exit animation has run. The removal itself is reported
//! exactly once, whichever of dismissal, expiry or eviction happens first.

use crate::animation::{Animation, AnimationFrame, DEFAULT_DURATION};
use crate::themes::{Color, palette};
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// Default display duration
pub const DEFAULT_DISPLAY: Duration = Duration::from_millis(5000);
/// Default capacity before the oldest entry is dropped
pub const DEFAULT_CAPACITY: usize = 20;
/// Default number of toasts drawn at once
pub const DEFAULT_MAX_VISIBLE: usize = 5;
/// Slide-in and slide-out length
pub const TRANSITION: Duration = DEFAULT_DURATION;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Warning,
        NotificationKind::Info,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    /// Emoji icon, used where no icon font is available
    pub fn emoji(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
            NotificationKind::Warning => "⚠️",
            NotificationKind::Info => "ℹ️",
        }
    }

    /// Accent color (left border, progress bar)
    pub fn color(&self) -> Color {
        match self {
            NotificationKind::Success => palette::SUCCESS,
            NotificationKind::Error => palette::DANGER,
            NotificationKind::Warning => palette::WARNING,
            NotificationKind::Info => palette::INFO,
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle returned by `show`, used for dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Why a notification left the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// Clicked or closed by the user
    Dismissed,
    /// Display duration elapsed
    Expired,
    /// Dropped to stay within capacity
    Evicted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub id: NotificationId,
    pub reason: RemovalReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Shown,
    Leaving { since: Instant },
}

/// A single notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Wall-clock creation time, for display
    pub shown_at: DateTime<Local>,
    pub created_at: Instant,
    pub duration: Duration,
    phase: Phase,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    pub fn is_leaving(&self) -> bool {
        matches!(self.phase, Phase::Leaving { .. })
    }

    /// Remaining display time as a fraction (1.0 = full, 0.0 = expired)
    pub fn remaining_fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.created_at).as_secs_f32();
        (1.0 - elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Slide-in/slide-out state; `distance` is the toast width
    pub fn frame(&self, now: Instant, distance: f32) -> AnimationFrame {
        match self.phase {
            Phase::Shown => Animation::SlideInRight {
                duration: TRANSITION,
                distance,
            }
            .frame(now.saturating_duration_since(self.created_at)),
            Phase::Leaving { since } => Animation::SlideOutRight {
                duration: TRANSITION,
                distance,
            }
            .frame(now.saturating_duration_since(since)),
        }
    }
}

/// Manages the notification stack
#[derive(Debug)]
pub struct NotificationCenter {
    items: VecDeque<Notification>,
    removals: Vec<Removal>,
    next_id: u64,
    capacity: usize,
    max_visible: usize,
    default_duration: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_CAPACITY, DEFAULT_MAX_VISIBLE, DEFAULT_DISPLAY)
    }

    pub fn with_limits(capacity: usize, max_visible: usize, default_duration: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            removals: Vec::new(),
            next_id: 1,
            capacity: capacity.max(1),
            max_visible: max_visible.max(1),
            default_duration,
        }
    }

    pub fn from_config(config: &crate::config::NotificationConfig) -> Self {
        Self::with_limits(
            config.capacity,
            config.max_visible,
            Duration::from_millis(config.duration_ms),
        )
    }

    /// Show a notification for the default duration
    pub fn show(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        now: Instant,
    ) -> NotificationId {
        self.show_for(kind, title, message, self.default_duration, now)
    }

    /// Show a notification for `duration`
    pub fn show_for(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        duration: Duration,
        now: Instant,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let notification = Notification {
            id,
            kind,
            title: title.into(),
            message: message.into(),
            shown_at: Local::now(),
            created_at: now,
            duration,
            phase: Phase::Shown,
        };
        tracing::debug!(%id, %kind, title = %notification.title, "notification shown");
        self.items.push_back(notification);

        while self.items.len() > self.capacity {
            if let Some(oldest) = self.items.pop_front() {
                if !oldest.is_leaving() {
                    tracing::debug!(id = %oldest.id, "notification evicted");
                    self.removals.push(Removal {
                        id: oldest.id,
                        reason: RemovalReason::Evicted,
                    });
                }
            }
        }

        id
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>, now: Instant) -> NotificationId {
        self.show(NotificationKind::Success, title, message, now)
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>, now: Instant) -> NotificationId {
        self.show(NotificationKind::Error, title, message, now)
    }

    pub fn warning(&mut self, title: impl Into<String>, message: impl Into<String>, now: Instant) -> NotificationId {
        self.show(NotificationKind::Warning, title, message, now)
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>, now: Instant) -> NotificationId {
        self.show(NotificationKind::Info, title, message, now)
    }

    /// Dismiss a notification. Unknown, already-leaving or already-purged ids
    /// are a no-op; returns whether this call removed it.
    pub fn remove(&mut self, id: NotificationId, now: Instant) -> bool {
        self.begin_leave(id, now, RemovalReason::Dismissed)
    }

    /// Dismiss the oldest notification still shown
    pub fn dismiss_oldest(&mut self, now: Instant) -> Option<NotificationId> {
        let id = self.items.iter().find(|n| !n.is_leaving())?.id;
        self.remove(id, now);
        Some(id)
    }

    /// Dismiss everything currently shown
    pub fn clear(&mut self, now: Instant) {
        let ids: Vec<_> = self
            .items
            .iter()
            .filter(|n| !n.is_leaving())
            .map(|n| n.id)
            .collect();
        for id in ids {
            self.remove(id, now);
        }
    }

    fn begin_leave(&mut self, id: NotificationId, now: Instant, reason: RemovalReason) -> bool {
        let Some(notification) = self.items.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        if notification.is_leaving() {
            return false;
        }
        notification.phase = Phase::Leaving { since: now };
        tracing::debug!(%id, ?reason, "notification removed");
        self.removals.push(Removal { id, reason });
        true
    }

    /// Advance timers: start the exit of expired notifications and purge those
    /// whose exit animation has finished
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<_> = self
            .items
            .iter()
            .filter(|n| !n.is_leaving() && n.is_expired(now))
            .map(|n| n.id)
            .collect();
        for id in expired {
            self.begin_leave(id, now, RemovalReason::Expired);
        }

        self.items.retain(|n| match n.phase {
            Phase::Shown => true,
            Phase::Leaving { since } => now.saturating_duration_since(since) < TRANSITION,
        });
    }

    /// Removals recorded since the last call
    pub fn take_removals(&mut self) -> Vec<Removal> {
        std::mem::take(&mut self.removals)
    }

    /// Entries to draw, oldest first, including those sliding out
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().take(self.max_visible)
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    /// Whether `id` is still shown (not leaving, not purged)
    pub fn is_active(&self, id: NotificationId) -> bool {
        self.get(id).is_some_and(|n| !n.is_leaving())
    }

    /// Number of notifications still shown
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_leaving()).count()
    }

    /// Entries in the stack, including those sliding out
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }
}

/// A line in the header bell dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// Position in the feed, increasing with every entry
    pub seq: u64,
    /// Toast behind the entry; `None` for feed-only events
    pub notification: Option<NotificationId>,
    pub kind: NotificationKind,
    pub message: String,
    /// `HH:MM`
    pub time: String,
}

/// Most recent notifications, kept after their toast is gone
#[derive(Debug, Clone)]
pub struct NotificationFeed {
    entries: VecDeque<FeedEntry>,
    limit: usize,
    next_seq: u64,
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::new(5)
    }
}

impl NotificationFeed {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
            next_seq: 1,
        }
    }

    /// Record a shown toast
    pub fn record(&mut self, notification: &Notification) {
        self.push_entry(
            Some(notification.id),
            notification.kind,
            notification.title.clone(),
            &notification.shown_at,
        );
    }

    /// Record an event that only appears in the bell dropdown
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>, at: &DateTime<Local>) {
        self.push_entry(None, kind, message.into(), at);
    }

    fn push_entry(
        &mut self,
        notification: Option<NotificationId>,
        kind: NotificationKind,
        message: String,
        at: &DateTime<Local>,
    ) {
        self.entries.push_back(FeedEntry {
            seq: self.next_seq,
            notification,
            kind,
            message,
            time: crate::format::format_clock(at),
        });
        self.next_seq += 1;
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    /// Newest entry
    pub fn latest(&self) -> Option<&FeedEntry> {
        self.entries.back()
    }

    /// Oldest first
    pub fn entries(&self) -> impl Iterator<Item = &FeedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
