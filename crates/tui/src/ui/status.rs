//! Inline status message shown below the submit button.
//!
//! A status has a level and a time-to-live. Showing a new status replaces the
//! old one and restarts the timer; once the TTL has elapsed the display is
//! cleared on the next tick.

use std::time::{Duration, Instant};

use contact_config::constants::DEFAULT_STATUS_TTL_SECS;

/// Severity of an inline status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Error,
}

/// A single status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub shown_at: Instant,
    pub ttl: Duration,
}

impl StatusMessage {
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.ttl
    }

    /// Remaining display time at `now`.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.ttl
            .saturating_sub(now.saturating_duration_since(self.shown_at))
    }
}

/// Holds at most one status message.
#[derive(Debug, Clone)]
pub struct StatusDisplay {
    current: Option<StatusMessage>,
    ttl: Duration,
}

impl Default for StatusDisplay {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_STATUS_TTL_SECS))
    }
}

impl StatusDisplay {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Show `text`, replacing any current status.
    pub fn show(&mut self, text: impl Into<String>, level: StatusLevel, now: Instant) {
        self.current = Some(StatusMessage {
            text: text.into(),
            level,
            shown_at: now,
            ttl: self.ttl,
        });
    }

    pub fn success(&mut self, text: impl Into<String>, now: Instant) {
        self.show(text, StatusLevel::Success, now);
    }

    pub fn error(&mut self, text: impl Into<String>, now: Instant) {
        self.show(text, StatusLevel::Error, now);
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    /// Drop the status if it has expired. Returns true when something was cleared.
    pub fn prune(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|s| s.is_expired_at(now)) {
            self.current = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_expires_after_ttl() {
        let start = Instant::now();
        let mut display = StatusDisplay::new(Duration::from_secs(6));
        display.success("sent", start);

        assert!(!display.prune(start + Duration::from_secs(5)));
        assert!(display.current().is_some());

        assert!(display.prune(start + Duration::from_secs(6)));
        assert!(display.current().is_none());
    }

    #[test]
    fn test_new_status_replaces_and_restarts_timer() {
        let start = Instant::now();
        let mut display = StatusDisplay::new(Duration::from_secs(6));
        display.error("first", start);
        display.success("second", start + Duration::from_secs(4));

        // Original timer would have fired here.
        assert!(!display.prune(start + Duration::from_secs(7)));
        let current = display.current().expect("status present");
        assert_eq!(current.text, "second");
        assert_eq!(current.level, StatusLevel::Success);
        assert_eq!(
            current.remaining_at(start + Duration::from_secs(7)),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn test_default_ttl_is_six_seconds() {
        assert_eq!(StatusDisplay::default().ttl(), Duration::from_secs(6));
    }
}
