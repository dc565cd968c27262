//! Coalescing of rapid global-filter input.
//!
//! Time is passed in by the caller, so the debouncer owns no timers and is
//! fully deterministic under test.

use std::time::{Duration, Instant};

/// Holds the most recent uncommitted search text until input goes quiet.
#[derive(Debug, Clone)]
pub struct GlobalFilterDebouncer {
    delay: Duration,
    pending: Option<PendingInput>,
}

#[derive(Debug, Clone)]
struct PendingInput {
    value: String,
    last_changed: Instant,
}

impl GlobalFilterDebouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    #[must_use]
    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Record new input. Replaces any earlier pending value and restarts
    /// the quiet period.
    pub fn input(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some(PendingInput {
            value: value.into(),
            last_changed: now,
        });
    }

    /// The value waiting to be committed, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.value.as_str())
    }

    /// Whether the quiet period has passed for the pending value.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.last_changed) >= self.delay)
    }

    /// Take the pending value if its quiet period has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.is_due(now) {
            self.flush()
        } else {
            None
        }
    }

    /// Take the pending value immediately.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without committing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commits_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = GlobalFilterDebouncer::from_millis(300);
        d.input("a", t0);
        assert_eq!(d.poll(t0 + Duration::from_millis(299)), None);
        assert_eq!(d.poll(t0 + Duration::from_millis(300)), Some("a".to_string()));
        assert_eq!(d.pending(), None);
    }

    #[test]
    fn newer_input_restarts_the_clock() {
        let t0 = Instant::now();
        let mut d = GlobalFilterDebouncer::from_millis(300);
        d.input("a", t0);
        d.input("ab", t0 + Duration::from_millis(200));
        assert_eq!(d.poll(t0 + Duration::from_millis(400)), None);
        assert_eq!(d.poll(t0 + Duration::from_millis(500)), Some("ab".to_string()));
    }

    #[test]
    fn flush_and_cancel() {
        let t0 = Instant::now();
        let mut d = GlobalFilterDebouncer::from_millis(300);
        d.input("x", t0);
        assert_eq!(d.flush(), Some("x".to_string()));
        d.input("y", t0);
        d.cancel();
        assert!(!d.is_due(t0 + Duration::from_secs(1)));
    }
}
