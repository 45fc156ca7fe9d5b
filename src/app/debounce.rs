//! Caller-owned debounce timer for search input.
//!
//! The filter engine is cheap enough to run per keystroke, so debouncing is
//! optional. When used, the timer lives with the caller and is driven by
//! explicit instants; it never sleeps or spawns.
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use whispr_dash::app::SearchDebouncer;
//!
//! let mut debouncer = SearchDebouncer::new(Duration::from_millis(300));
//! let t0 = Instant::now();
//! debouncer.input("ro", t0);
//! debouncer.input("roa", t0 + Duration::from_millis(100));
//! assert_eq!(debouncer.poll(t0 + Duration::from_millis(200)), None);
//! assert_eq!(debouncer.poll(t0 + Duration::from_millis(400)), Some("roa".to_string()));
//! ```

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl SearchDebouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Records a keystroke; restarts the quiet period.
    pub fn input(&mut self, term: impl Into<String>, now: Instant) {
        self.pending = Some((term.into(), now + self.delay));
    }

    /// Releases the pending term once its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(term, _)| term),
            _ => None,
        }
    }

    /// Releases the pending term immediately, e.g. on Enter.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(term, _)| term)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Instant at which the pending term becomes due, for callers that wait
    /// on input with a timeout.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delay_releases_on_next_poll() {
        let mut d = SearchDebouncer::new(Duration::ZERO);
        let now = Instant::now();
        d.input("x", now);
        assert_eq!(d.poll(now), Some("x".to_string()));
        assert_eq!(d.poll(now), None);
    }

    #[test]
    fn deadline_restarts_on_each_input() {
        let delay = Duration::from_millis(300);
        let mut d = SearchDebouncer::new(delay);
        let t0 = Instant::now();
        assert_eq!(d.deadline(), None);

        d.input("a", t0);
        assert_eq!(d.deadline(), Some(t0 + delay));

        let t1 = t0 + Duration::from_millis(250);
        d.input("ab", t1);
        assert_eq!(d.deadline(), Some(t1 + delay));
        assert_eq!(d.poll(t0 + delay), None);
        assert_eq!(d.poll(t1 + delay), Some("ab".to_string()));
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn flush_and_cancel() {
        let mut d = SearchDebouncer::new(Duration::from_secs(10));
        let now = Instant::now();
        d.input("abc", now);
        assert!(d.is_pending());
        assert_eq!(d.flush(), Some("abc".to_string()));
        assert!(!d.is_pending());

        d.input("abc", now);
        d.cancel();
        assert_eq!(d.poll(now + Duration::from_secs(60)), None);
    }

    #[test]
    fn empty_term_is_still_delivered() {
        let mut d = SearchDebouncer::new(Duration::from_millis(5));
        let now = Instant::now();
        d.input("", now);
        assert_eq!(d.poll(now + Duration::from_millis(5)), Some(String::new()));
    }
}
