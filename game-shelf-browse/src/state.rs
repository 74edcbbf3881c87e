//! Filter-state controller: raw input events in, committed filter
//! mutations out.
//!
//! The controller owns no filtering or rendering logic. Each commit it
//! reports is followed by exactly one filter + render pass, driven by
//! the caller. Search text is debounced; platform and letter changes
//! commit immediately.

use std::time::{Duration, Instant};

use crate::filter::FilterState;

/// Quiescent interval before pending search input commits.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(250);

struct Pending {
    value: String,
    deadline: Instant,
}

/// Explicit debounce state: the latest submitted value plus its
/// deadline. A newer submission supersedes the pending one entirely,
/// so the commit that eventually fires always carries the latest
/// value, never one captured when debouncing began.
pub struct Debouncer {
    window: Duration,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record an input event, resetting the deadline.
    pub fn submit(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            value: value.into(),
            deadline: now + self.window,
        });
    }

    /// Take the pending value if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| p.deadline <= now) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Take the pending value immediately, window or not. Used when
    /// the input source is already quiescent (e.g. line-based input).
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Thin dispatcher from UI events to [`FilterState`] commits.
pub struct BrowseController {
    state: FilterState,
    debounce: Debouncer,
}

impl Default for BrowseController {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseController {
    pub fn new() -> Self {
        Self::with_window(DEBOUNCE_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            state: FilterState::default(),
            debounce: Debouncer::new(window),
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Raw search text input. Not committed yet; the commit fires from
    /// [`poll`](Self::poll) or [`flush`](Self::flush).
    pub fn search_input(&mut self, raw: &str, now: Instant) {
        self.debounce.submit(raw, now);
    }

    /// Commit pending search input if its debounce window elapsed.
    /// Returns true when the caller owes one filter + render pass.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debounce.poll(now) {
            Some(raw) => {
                self.state.set_search(&raw);
                true
            }
            None => false,
        }
    }

    /// Commit pending search input immediately.
    pub fn flush(&mut self) -> bool {
        match self.debounce.flush() {
            Some(raw) => {
                self.state.set_search(&raw);
                true
            }
            None => false,
        }
    }

    /// Platform selection commits immediately, no debounce.
    pub fn select_platform(&mut self, platform: Option<&str>) -> bool {
        self.state.set_platform(platform.map(str::to_string));
        true
    }

    /// Letter selection commits immediately, normalized to uppercase
    /// (or `'#'`).
    pub fn select_letter(&mut self, letter: Option<char>) -> bool {
        self.state.set_letter(letter);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_of_inputs_commits_once_with_last_value() {
        let mut ctl = BrowseController::with_window(Duration::from_millis(250));
        let start = Instant::now();

        ctl.search_input("m", start);
        ctl.search_input("ma", start + Duration::from_millis(50));
        ctl.search_input("MARIO ", start + Duration::from_millis(100));

        // Window measured from the *last* event.
        assert!(!ctl.poll(start + Duration::from_millis(200)));
        assert!(ctl.poll(start + Duration::from_millis(350)));
        assert_eq!(ctl.state().search(), "mario");

        // Exactly one recompute: nothing left pending.
        assert!(!ctl.poll(start + Duration::from_millis(600)));
    }

    #[test]
    fn newer_input_supersedes_pending_value() {
        let mut debounce = Debouncer::new(Duration::from_millis(100));
        let start = Instant::now();
        debounce.submit("old", start);
        debounce.submit("new", start + Duration::from_millis(150));
        // The old deadline has passed, but the old value is gone.
        assert_eq!(debounce.poll(start + Duration::from_millis(200)), None);
        assert_eq!(
            debounce.poll(start + Duration::from_millis(250)),
            Some("new".to_string())
        );
    }

    #[test]
    fn flush_commits_without_waiting() {
        let mut ctl = BrowseController::new();
        ctl.search_input("  Chrono  ", Instant::now());
        assert!(ctl.flush());
        assert_eq!(ctl.state().search(), "chrono");
        assert!(!ctl.flush());
    }

    #[test]
    fn platform_and_letter_commit_immediately() {
        let mut ctl = BrowseController::new();
        assert!(ctl.select_platform(Some("SNES")));
        assert_eq!(ctl.state().platform(), Some("SNES"));

        assert!(ctl.select_letter(Some('c')));
        assert_eq!(ctl.state().letter(), Some('C'));

        assert!(ctl.select_letter(Some('3')));
        assert_eq!(ctl.state().letter(), Some('#'));

        assert!(ctl.select_platform(None));
        assert_eq!(ctl.state().platform(), None);
    }

    #[test]
    fn empty_poll_is_quiet() {
        let mut ctl = BrowseController::new();
        assert!(!ctl.poll(Instant::now()));
        assert!(!ctl.debounce.is_pending());
    }
}
