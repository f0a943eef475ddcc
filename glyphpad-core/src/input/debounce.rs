//! Time-window debounce for one button
//!
//! Contact bounce shows up as a burst of falling edges. The first edge is
//! accepted and flips the toggle; anything arriving within the window after
//! an accepted edge is dropped.

use super::events::{ButtonId, Transition};
use crate::config::DEBOUNCE_WINDOW_MS;

/// Debounce state for a single button
#[derive(Debug, Clone)]
pub struct Debouncer {
    button: ButtonId,
    window_ms: u64,
    last_accepted_ms: Option<u64>,
    on: bool,
}

impl Debouncer {
    /// Debouncer with the default window, toggle off
    pub const fn new(button: ButtonId) -> Self {
        Self::with_window(button, DEBOUNCE_WINDOW_MS)
    }

    pub const fn with_window(button: ButtonId, window_ms: u64) -> Self {
        Self {
            button,
            window_ms,
            last_accepted_ms: None,
            on: false,
        }
    }

    /// Feed a falling edge seen at `now_ms`
    ///
    /// Returns the transition if the edge was accepted. Never blocks.
    pub fn on_falling_edge(&mut self, now_ms: u64) -> Option<Transition> {
        if let Some(last) = self.last_accepted_ms {
            // A clock stepping backwards counts as no time passed
            if now_ms.saturating_sub(last) < self.window_ms {
                return None;
            }
        }

        self.on = !self.on;
        self.last_accepted_ms = Some(now_ms);
        Some(Transition {
            button: self.button,
            on: self.on,
            at_ms: now_ms,
        })
    }

    pub fn button(&self) -> ButtonId {
        self.button
    }

    /// Current toggle state
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn last_accepted_ms(&self) -> Option<u64> {
        self.last_accepted_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_edge_accepted() {
        let mut deb = Debouncer::new(ButtonId::A);
        assert!(!deb.is_on());

        let t = deb.on_falling_edge(0).unwrap();
        assert_eq!(
            t,
            Transition {
                button: ButtonId::A,
                on: true,
                at_ms: 0
            }
        );
        assert!(deb.is_on());
    }

    #[test]
    fn test_399_rejected() {
        let mut deb = Debouncer::new(ButtonId::A);
        assert!(deb.on_falling_edge(1000).is_some());
        assert!(deb.on_falling_edge(1399).is_none());
        assert!(deb.is_on());
    }

    #[test]
    fn test_400_accepted() {
        let mut deb = Debouncer::new(ButtonId::B);
        assert!(deb.on_falling_edge(1000).is_some());
        let t = deb.on_falling_edge(1400).unwrap();
        assert!(!t.on);
        assert_eq!(t.button, ButtonId::B);
    }

    #[test]
    fn test_401_accepted_twice_restores() {
        let mut deb = Debouncer::new(ButtonId::A);
        assert!(deb.on_falling_edge(1000).is_some());
        assert!(deb.on_falling_edge(1401).is_some());
        assert!(!deb.is_on());
        assert_eq!(deb.last_accepted_ms(), Some(1401));
    }

    #[test]
    fn test_rejected_edge_does_not_extend_window() {
        let mut deb = Debouncer::new(ButtonId::A);
        deb.on_falling_edge(0);
        assert!(deb.on_falling_edge(150).is_none());
        // Window counts from the accepted edge, not the bounce
        assert!(deb.on_falling_edge(450).is_some());
    }

    #[test]
    fn test_clock_backwards_rejected() {
        let mut deb = Debouncer::new(ButtonId::A);
        deb.on_falling_edge(5000);
        assert!(deb.on_falling_edge(10).is_none());
        assert_eq!(deb.last_accepted_ms(), Some(5000));
    }

    #[test]
    fn test_custom_window() {
        let mut deb = Debouncer::with_window(ButtonId::A, 50);
        deb.on_falling_edge(0);
        assert!(deb.on_falling_edge(49).is_none());
        assert!(deb.on_falling_edge(50).is_some());
    }

    proptest! {
        #[test]
        fn prop_accepted_edges_are_spaced(times in proptest::collection::vec(0u64..10_000, 1..50)) {
            let mut times = times;
            times.sort_unstable();
            let mut deb = Debouncer::new(ButtonId::A);
            let mut last: Option<u64> = None;
            let mut accepted = 0u32;

            for t in times {
                if let Some(tr) = deb.on_falling_edge(t) {
                    if let Some(prev) = last {
                        prop_assert!(tr.at_ms - prev >= DEBOUNCE_WINDOW_MS);
                    }
                    last = Some(tr.at_ms);
                    accepted += 1;
                    prop_assert_eq!(tr.on, accepted % 2 == 1);
                }
            }

            prop_assert!(accepted >= 1);
            prop_assert_eq!(deb.is_on(), accepted % 2 == 1);
        }

        #[test]
        fn prop_single_burst_one_toggle(start in 0u64..1_000_000, offsets in proptest::collection::vec(0u64..400, 0..20)) {
            let mut deb = Debouncer::new(ButtonId::B);
            prop_assert!(deb.on_falling_edge(start).is_some());
            for off in offsets {
                prop_assert!(deb.on_falling_edge(start + off).is_none());
            }
            prop_assert!(deb.is_on());
        }
    }
}
