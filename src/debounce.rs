//! # Button Debounce
//!
//! Time-window debounce for edge-triggered buttons: an edge is accepted only
//! if at least [`DEBOUNCE_WINDOW`] has passed since the last accepted edge.
//!
//! There is one gate for *all* buttons. Pressing A and then B within the
//! window drops the B press. Per-button debouncing would need one
//! [`DebounceGate`] per [`Button`].
use crate::*;

/// Logical buttons wired to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    A,
    B,
    /// Joystick push switch. Takes part in debouncing but drives nothing.
    Aux,
}

/// A falling edge on one of the buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    pub button: Button,
    pub at: Instant,
}

impl ButtonEvent {
    pub fn new(button: Button, at: Instant) -> Self {
        Self { button, at }
    }
}

/// True iff `event_time` is at least `window` after `last_accepted`.
///
/// An event stamped before `last_accepted` counts as zero elapsed time.
pub fn admit(event_time: Instant, last_accepted: Instant, window: Duration) -> bool {
    event_time
        .checked_duration_since(last_accepted)
        .map_or(false, |elapsed| elapsed >= window)
}

/// Single shared debounce gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceGate {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl DebounceGate {
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    /// Decides whether the edge at `now` is a real press, and if so records it.
    ///
    /// The very first edge is always admitted.
    pub fn admit(&mut self, now: Instant) -> bool {
        let admitted = match self.last_accepted {
            None => true,
            Some(last) => admit(now, last, self.window),
        };
        if admitted {
            self.last_accepted = Some(now);
        }
        admitted
    }

    pub fn last_accepted(&self) -> Option<Instant> {
        self.last_accepted
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(t: u64) -> Instant {
        Instant::from_millis(t)
    }

    #[test]
    fn window_boundary() {
        let w = DEBOUNCE_WINDOW;
        assert!(!admit(ms(199), ms(0), w));
        assert!(admit(ms(200), ms(0), w));
        assert!(admit(ms(5_000), ms(0), w));
        assert!(!admit(ms(10), ms(50), w));
    }

    #[test]
    fn first_edge_admitted() {
        let mut gate = DebounceGate::default();
        assert_eq!(gate.last_accepted(), None);
        assert!(gate.admit(ms(0)));
        assert_eq!(gate.last_accepted(), Some(ms(0)));
    }

    #[test]
    fn suppressed_edges_do_not_move_the_window() {
        let mut gate = DebounceGate::default();
        assert!(gate.admit(ms(1000)));
        assert!(!gate.admit(ms(1150)));
        assert!(!gate.admit(ms(1199)));
        // Measured from 1000, not from the suppressed 1199.
        assert!(gate.admit(ms(1200)));
        assert_eq!(gate.last_accepted(), Some(ms(1200)));
    }

    #[test]
    fn arbitrary_sequence_matches_reference() {
        let times = [
            0, 10, 199, 200, 201, 399, 400, 650, 651, 849, 850, 2000, 2001, 2199, 2200,
        ];
        let mut gate = DebounceGate::default();
        let mut last: Option<u64> = None;
        for &t in times.iter() {
            let expected = match last {
                None => true,
                Some(l) => t - l >= 200,
            };
            assert_eq!(gate.admit(ms(t)), expected, "t = {t}");
            if expected {
                last = Some(t);
            }
        }
    }
}
