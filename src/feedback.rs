//! # Feedback Controller
//!
//! Owns the state shared between the button path and the main loop and turns
//! debounced button presses into transient matrix feedback.
//!
//! ## States
//!
//! ```text
//!            A / B (admitted)
//!   Idle ───────────────────────▶ Showing(glyph)
//!    ▲                              │   ▲
//!    │  timeout (pending handle)    │   │ A / B: cancel + re-arm
//!    └──────────────────────────────┘───┘
//! ```
//!
//! - **Button A** toggles whether the main loop drives its outputs.
//! - **Button B** silences the selected LED and moves to the next slot.
//! - **Aux** is debounced like the others but changes nothing.
//!
//! The timeout only clears the glyph; the mode flag and slot stay as they
//! are.
use crate::*;

/// One of the three indicator LEDs the intensity can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    One,
    Two,
    Three,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::One, Slot::Two, Slot::Three];

    /// Next slot in the ring One → Two → Three → One.
    pub fn next(self) -> Self {
        Slot::ALL[(self.index() + 1) % Slot::ALL.len()]
    }

    pub fn index(self) -> usize {
        match self {
            Slot::One => 0,
            Slot::Two => 1,
            Slot::Three => 2,
        }
    }
}

/// What a timeout does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revert {
    ClearGlyph,
}

/// Whether feedback is currently on the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Showing(Glyph),
}

/// Snapshot of the shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackState {
    pub mode_enabled: bool,
    pub selected: Slot,
    pub pending: Option<TimerHandle>,
}

/// Result of handling one button edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Dropped by the debounce gate.
    Suppressed,
    /// Admitted, but the button has no action.
    Ignored,
    ModeToggled { enabled: bool },
    SlotAdvanced { from: Slot, to: Slot },
}

pub struct FeedbackController<S> {
    gate: DebounceGate,
    timer: OneShotTimer<S, Revert>,
    timeout: Duration,
    mode_enabled: bool,
    selected: Slot,
    phase: Phase,
}

impl<S: Scheduler> FeedbackController<S> {
    /// Outputs enabled, slot one selected, nothing on the matrix.
    pub const fn new(scheduler: S, config: &Config) -> Self {
        Self {
            gate: DebounceGate::new(config.debounce_window),
            timer: OneShotTimer::new(scheduler),
            timeout: config.feedback_timeout,
            mode_enabled: true,
            selected: Slot::One,
            phase: Phase::Idle,
        }
    }

    /// Puts the matrix into the state `Idle` expects.
    pub fn start<M: MatrixSink>(&mut self, matrix: &mut M) {
        matrix.turn_off();
        self.phase = Phase::Idle;
    }

    /// Handles a button edge from the interrupt side.
    ///
    /// Any pending timeout is cancelled before the new effect is applied, and
    /// a fresh one armed after it.
    pub fn on_button<M, O>(&mut self, event: ButtonEvent, matrix: &mut M, outputs: &mut O) -> Outcome
    where
        M: MatrixSink,
        O: ActuatorSink,
    {
        if !self.gate.admit(event.at) {
            rprintln!("button {:?} bounced at {} ms", event.button, event.at.as_millis());
            return Outcome::Suppressed;
        }

        let (outcome, glyph) = match event.button {
            Button::A => {
                self.cancel_pending();
                self.mode_enabled = !self.mode_enabled;
                rprintln!("outputs {}", if self.mode_enabled { "on" } else { "off" });
                (
                    Outcome::ModeToggled {
                        enabled: self.mode_enabled,
                    },
                    Glyph::ArrowLeft,
                )
            }
            Button::B => {
                self.cancel_pending();
                let from = self.selected;
                outputs.set_level(Actuator::Led(from), 0);
                self.selected = from.next();
                rprintln!("LED slot {:?} -> {:?}", from, self.selected);
                (
                    Outcome::SlotAdvanced {
                        from,
                        to: self.selected,
                    },
                    Glyph::ArrowRight,
                )
            }
            Button::Aux => return Outcome::Ignored,
        };

        matrix.plot(glyph);
        rprintln!("showing {}", glyph);
        self.timer.arm(self.timeout, Revert::ClearGlyph);
        self.phase = Phase::Showing(glyph);
        outcome
    }

    /// Handles a timeout reported by the scheduler. Returns whether it was
    /// the live one; stale handles change nothing.
    pub fn on_timer<M: MatrixSink>(&mut self, handle: TimerHandle, matrix: &mut M) -> bool {
        match self.timer.fire(handle) {
            Some(Revert::ClearGlyph) => {
                matrix.turn_off();
                self.phase = Phase::Idle;
                rprintln!("feedback cleared");
                true
            }
            None => false,
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.timer.pending() {
            self.timer.cancel(handle);
        }
    }

    pub fn state(&self) -> FeedbackState {
        FeedbackState {
            mode_enabled: self.mode_enabled,
            selected: self.selected,
            pending: self.timer.pending(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode_enabled(&self) -> bool {
        self.mode_enabled
    }

    pub fn selected(&self) -> Slot {
        self.selected
    }

    pub fn scheduler(&self) -> &S {
        self.timer.scheduler()
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        self.timer.scheduler_mut()
    }
}
