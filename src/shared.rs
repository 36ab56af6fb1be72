//! # Shared Controller
//!
//! The [`FeedbackController`] is touched from two places: button and alarm
//! handlers, which may preempt at any point, and the main loop. Every access
//! goes through a critical section, so each handler call and each main-loop
//! drive step is atomic with respect to the other side.
//!
//! ```rust,ignore
//! static CONTROLLER: Shared<AlarmScheduler> =
//!     Shared::new(FeedbackController::new(AlarmScheduler, &Config::DEFAULT));
//! ```
use crate::*;

use core::cell::RefCell;
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

pub struct Shared<S> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<FeedbackController<S>>>,
}

impl<S: Scheduler> Shared<S> {
    pub const fn new(controller: FeedbackController<S>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(controller)),
        }
    }

    /// Runs `f` on the controller inside a critical section.
    ///
    /// # Panics
    ///
    /// If called again from inside `f`.
    pub fn lock<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut FeedbackController<S>) -> R,
    {
        self.inner.lock(|controller| f(&mut controller.borrow_mut()))
    }

    pub fn state(&self) -> FeedbackState {
        self.lock(|controller| controller.state())
    }

    pub fn on_button<M, O>(&self, event: ButtonEvent, matrix: &mut M, outputs: &mut O) -> Outcome
    where
        M: MatrixSink,
        O: ActuatorSink,
    {
        self.lock(|controller| controller.on_button(event, matrix, outputs))
    }

    /// Stamps the press with `clock` inside the critical section, so stamps
    /// are ordered the same way presses are processed.
    pub fn press<C, M, O>(&self, button: Button, clock: &C, matrix: &mut M, outputs: &mut O) -> Outcome
    where
        C: Clock,
        M: MatrixSink,
        O: ActuatorSink,
    {
        self.lock(|controller| {
            let event = ButtonEvent::new(button, clock.now());
            controller.on_button(event, matrix, outputs)
        })
    }

    pub fn on_timer<M: MatrixSink>(&self, handle: TimerHandle, matrix: &mut M) -> bool {
        self.lock(|controller| controller.on_timer(handle, matrix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ManualClock, Outputs, RecordingMatrix, SimScheduler};

    #[test]
    fn press_uses_clock_and_debounces() {
        let shared = Shared::new(FeedbackController::new(SimScheduler::new(), &Config::DEFAULT));
        let clock = ManualClock::default();
        let mut matrix = RecordingMatrix::default();
        let mut outputs = Outputs::default();

        clock.set(500);
        let outcome = shared.press(Button::B, &clock, &mut matrix, &mut outputs);
        assert_eq!(
            outcome,
            Outcome::SlotAdvanced {
                from: Slot::One,
                to: Slot::Two
            }
        );
        clock.set(650);
        let outcome = shared.press(Button::B, &clock, &mut matrix, &mut outputs);
        assert_eq!(outcome, Outcome::Suppressed);
        assert_eq!(shared.state().selected, Slot::Two);
        assert_eq!(matrix.plots(), 1);
        assert_eq!(outputs.writes(), 1);
    }

    #[test]
    fn timer_goes_through_lock() {
        let shared = Shared::new(FeedbackController::new(SimScheduler::new(), &Config::DEFAULT));
        let mut matrix = RecordingMatrix::default();
        let mut outputs = Outputs::default();

        let event = ButtonEvent::new(Button::A, Instant::from_millis(0));
        shared.on_button(event, &mut matrix, &mut outputs);
        let handle = shared.state().pending.unwrap();
        assert!(shared.on_timer(handle, &mut matrix));
        assert!(!shared.on_timer(handle, &mut matrix));
        assert_eq!(matrix.current(), None);
        assert!(!shared.state().mode_enabled);
    }
}
