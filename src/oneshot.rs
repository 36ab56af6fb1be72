//! # One-Shot Timer
//!
//! A single cancellable timeout. The timer itself only does bookkeeping; the
//! actual wake-up comes from a [`Scheduler`], which hands the
//! [`TimerHandle`] back via [`OneShotTimer::fire`] once the delay has passed.
//!
//! Every [`arm`](OneShotTimer::arm) produces a fresh handle, and only the
//! handle that is currently pending can fire. A scheduler that delivers a
//! handle late (after a cancel, or after it was superseded) is harmless.
use crate::*;

/// Identifies one arming of a [`OneShotTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u32);

impl TimerHandle {
    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Delivers timeouts.
///
/// Implementations call back into whatever owns the [`OneShotTimer`] with
/// the handle once `delay` has elapsed. Neither method may block.
pub trait Scheduler {
    fn schedule_once(&mut self, delay: Duration, handle: TimerHandle);
    fn cancel(&mut self, handle: TimerHandle);
}

/// At most one pending timeout carrying an action of type `A`.
#[derive(Debug)]
pub struct OneShotTimer<S, A> {
    scheduler: S,
    next_id: u32,
    pending: Option<(TimerHandle, A)>,
}

impl<S: Scheduler, A> OneShotTimer<S, A> {
    pub const fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            next_id: 1,
            pending: None,
        }
    }

    /// Schedules `action` to fire after `delay`, superseding any pending
    /// timeout. The superseded action is dropped without firing.
    pub fn arm(&mut self, delay: Duration, action: A) -> TimerHandle {
        if let Some((old, _)) = self.pending.take() {
            self.scheduler.cancel(old);
        }
        let handle = TimerHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1).max(1);
        self.scheduler.schedule_once(delay, handle);
        self.pending = Some((handle, action));
        handle
    }

    /// Cancels `handle` if it is still pending. Returns whether anything was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.pending {
            Some((pending, _)) if pending == handle => {
                self.pending = None;
                self.scheduler.cancel(handle);
                true
            }
            _ => false,
        }
    }

    /// Called when the scheduler reports `handle` as due. Returns the action
    /// to run, or `None` if `handle` was cancelled or superseded.
    pub fn fire(&mut self, handle: TimerHandle) -> Option<A> {
        match self.pending {
            Some((pending, _)) if pending == handle => self.pending.take().map(|(_, a)| a),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<TimerHandle> {
        self.pending.as_ref().map(|(h, _)| *h)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
