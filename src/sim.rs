//! Host-side stand-ins for the board: a simulated scheduler and clock, and
//! sinks that record what they were told.
use crate::*;

use core::cell::Cell;
use std::vec::Vec;

/// Scheduler driven by an explicit simulated clock.
#[derive(Debug, Default)]
pub struct SimScheduler {
    now: u64,
    queue: Vec<(u64, TimerHandle)>,
}

impl SimScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock to `t` and returns the handles that became due, in
    /// deadline order.
    pub fn advance_to(&mut self, t: Instant) -> Vec<TimerHandle> {
        self.now = self.now.max(t.as_millis());
        let now = self.now;
        let mut due: Vec<_> = self.queue.iter().copied().filter(|(d, _)| *d <= now).collect();
        self.queue.retain(|(d, _)| *d > now);
        due.sort_by_key(|(d, _)| *d);
        due.into_iter().map(|(_, h)| h).collect()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }
}

impl Scheduler for SimScheduler {
    fn schedule_once(&mut self, delay: Duration, handle: TimerHandle) {
        self.queue.push((self.now + delay.as_millis(), handle));
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.queue.retain(|(_, h)| *h != handle);
    }
}

/// Clock the test sets by hand.
#[derive(Debug, Default)]
pub struct ManualClock(Cell<u64>);

impl ManualClock {
    pub fn set(&self, ms: u64) {
        self.0.set(ms);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.0.get())
    }
}

/// Matrix that remembers the glyph on it.
#[derive(Debug, Default)]
pub struct RecordingMatrix {
    current: Option<Glyph>,
    plots: usize,
    turn_offs: usize,
}

impl RecordingMatrix {
    pub fn current(&self) -> Option<Glyph> {
        self.current
    }

    pub fn plots(&self) -> usize {
        self.plots
    }

    pub fn turn_offs(&self) -> usize {
        self.turn_offs
    }
}

impl MatrixSink for RecordingMatrix {
    fn plot(&mut self, glyph: Glyph) {
        self.current = Some(glyph);
        self.plots += 1;
    }

    fn turn_off(&mut self) {
        self.current = None;
        self.turn_offs += 1;
    }
}

/// Last level written to each actuator.
#[derive(Debug, Default)]
pub struct Outputs {
    leds: [u16; 3],
    buzzer: u16,
    writes: usize,
}

impl Outputs {
    pub fn level(&self, actuator: Actuator) -> u16 {
        match actuator {
            Actuator::Led(slot) => self.leds[slot.index()],
            Actuator::Buzzer => self.buzzer,
        }
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ActuatorSink for Outputs {
    fn set_level(&mut self, actuator: Actuator, level: u16) {
        match actuator {
            Actuator::Led(slot) => self.leds[slot.index()] = level,
            Actuator::Buzzer => self.buzzer = level,
        }
        self.writes += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Clear,
    Rect(Rect, bool),
    Present,
}

/// Display that logs every call.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub calls: Vec<DrawCall>,
}

impl DisplaySink for RecordingDisplay {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn draw_rect(&mut self, rect: Rect, filled: bool) {
        self.calls.push(DrawCall::Rect(rect, filled));
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
}

/// Joystick with fixed readings, logging the order channels were read in.
#[derive(Debug, Default)]
pub struct FixedJoystick {
    pub x: i32,
    pub y: i32,
    pub reads: Vec<Channel>,
}

impl FixedJoystick {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            reads: Vec::new(),
        }
    }
}

impl AnalogSource for FixedJoystick {
    fn read(&mut self, channel: Channel) -> i32 {
        self.reads.push(channel);
        match channel {
            Channel::X => self.x,
            Channel::Y => self.y,
        }
    }
}
