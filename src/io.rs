//! # Peripheral Interfaces
//!
//! The core never touches hardware directly. Board code implements these
//! traits; tests implement them with recorders (see `sim`).
use crate::*;

/// Joystick ADC.
pub trait AnalogSource {
    /// Raw reading for `channel`. Values outside the sensor range are
    /// clamped by the caller.
    fn read(&mut self, channel: Channel) -> i32;
}

/// Output that can be driven to a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actuator {
    /// One of the three selectable indicator LEDs.
    Led(Slot),
    Buzzer,
}

/// PWM-style outputs. Fire-and-forget and idempotent.
pub trait ActuatorSink {
    fn set_level(&mut self, actuator: Actuator, level: u16);
}

/// Axis-aligned rectangle in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }
}

/// Graphical status display.
pub trait DisplaySink {
    fn clear(&mut self);
    fn draw_rect(&mut self, rect: Rect, filled: bool);
    /// Pushes the drawn frame to the panel.
    fn present(&mut self);
}

/// Small LED matrix used for transient feedback.
pub trait MatrixSink {
    fn plot(&mut self, glyph: Glyph);
    fn turn_off(&mut self);
}

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;
}
