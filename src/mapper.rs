//! # Analog Mapping
//!
//! Turns raw joystick samples into two unrelated things:
//!
//! - an actuator **intensity**: distance from the rest position, with a
//!   dead-zone around the centre and the sign discarded;
//! - a **cursor position** on the status display, via a fixed affine map per
//!   axis.
//!
//! ```text
//!            LOW        HIGH
//!   0 ........|==========|........ MAX_ADC
//!   LOW - raw      0       raw - HIGH
//! ```
use crate::*;

use num_traits::float::FloatCore;

/// Which joystick axis a reading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    X,
    Y,
}

/// One pair of readings taken in the same loop tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSample {
    pub x: u16,
    pub y: u16,
}

impl InputSample {
    /// Builds a sample from driver readings, clamping each to `0..=max_adc`.
    pub fn clamped(x: i32, y: i32, max_adc: u16) -> Self {
        Self {
            x: clamp_raw(x, max_adc),
            y: clamp_raw(y, max_adc),
        }
    }
}

/// Clamps a driver reading into the sensor range.
pub fn clamp_raw(raw: i32, max_adc: u16) -> u16 {
    raw.clamp(0, max_adc as i32) as u16
}

/// Inclusive range of readings treated as "at rest".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadZone {
    low: u16,
    high: u16,
}

impl DeadZone {
    /// `2048 ± 300`, symmetric about the sensor midpoint.
    pub const DEFAULT: Self = Self::centered(SENSOR_MID, 300);

    /// # Panics
    ///
    /// If `low > high`.
    pub const fn new(low: u16, high: u16) -> Self {
        assert!(low <= high, "dead-zone bounds reversed");
        Self { low, high }
    }

    /// Symmetric zone `mid - half ..= mid + half`, saturating at the type
    /// bounds.
    pub const fn centered(mid: u16, half: u16) -> Self {
        Self {
            low: mid.saturating_sub(half),
            high: mid.saturating_add(half),
        }
    }

    pub const fn low(&self) -> u16 {
        self.low
    }

    pub const fn high(&self) -> u16 {
        self.high
    }

    pub fn contains(&self, raw: u16) -> bool {
        (self.low..=self.high).contains(&raw)
    }
}

impl Default for DeadZone {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Per-axis and combined intensity for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intensity {
    pub x: u16,
    pub y: u16,
}

impl Intensity {
    /// Level of whichever axis is displaced further.
    pub fn level(&self) -> u16 {
        self.x.max(self.y)
    }
}

/// Dead-zone intensity mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalogMapper {
    dead_zone: DeadZone,
    max_adc: u16,
}

impl AnalogMapper {
    pub const fn new(dead_zone: DeadZone, max_adc: u16) -> Self {
        Self { dead_zone, max_adc }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.dead_zone, config.max_adc)
    }

    /// Maps one raw reading to an intensity.
    ///
    /// Readings above the sensor range are clamped first. There is no upper
    /// bound on the result beyond that; clamp to the actuator's duty range
    /// before output.
    pub fn intensity(&self, raw: u16) -> u16 {
        let raw = raw.min(self.max_adc);
        if self.dead_zone.contains(raw) {
            0
        } else if raw > self.dead_zone.high {
            raw - self.dead_zone.high
        } else {
            self.dead_zone.low - raw
        }
    }

    pub fn combine(&self, sample: InputSample) -> Intensity {
        Intensity {
            x: self.intensity(sample.x),
            y: self.intensity(sample.y),
        }
    }
}

impl Default for AnalogMapper {
    fn default() -> Self {
        Self::new(DeadZone::DEFAULT, MAX_ADC)
    }
}

/// `floor(gain * raw + offset)` for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub gain: f32,
    pub offset: f32,
}

impl Affine {
    pub fn apply(&self, raw: u16) -> i32 {
        (self.gain * raw as f32 + self.offset).floor() as i32
    }
}

/// Pixel position of the cursor marker's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: u16,
    pub y: u16,
}

/// Sample to display position. Shares nothing with [`AnalogMapper`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorMap {
    pub x: Affine,
    pub y: Affine,
}

impl CursorMap {
    /// Maps roughly `10..=4075` onto `10..=102` horizontally and onto
    /// `44..=10` vertically (Y is inverted).
    pub const DEFAULT: Self = Self {
        x: Affine {
            gain: 0.0226,
            offset: 9.774,
        },
        y: Affine {
            gain: -0.00836,
            offset: 44.08,
        },
    };

    /// Position of the marker, kept fully inside `display`.
    pub fn locate(&self, sample: InputSample, display: &DisplayGeometry) -> Cursor {
        let max_x = display.width.saturating_sub(display.marker) as i32;
        let max_y = display.height.saturating_sub(display.marker) as i32;
        Cursor {
            x: self.x.apply(sample.x).clamp(0, max_x) as u16,
            y: self.y.apply(sample.y).clamp(0, max_y) as u16,
        }
    }
}

impl Default for CursorMap {
    fn default() -> Self {
        Self::DEFAULT
    }
}
