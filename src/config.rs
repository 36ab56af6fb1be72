//! # Configuration
//!
//! Compile-time settings for the joystick feedback loop. Everything lives in
//! [`Config`], whose [`Config::DEFAULT`] is `const` so the shared controller
//! can be built in a `static`.
use crate::*;

/// Full-scale reading of the joystick ADC (12-bit).
pub const MAX_ADC: u16 = 4095;

/// Reading with the stick at rest.
pub const SENSOR_MID: u16 = MAX_ADC / 2 + 1;

/// Largest duty value accepted by the actuators.
pub const MAX_DUTY: u16 = 2000;

/// Minimum spacing between two accepted button presses.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);

/// How long a feedback glyph stays on the matrix.
pub const FEEDBACK_TIMEOUT: Duration = Duration::from_millis(1000);

/// Main loop period.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Status display geometry, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub width: u16,
    pub height: u16,
    /// Side of the square cursor marker.
    pub marker: u16,
}

impl DisplayGeometry {
    pub const SSD1306_128X64: Self = Self {
        width: 128,
        height: 64,
        marker: 8,
    };
}

/// Tunables for the whole loop.
///
/// # Examples
///
/// ```
/// use mb2_embassy_joystick::Config;
///
/// let config = Config::default();
/// assert_eq!(config.dead_zone.low(), 1748);
/// assert_eq!(config.dead_zone.high(), 2348);
/// assert_eq!(config.max_duty, 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub debounce_window: Duration,
    pub feedback_timeout: Duration,
    pub tick_period: Duration,
    pub max_adc: u16,
    pub max_duty: u16,
    pub dead_zone: DeadZone,
    pub display: DisplayGeometry,
    pub cursor: CursorMap,
}

impl Config {
    pub const DEFAULT: Self = Self {
        debounce_window: DEBOUNCE_WINDOW,
        feedback_timeout: FEEDBACK_TIMEOUT,
        tick_period: TICK_PERIOD,
        max_adc: MAX_ADC,
        max_duty: MAX_DUTY,
        dead_zone: DeadZone::DEFAULT,
        display: DisplayGeometry::SSD1306_128X64,
        cursor: CursorMap::DEFAULT,
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
