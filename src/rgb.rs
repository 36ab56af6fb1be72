//! # Output Drive Module
//!
//! This module drives the two actuator kinds the core writes levels to:
//! the three LED slots, which are the pins of an external RGB LED dimmed
//! with software PWM, and the on-board speaker on a hardware PWM channel.
//!
//! ## Level Hand-off
//!
//! The core never touches a pin. It writes levels through [`SharedLevels`],
//! which stores them in a critical-section [`Mutex`]. The [`Rgb`] task picks
//! them up once per frame:
//! - **LED slots**: each level is scaled from `0..=MAX_DUTY` down to
//!   `0..=STEPS` on-ticks
//! - **Buzzer**: the level is the PWM duty directly, written only when it
//!   changes
//!
//! ## Timing Calculation
//!
//! The PWM timing is calculated as:
//! ```text
//! tick_time = 1_000_000 / (3 * frame_rate * STEPS)
//! ```
//! Where:
//! - `1_000_000`: Microseconds per second
//! - `3`: Number of LED slots
//! - `frame_rate`: Frames per second
//! - `STEPS`: On/off ticks per slot per frame
//!
//! A level of `MAX_DUTY` keeps its slot on for all `STEPS` ticks.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! let rgb = Rgb::new([red, green, blue], buzzer, 100);
//! rgb.run().await;
//! ```
use crate::*;

use core::cell::Cell;
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

/// Software PWM resolution per slot.
///
/// Levels below `MAX_DUTY / (2 * STEPS)` (about 16) round to zero on-ticks,
/// so the faintest stick displacements leave the LED dark while the buzzer,
/// which gets the full duty range, already sounds.
const STEPS: u32 = 64;

/// Buzzer PWM counter top; duty values share the actuator range.
const BUZZER_TOP: u16 = MAX_DUTY;

/// The three slot pins, indexed by [`Slot::index`].
type RgbPins = [Output<'static, AnyPin>; 3];

/// Last level per actuator: three slots, then the buzzer.
static LEVELS: Mutex<CriticalSectionRawMutex, Cell<[u16; 4]>> = Mutex::new(Cell::new([0; 4]));

fn get_levels() -> [u16; 4] {
    LEVELS.lock(|levels| levels.get())
}

/// Core-facing handle onto [`LEVELS`].
pub struct SharedLevels;

impl ActuatorSink for SharedLevels {
    fn set_level(&mut self, actuator: Actuator, level: u16) {
        let index = match actuator {
            Actuator::Led(slot) => slot.index(),
            Actuator::Buzzer => 3,
        };
        LEVELS.lock(|levels| {
            let mut current = levels.get();
            current[index] = level.min(MAX_DUTY);
            levels.set(current);
        });
    }
}

/// Software PWM for the LED slots plus the buzzer channel.
pub struct Rgb {
    /// GPIO pins for the slots, in [`Slot`] order.
    rgb: RgbPins,
    buzzer: pwm::SimplePwm<'static, peripherals::PWM0>,
    /// Slot levels scaled to `0..=STEPS`.
    steps: [u32; 3],
    /// Duty last written to the buzzer.
    buzzer_level: u16,
    /// PWM timing interval in microseconds.
    tick_time: u64,
}

impl Rgb {
    fn frame_tick_time(frame_rate: u64) -> u64 {
        1_000_000 / (3 * frame_rate * STEPS as u64)
    }

    /// Creates the output driver with every actuator off.
    ///
    /// The buzzer channel is set up for a 2 kHz tone (16 MHz / 4 / 2000) with
    /// its duty range matching `MAX_DUTY`, so a level maps onto it unscaled.
    ///
    /// # Arguments
    ///
    /// * `rgb` - Output pins for slots One, Two and Three
    /// * `buzzer` - PWM driver for the speaker, channel 0 in use
    /// * `frame_rate` - Slot refresh rate in frames per second
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// let red = Output::new(AnyPin::from(board.p9), Level::Low, OutputDrive::Standard);
    /// let green = Output::new(AnyPin::from(board.p8), Level::Low, OutputDrive::Standard);
    /// let blue = Output::new(AnyPin::from(board.p16), Level::Low, OutputDrive::Standard);
    /// let buzzer = pwm::SimplePwm::new_1ch(board.pwm0, board.speaker);
    /// let rgb = Rgb::new([red, green, blue], buzzer, 100);
    /// ```
    pub fn new(rgb: RgbPins, mut buzzer: pwm::SimplePwm<'static, peripherals::PWM0>, frame_rate: u64) -> Self {
        buzzer.set_prescaler(pwm::Prescaler::Div4);
        buzzer.set_max_duty(BUZZER_TOP);
        buzzer.set_duty(0, 0);
        Self {
            rgb,
            buzzer,
            steps: [0; 3],
            buzzer_level: 0,
            tick_time: Self::frame_tick_time(frame_rate),
        }
    }

    /// Rounds `level` to the nearest whole number of on-ticks.
    fn to_steps(level: u16) -> u32 {
        (level.min(MAX_DUTY) as u32 * STEPS + MAX_DUTY as u32 / 2) / MAX_DUTY as u32
    }

    /// Runs one PWM period for a single slot.
    ///
    /// The pin is driven high for `steps[led]` ticks and then low for the
    /// rest of the `STEPS` ticks. A slot at zero never goes high and one at
    /// `STEPS` never goes low, so neither end of the range flickers.
    ///
    /// # Arguments
    ///
    /// * `led` - Slot index (0-2), as given by [`Slot::index`]
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// // Half brightness on slot Two.
    /// self.steps[1] = STEPS / 2;
    /// self.step(1).await;
    /// ```
    async fn step(&mut self, led: usize) {
        let on = self.steps[led];
        if on > 0 {
            self.rgb[led].set_high();
            Timer::after_micros(on as u64 * self.tick_time).await;
            self.rgb[led].set_low();
        }
        let off = STEPS - on;
        if off > 0 {
            Timer::after_micros(off as u64 * self.tick_time).await;
        }
    }

    /// Main output loop; never returns.
    ///
    /// Each frame re-reads [`LEVELS`], updates the buzzer duty if it moved,
    /// then steps the three slots in turn.
    pub async fn run(mut self) -> ! {
        loop {
            let levels = get_levels();
            for (steps, level) in self.steps.iter_mut().zip(levels.iter()) {
                *steps = Self::to_steps(*level);
            }
            if levels[3] != self.buzzer_level {
                self.buzzer_level = levels[3];
                self.buzzer.set_duty(0, self.buzzer_level);
            }
            for slot in Slot::ALL {
                self.step(slot.index()).await;
            }
        }
    }
}
