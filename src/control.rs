//! # Main Loop
//!
//! One tick of the polling side:
//!
//! 1. sample Y then X,
//! 2. place the cursor,
//! 3. drive the selected LED and the buzzer from the stick displacement (or
//!    zero them when outputs are off),
//! 4. redraw the status display.
//!
//! Step 3 runs under the controller lock, so a B press can never land
//! between reading the selected slot and writing to it.
use crate::*;

/// What one tick saw and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub sample: InputSample,
    pub intensity: Intensity,
    /// Level written to both actuators.
    pub level: u16,
    pub cursor: Cursor,
    pub state: FeedbackState,
}

pub struct MainLoop {
    mapper: AnalogMapper,
    cursor_map: CursorMap,
    geometry: DisplayGeometry,
    max_adc: u16,
    max_duty: u16,
    last_sample: Option<InputSample>,
}

impl MainLoop {
    pub fn new(config: &Config) -> Self {
        Self {
            mapper: AnalogMapper::from_config(config),
            cursor_map: config.cursor,
            geometry: config.display,
            max_adc: config.max_adc,
            max_duty: config.max_duty,
            last_sample: None,
        }
    }

    /// Blank status display before the first tick.
    pub fn start<D: DisplaySink>(&mut self, display: &mut D) {
        display.clear();
        display.present();
    }

    /// Reads Y then X, clamped to the sensor range.
    pub fn sample<A: AnalogSource>(&self, source: &mut A) -> InputSample {
        let y = source.read(Channel::Y);
        let x = source.read(Channel::X);
        InputSample::clamped(x, y, self.max_adc)
    }

    /// Samples `source` and runs [`step`](Self::step).
    pub fn tick<A, S, O, D>(
        &mut self,
        source: &mut A,
        shared: &Shared<S>,
        outputs: &mut O,
        display: &mut D,
    ) -> TickReport
    where
        A: AnalogSource,
        S: Scheduler,
        O: ActuatorSink,
        D: DisplaySink,
    {
        let sample = self.sample(source);
        self.step(sample, shared, outputs, display)
    }

    /// Everything after sampling. Board code with an async ADC calls this
    /// directly.
    pub fn step<S, O, D>(
        &mut self,
        sample: InputSample,
        shared: &Shared<S>,
        outputs: &mut O,
        display: &mut D,
    ) -> TickReport
    where
        S: Scheduler,
        O: ActuatorSink,
        D: DisplaySink,
    {
        if self.last_sample != Some(sample) {
            rprintln!("X: {} Y: {}", sample.x, sample.y);
            self.last_sample = Some(sample);
        }

        let cursor = self.cursor_map.locate(sample, &self.geometry);
        let intensity = self.mapper.combine(sample);
        let max_duty = self.max_duty;

        let (state, level) = shared.lock(|controller| {
            let state = controller.state();
            let level = if state.mode_enabled {
                intensity.level().min(max_duty)
            } else {
                0
            };
            outputs.set_level(Actuator::Led(state.selected), level);
            outputs.set_level(Actuator::Buzzer, level);
            (state, level)
        });

        DisplayFrame::new(cursor, &self.geometry).render(display);

        TickReport {
            sample,
            intensity,
            level,
            cursor,
            state,
        }
    }
}
