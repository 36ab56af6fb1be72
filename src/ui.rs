//! # Main Loop Task
//!
//! The polling half of the firmware. Every `tick_period` it:
//! - **Samples** the joystick through the SAADC
//! - **Drives** the selected LED slot and the buzzer via the core
//!   [`MainLoop`], under the shared controller lock
//! - **Redraws** the status display with the cursor marker
//!
//! Button handling and feedback timeouts run in their own tasks and only
//! meet this one through [`CONTROLLER`].
use crate::*;

/// Board-side owner of the joystick, screen and core loop.
pub struct Ui {
    joystick: Joystick,
    screen: Screen,
    main: MainLoop,
    config: Config,
}

impl Ui {
    /// Creates the UI loop.
    ///
    /// # Arguments
    ///
    /// * `joystick` - Calibrated two-axis reader
    /// * `screen` - Status display
    /// * `config` - Loop settings; the same value the controller was built with
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// let mut ui = Ui::new(joystick, screen, Config::DEFAULT);
    /// ui.run().await;
    /// ```
    pub fn new(joystick: Joystick, screen: Screen, config: Config) -> Self {
        Self {
            joystick,
            screen,
            main: MainLoop::new(&config),
            config,
        }
    }

    /// Main UI loop; never returns.
    ///
    /// Blanks the display once, then samples, drives and redraws every tick.
    pub async fn run(&mut self) -> ! {
        self.main.start(&mut self.screen);
        loop {
            let sample = self.joystick.measure(self.config.max_adc).await;
            self.main
                .step(sample, &CONTROLLER, &mut SharedLevels, &mut self.screen);
            Timer::after(self.config.tick_period).await;
        }
    }
}
