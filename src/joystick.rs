//! # Joystick Input Module
//!
//! This module reads the two analog joystick axes using the nRF52's SAADC
//! (Successive Approximation ADC) peripheral, both channels scanned in one
//! conversion.
//!
//! Channel order is Y then X, the same order the core main loop samples in.
//! Readings come back as an [`InputSample`] already clamped to the 12-bit
//! sensor range; turning them into intensities and cursor positions is the
//! mapper's job.
use crate::*;

/// Type alias for a two-channel SAADC configuration.
///
/// Channel 0 is the Y axis and channel 1 the X axis.
pub type Adc = saadc::Saadc<'static, 2>;

/// Two-axis analog joystick on the SAADC.
pub struct Joystick(Adc);

impl Joystick {
    /// Creates the joystick reader and calibrates the ADC.
    ///
    /// # Arguments
    ///
    /// * `adc` - SAADC configured for 12-bit resolution with channels `[Y, X]`
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// let mut saadc_config = saadc::Config::default();
    /// saadc_config.resolution = saadc::Resolution::_12BIT;
    /// let adc = saadc::Saadc::new(
    ///     board.saadc,
    ///     Irqs,
    ///     saadc_config,
    ///     [
    ///         saadc::ChannelConfig::single_ended(board.p2),
    ///         saadc::ChannelConfig::single_ended(board.p1),
    ///     ],
    /// );
    /// let joystick = Joystick::new(adc).await;
    /// ```
    pub async fn new(adc: Adc) -> Self {
        adc.calibrate().await;
        Self(adc)
    }

    /// Samples both axes.
    ///
    /// Single-ended readings can dip slightly below zero near ground, so both
    /// are clamped into `0..=max_adc` before they leave this module.
    ///
    /// # Arguments
    ///
    /// * `max_adc` - Full-scale reading, normally [`MAX_ADC`]
    ///
    /// # Returns
    ///
    /// An [`InputSample`] with:
    /// - `x`, `y` around `MAX_ADC / 2` with the stick at rest
    /// - 0 or `max_adc` at full deflection
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// let sample = joystick.measure(MAX_ADC).await;
    /// rprintln!("X: {} Y: {}", sample.x, sample.y);
    /// ```
    pub async fn measure(&mut self, max_adc: u16) -> InputSample {
        let mut buf = [0; 2];
        self.0.sample(&mut buf).await;
        let [y, x] = buf;
        InputSample::clamped(x as i32, y as i32, max_adc)
    }
}
