//! SSD1306 status display over I²C, drawn with `embedded-graphics`.
use crate::*;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

type Bus = twim::Twim<'static, peripherals::TWISPI0>;
type Panel = Ssd1306<I2CInterface<Bus>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

pub struct Screen(Panel);

impl Screen {
    /// A panel that fails to initialise is logged, not fatal; draws to it
    /// are then dropped at flush time.
    pub fn new(bus: Bus) -> Self {
        let interface = I2CDisplayInterface::new(bus);
        let mut panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        if let Err(e) = panel.init() {
            rprintln!("display init failed: {:?}", e);
        }
        Self(panel)
    }
}

impl DisplaySink for Screen {
    fn clear(&mut self) {
        self.0.clear_buffer();
    }

    fn draw_rect(&mut self, rect: Rect, filled: bool) {
        let style = if filled {
            PrimitiveStyle::with_fill(BinaryColor::On)
        } else {
            PrimitiveStyle::with_stroke(BinaryColor::On, 1)
        };
        let shape = Rectangle::new(
            Point::new(rect.x as i32, rect.y as i32),
            Size::new(rect.w as u32, rect.h as u32),
        );
        // Drawing into the buffer cannot fail; only flush touches the bus.
        let _ = shape.into_styled(style).draw(&mut self.0);
    }

    fn present(&mut self) {
        if let Err(e) = self.0.flush() {
            rprintln!("display flush failed: {:?}", e);
        }
    }
}
