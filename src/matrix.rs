//! On-board 5×5 LED matrix showing the current feedback glyph.
use crate::*;

use core::cell::Cell;
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

/// How long each refresh burst lasts before the glyph is re-read.
const REFRESH: Duration = Duration::from_millis(20);

static GLYPH: Mutex<CriticalSectionRawMutex, Cell<Option<Glyph>>> = Mutex::new(Cell::new(None));

/// Core-facing handle onto [`GLYPH`].
pub struct MatrixGlyph;

impl MatrixSink for MatrixGlyph {
    fn plot(&mut self, glyph: Glyph) {
        GLYPH.lock(|g| g.set(Some(glyph)));
    }

    fn turn_off(&mut self) {
        GLYPH.lock(|g| g.set(None));
    }
}

pub struct Matrix(LedMatrix);

impl Matrix {
    pub fn new(display: LedMatrix) -> Self {
        Self(display)
    }

    fn frame(glyph: Option<Glyph>) -> Frame<5, 5> {
        let mut frame = Frame::empty();
        if let Some(glyph) = glyph {
            for (x, y) in glyph.pixels() {
                frame.set(x, y);
            }
        }
        frame
    }

    pub async fn run(mut self) -> ! {
        loop {
            let glyph = GLYPH.lock(|g| g.get());
            self.0.display(Self::frame(glyph), REFRESH).await;
        }
    }
}
