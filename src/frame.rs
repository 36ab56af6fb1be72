//! Status display frame: a border around the panel and a filled square at
//! the cursor. Rebuilt from scratch every tick.
use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFrame {
    pub border: Rect,
    pub marker: Rect,
}

impl DisplayFrame {
    pub fn new(cursor: Cursor, geometry: &DisplayGeometry) -> Self {
        Self {
            border: Rect::new(0, 0, geometry.width, geometry.height),
            marker: Rect::new(cursor.x, cursor.y, geometry.marker, geometry.marker),
        }
    }

    /// Clear, border, marker, present.
    pub fn render<D: DisplaySink>(&self, display: &mut D) {
        display.clear();
        display.draw_rect(self.border, false);
        display.draw_rect(self.marker, true);
        display.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{DrawCall, RecordingDisplay};

    #[test]
    fn render_sequence() {
        let frame = DisplayFrame::new(Cursor { x: 56, y: 26 }, &DisplayGeometry::SSD1306_128X64);
        let mut display = RecordingDisplay::default();
        frame.render(&mut display);
        assert_eq!(
            display.calls,
            [
                DrawCall::Clear,
                DrawCall::Rect(Rect::new(0, 0, 128, 64), false),
                DrawCall::Rect(Rect::new(56, 26, 8, 8), true),
                DrawCall::Present,
            ]
        );
    }
}
