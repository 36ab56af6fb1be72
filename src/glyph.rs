//! 5×5 matrix glyphs.

/// Glyphs the feedback controller can put on the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    ArrowLeft,
    ArrowRight,
}

/// One row per byte, top row first. Bit 4 is the leftmost column.
pub type Bitmap = [u8; 5];

const ARROW_LEFT: Bitmap = [0b00100, 0b01000, 0b11111, 0b01000, 0b00100];
const ARROW_RIGHT: Bitmap = [0b00100, 0b00010, 0b11111, 0b00010, 0b00100];

impl Glyph {
    pub fn bitmap(&self) -> &'static Bitmap {
        match self {
            Glyph::ArrowLeft => &ARROW_LEFT,
            Glyph::ArrowRight => &ARROW_RIGHT,
        }
    }

    /// Lit pixels as `(x, y)` pairs, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> {
        let bitmap = self.bitmap();
        (0..5).flat_map(move |y| {
            (0..5)
                .filter(move |x| bitmap[y] & (0b10000 >> x) != 0)
                .map(move |x| (x, y))
        })
    }
}

impl core::fmt::Display for Glyph {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Glyph::ArrowLeft => "arrow-left",
            Glyph::ArrowRight => "arrow-right",
        };
        f.write_str(name)
    }
}
