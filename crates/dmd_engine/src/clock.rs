//! The built-in clock glyph asset.
//!
//! Two fixed 128x32 glyph bitmaps shipped with the player hardware: index 0
//! is the full-panel clock face, index 1 the small movable one. The asset is
//! read-only and never part of a document; glyph rows carry delimiters on
//! both ends, with the pixel digits at columns 1..=128 as in every bitmap
//! row.

use lazy_static::lazy_static;

use crate::{
    Position,
    limits::{DISPLAY_HEIGHT, DISPLAY_WIDTH},
};

const LARGE_GLYPH_ROWS: [&str; DISPLAY_HEIGHT as usize] = [
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaa0000aaaaaa0000000000aaaaaaa0000000000aa0000aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaa0ffff0aaaa0ffffffffff0aaaaa0ffffffffff00ffff0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaa00ffff0aaa0ffffffffffff0aaa0ffffffffffff0ffff0aaa0000aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaa0ffffff0aaa0ffffffffffff0aaa0ffffffffffff0ffff0aa0ffff0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaa0ffffff0aaa0ffffffffffff00000ffffffffffff0ffff0aa0ffff0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaa0ffffff0aaa0ffff0000ffff0fff0ffff0000ffff0ffff0aa0ffff0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaa0ffffff0aaaa0000aaa0ffff0fff00000aaa0ffff0ffff0aa0ffff0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaa00ffff0aaaaa0000000ffff0fff0aaaa0000ffff0ffff0000ffff0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaa0ffff0aaaa0fffffffffff0000aaaa0ffffffff0ffffffffffff0aaa00000aa00aaaa00aaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaa0ffff0aaa0ffffffffffff0aaaaaaa0fffffff00ffffffffffff0aa0fffff00ff0aa0ff0aaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaa0ffff0aaa0ffffffffffff0aaaaaaa0fffffff00ffffffffffff0a0fffffff0fff00fff0aaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaa0ffff0aaa0fffffffffff0a000aaaa0ffffffff0ffffffffffff0a0ff000ff0ffffffff0aaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaa0ffff0aaa0ffff0000000a0fff0aaaa0000ffff000000000ffff0a0ff000ff0ffffffff0aaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaa0ffff0aaa0ffff0aaaaaaa0fff00000aaa0ffff0aaaaaaa0ffff0a0fffffff0ff0ff0ff0aaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaa00ffff00aa0ffff000000000fff0ffff0000ffff0aaaaaaa0ffff0a0fffffff0ff0000ff0aaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaa0ffffffff0a0ffffffffffff00000ffffffffffff0aaaaaaa0ffff0a0ff000ff0ff0aa0ff0aaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaa0ffffffff0a0ffffffffffff0aaa0ffffffffffff0aaaaaaa0ffff0a0ff0a0ff0ff0aa0ff0aaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaa0ffffffff0a0ffffffffffff0aaa0ffffffffffff0aaaaaaa0ffff0a0ff0a0ff0ff0aa0ff0aaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaa0ffffffff0a0ffffffffffff0aaaa0ffffffffff0aaaaaaaa0ffff0a0ff0a0ff0ff0aa0ff0aaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaa00000000aaa000000000000aaaaaa0000000000aaaaaaaaaa0000aaa00aaa00a00aaaa00aaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
];

const SMALL_GLYPH_ROWS: [&str; DISPLAY_HEIGHT as usize] = [
    "|aaaa00aaaa00000aaaaaa00000aa00aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaa0ff0aa0fffff0aaaa0fffff00ff0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aa0fff0a0fffffff0000fffffff0ff0a00aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aa0fff0a0ff000ff0ff0ff000ff0ff00ff0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaa0ff0aa00000ff0ff000a00ff0ff00ff0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaa0ff0aa0ffffff000aaa0fff00ff00ff0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaa0ff0a0ffffff0a00aaa0fff00fffffff0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaa0ff0a0ff0000a0ff000a00ff0fffffff0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaa0ff0a0ff000000ff0ff000ff00000ff0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aa0ffff00fffffff0000fffffff0aaa0ff0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aa0ffff00fffffff0aaa0fffff0aaaa0ff0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaa0000aa0000000aaaaa00000aaaaaa00aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
    "|aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa|",
];

/// One clock glyph, decoded to color indices.
pub struct ClockGlyph {
    pixels: Vec<Vec<u8>>,
}

impl ClockGlyph {
    fn parse(rows: &[&str; DISPLAY_HEIGHT as usize]) -> Self {
        let pixels = rows
            .iter()
            .map(|row| {
                row.as_bytes()[1..=DISPLAY_WIDTH as usize]
                    .iter()
                    .map(|b| (*b as char).to_digit(16).expect("embedded clock glyph digits are hex") as u8)
                    .collect()
            })
            .collect();
        ClockGlyph { pixels }
    }

    /// Color index at `pos`, or `None` outside the glyph's own grid.
    pub fn pixel(&self, pos: impl Into<Position>) -> Option<u8> {
        let pos = pos.into();
        if pos.x < 0 || pos.x >= DISPLAY_WIDTH || pos.y < 0 || pos.y >= DISPLAY_HEIGHT {
            return None;
        }
        Some(self.pixels[pos.y as usize][pos.x as usize])
    }
}

/// The two-glyph clock asset consumed by the compositor.
pub struct ClockAsset {
    pub large: ClockGlyph,
    pub small: ClockGlyph,
}

impl ClockAsset {
    /// The glyphs built into the player hardware.
    pub fn builtin() -> &'static ClockAsset {
        &BUILTIN_CLOCK
    }
}

lazy_static! {
    static ref BUILTIN_CLOCK: ClockAsset = ClockAsset {
        large: ClockGlyph::parse(&LARGE_GLYPH_ROWS),
        small: ClockGlyph::parse(&SMALL_GLYPH_ROWS),
    };
}

#[cfg(test)]
mod tests {
    use super::ClockAsset;
    use crate::limits::TRANSPARENT_IDX;

    #[test]
    fn test_builtin_glyph_bounds() {
        let clock = ClockAsset::builtin();
        assert_eq!(Some(TRANSPARENT_IDX), clock.large.pixel((0, 0)));
        assert_eq!(None, clock.large.pixel((-1, 0)));
        assert_eq!(None, clock.small.pixel((128, 0)));
        assert_eq!(None, clock.small.pixel((0, 32)));
    }

    #[test]
    fn test_builtin_glyphs_have_ink() {
        let clock = ClockAsset::builtin();
        // the large face draws its digits with outline and fill colors
        assert_eq!(Some(0), clock.large.pixel((29, 6)));
        // the small face starts drawing in the top-left corner
        assert_eq!(Some(0), clock.small.pixel((4, 0)));
    }
}
