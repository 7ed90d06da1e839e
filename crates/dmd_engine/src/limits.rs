//! Fixed geometry of the DMD display and its animation format.
//!
//! Every frame of every animation targets the same 128x32 panel; none of
//! these values are configurable at runtime.

/// Panel width in pixels (columns)
pub const DISPLAY_WIDTH: i32 = 128;

/// Panel height in pixels (rows)
pub const DISPLAY_HEIGHT: i32 = 32;

/// Textual length of one bitmap row: one leading delimiter + 128 hex digits
pub const ROW_TEXT_LEN: usize = 129;

/// Number of palette entries (one hex nibble per pixel)
pub const PALETTE_LEN: usize = 16;

/// Palette slot reserved as the transparency sentinel
pub const TRANSPARENT_IDX: u8 = 10;

/// Check if a coordinate lies on the panel
#[inline]
pub fn is_on_display(x: i32, y: i32) -> bool {
    x >= 0 && x < DISPLAY_WIDTH && y >= 0 && y < DISPLAY_HEIGHT
}
