//! Half-block terminal rendering of a 128x32 panel.
//!
//! Two pixel rows share one text row: the upper pixel is the glyph
//! foreground, the lower one the background, using 24-bit ANSI colors.

use std::io::Write;

use dmd_engine::{
    ClockAsset, Color, Document, Position, composite,
    limits::{DISPLAY_HEIGHT, DISPLAY_WIDTH, TRANSPARENT_IDX},
    resolved_color,
};

const UPPER_HALF_BLOCK: &str = "\u{2580}";

/// Move the cursor home and draw one composited animation frame.
pub fn render_frame(out: &mut impl Write, document: &Document, frame_idx: usize, clock: Option<&ClockAsset>) -> anyhow::Result<()> {
    let frame = document.frame(frame_idx)?;
    render_grid(out, |pos| composite(frame, frame_idx, &document.header, clock, pos))
}

/// Draw the large clock glyph shifted up by `row_offset` rows, the way the
/// wipe transition presents it. Rows scrolled past the panel are black, and
/// transparent glyph pixels are shown black as well.
pub fn render_clock_wipe(out: &mut impl Write, clock: &ClockAsset, row_offset: i32) -> anyhow::Result<()> {
    render_grid(out, |pos| {
        let pixel = clock.large.pixel(Position::new(pos.x, pos.y + row_offset)).unwrap_or(0);
        if pixel == TRANSPARENT_IDX { 0 } else { pixel }
    })
}

fn render_grid(out: &mut impl Write, pixel_at: impl Fn(Position) -> u8) -> anyhow::Result<()> {
    let mut text = String::new();
    text.push_str("\x1b[H");
    for y in (0..DISPLAY_HEIGHT).step_by(2) {
        for x in 0..DISPLAY_WIDTH {
            let top = resolved_color(pixel_at(Position::new(x, y)));
            let bottom = resolved_color(pixel_at(Position::new(x, y + 1)));
            push_colored_block(&mut text, top, bottom);
        }
        text.push_str("\x1b[0m\r\n");
    }
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn push_colored_block(text: &mut String, top: Color, bottom: Color) {
    let (tr, tg, tb) = top.get_rgb();
    let (br, bg, bb) = bottom.get_rgb();
    text.push_str(&format!("\x1b[38;2;{tr};{tg};{tb}m\x1b[48;2;{br};{bg};{bb}m{UPPER_HALF_BLOCK}"));
}

#[cfg(test)]
mod tests {
    use super::{render_clock_wipe, render_frame};
    use dmd_engine::{ClockAsset, Document};

    #[test]
    fn test_render_frame_emits_one_line_per_pixel_row_pair() {
        let doc = Document::new();
        let mut out = Vec::new();
        render_frame(&mut out, &doc, 0, None).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(16, text.matches("\r\n").count());
    }

    #[test]
    fn test_render_frame_rejects_missing_frame() {
        let doc = Document::new();
        let mut out = Vec::new();
        assert!(render_frame(&mut out, &doc, 5, None).is_err());
    }

    #[test]
    fn test_render_clock_wipe_scrolled_out_is_black() {
        let mut out = Vec::new();
        render_clock_wipe(&mut out, ClockAsset::builtin(), 32).unwrap();
        let text = String::from_utf8(out).unwrap();
        // fully scrolled out: every pixel resolves to black
        assert!(!text.contains("\x1b[38;2;224;224;224m"));
        assert!(text.contains("\x1b[38;2;0;0;0m"));
    }
}
