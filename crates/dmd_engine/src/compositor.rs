//! Per-pixel layering of a frame against the clock overlay.

use crate::{
    ClockAsset, ClockSize, ClockType, Color, Frame, Header, Position, display_color,
    limits::TRANSPARENT_IDX,
};

/// Resolve the final color index for one display pixel.
///
/// The frame's own pixel seeds both layers; if the header puts the clock on
/// this frame, the sampled glyph pixel replaces the overlay (`ClockOnTop`) or
/// the underlay (`ClockBehind`). The topmost non-transparent layer wins; when
/// both layers are transparent the sentinel itself is returned.
///
/// Pure function of its inputs; it is called for every visible pixel on
/// every redraw.
pub fn composite(frame: &Frame, frame_idx: usize, header: &Header, clock: Option<&ClockAsset>, pos: impl Into<Position>) -> u8 {
    let pos = pos.into();
    let base = frame.pixel(pos).unwrap_or(TRANSPARENT_IDX);
    let mut overlay = base;
    let mut underlay = base;

    if let Some(clock) = clock {
        if header.clock_active_for(frame_idx) {
            let sampled = match header.clock_size {
                ClockSize::ClockLarge => clock.large.pixel(pos),
                ClockSize::ClockSmall => {
                    let glyph_pos = pos - Position::new(header.clock_position_x, header.clock_position_y);
                    if glyph_pos.x >= 0 && glyph_pos.y >= 0 {
                        clock.small.pixel(glyph_pos)
                    } else {
                        None
                    }
                }
                ClockSize::Other(_) => None,
            };
            if let Some(clock_pixel) = sampled {
                match header.clock_type {
                    ClockType::ClockOnTop => overlay = clock_pixel,
                    ClockType::ClockBehind => underlay = clock_pixel,
                    ClockType::Other(_) => {}
                }
            }
        }
    }

    if overlay != TRANSPARENT_IDX {
        overlay
    } else if underlay != TRANSPARENT_IDX {
        underlay
    } else {
        TRANSPARENT_IDX
    }
}

/// Map a composited index to its on-screen color. The transparency sentinel
/// resolves to the palette's checkerboard stand-in.
pub fn resolved_color(index: u8) -> Color {
    display_color(index)
}

#[cfg(test)]
mod tests {
    use super::composite;
    use crate::{ClockAsset, ClockSize, ClockType, Frame, Header, limits::TRANSPARENT_IDX};

    fn clock_header(clock_type: ClockType, clock_size: ClockSize) -> Header {
        Header {
            clock_type,
            clock_size,
            clock_start_frame: 0,
            clock_end_frame: 10,
            clock_position_x: 0,
            clock_position_y: 0,
            ..Header::default()
        }
    }

    #[test]
    fn test_frame_pixel_without_clock() {
        let mut frame = Frame::new(100);
        frame.set_pixel((3, 3), 0xf).unwrap();
        let header = Header::default();

        assert_eq!(0xf, composite(&frame, 0, &header, Some(ClockAsset::builtin()), (3, 3)));
        assert_eq!(TRANSPARENT_IDX, composite(&frame, 0, &header, Some(ClockAsset::builtin()), (4, 3)));
    }

    #[test]
    fn test_both_layers_transparent_resolves_to_sentinel() {
        let frame = Frame::new(100);
        let header = clock_header(ClockType::ClockOnTop, ClockSize::ClockLarge);
        // (0, 0) of the large glyph is transparent too
        assert_eq!(TRANSPARENT_IDX, composite(&frame, 0, &header, Some(ClockAsset::builtin()), (0, 0)));
    }

    #[test]
    fn test_clock_on_top_hides_frame_pixel() {
        let mut frame = Frame::new(100);
        frame.set_pixel((29, 6), 0xf).unwrap();
        let header = clock_header(ClockType::ClockOnTop, ClockSize::ClockLarge);

        // the large glyph paints outline ink at (29, 6)
        assert_eq!(0, composite(&frame, 0, &header, Some(ClockAsset::builtin()), (29, 6)));
    }

    #[test]
    fn test_clock_behind_shows_through_transparent_frame_pixel() {
        let frame = Frame::new(100);
        let header = clock_header(ClockType::ClockBehind, ClockSize::ClockLarge);

        assert_eq!(0, composite(&frame, 0, &header, Some(ClockAsset::builtin()), (29, 6)));
    }

    #[test]
    fn test_clock_behind_loses_to_frame_pixel() {
        let mut frame = Frame::new(100);
        frame.set_pixel((29, 6), 0xf).unwrap();
        let header = clock_header(ClockType::ClockBehind, ClockSize::ClockLarge);

        assert_eq!(0xf, composite(&frame, 0, &header, Some(ClockAsset::builtin()), (29, 6)));
    }

    #[test]
    fn test_small_clock_is_offset() {
        let frame = Frame::new(100);
        let mut header = clock_header(ClockType::ClockOnTop, ClockSize::ClockSmall);
        header.clock_position_x = 20;
        header.clock_position_y = 8;

        // the small glyph has ink at (4, 0); shifted, that lands on (24, 8)
        assert_eq!(0, composite(&frame, 0, &header, Some(ClockAsset::builtin()), (24, 8)));
        // left/above the glyph's origin there is no contribution
        assert_eq!(TRANSPARENT_IDX, composite(&frame, 0, &header, Some(ClockAsset::builtin()), (10, 2)));
    }

    #[test]
    fn test_clock_outside_frame_window() {
        let frame = Frame::new(100);
        let mut header = clock_header(ClockType::ClockOnTop, ClockSize::ClockLarge);
        header.clock_start_frame = 2;
        header.clock_end_frame = 3;

        assert_eq!(TRANSPARENT_IDX, composite(&frame, 0, &header, Some(ClockAsset::builtin()), (29, 6)));
        assert_eq!(0, composite(&frame, 2, &header, Some(ClockAsset::builtin()), (29, 6)));
    }

    #[test]
    fn test_unknown_clock_type_contributes_nothing() {
        let frame = Frame::new(100);
        let header = clock_header(ClockType::Other("NoClock".to_string()), ClockSize::ClockLarge);
        assert_eq!(TRANSPARENT_IDX, composite(&frame, 0, &header, Some(ClockAsset::builtin()), (29, 6)));
    }

    #[test]
    fn test_no_clock_asset_supplied() {
        let frame = Frame::new(100);
        let header = clock_header(ClockType::ClockOnTop, ClockSize::ClockLarge);
        assert_eq!(TRANSPARENT_IDX, composite(&frame, 0, &header, None, (29, 6)));
    }

    #[test]
    fn test_out_of_bounds_position_resolves_to_sentinel() {
        let frame = Frame::new(100);
        let header = Header::default();
        assert_eq!(TRANSPARENT_IDX, composite(&frame, 0, &header, None, (-1, 99)));
    }
}
