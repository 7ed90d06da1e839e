use serde::{Deserialize, Serialize};

use crate::{
    BitmapRow, EngineError, Position, Result,
    limits::{DISPLAY_HEIGHT, TRANSPARENT_IDX},
};

/// One animation frame: 32 bitmap rows plus the time the frame stays on the
/// panel. `frame_num` is informational and rewritten from the frame's
/// position whenever the document is saved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub bitmap: Vec<BitmapRow>,
    pub duration: u32,
    pub frame_num: usize,
}

impl Frame {
    /// A fully transparent frame with the given duration.
    pub fn new(duration: u32) -> Self {
        let row = BitmapRow::filled(TRANSPARENT_IDX).expect("transparent row is encodable");
        Frame {
            bitmap: vec![row; DISPLAY_HEIGHT as usize],
            duration,
            frame_num: 0,
        }
    }

    /// Color index at `pos`, or `None` when `pos` is off the panel.
    pub fn pixel(&self, pos: impl Into<Position>) -> Option<u8> {
        let pos = pos.into();
        if !crate::limits::is_on_display(pos.x, pos.y) {
            return None;
        }
        self.bitmap.get(pos.y as usize)?.pixel_at(pos.x)
    }

    /// Set the pixel at `pos` to `color`.
    pub fn set_pixel(&mut self, pos: impl Into<Position>, color: u8) -> Result<()> {
        let pos = pos.into();
        if pos.y < 0 || pos.y >= DISPLAY_HEIGHT {
            return Err(EngineError::RowOutOfRange {
                y: pos.y,
                max: DISPLAY_HEIGHT,
            });
        }
        match self.bitmap.get_mut(pos.y as usize) {
            Some(row) => row.set_pixel(pos.x, color),
            None => Err(EngineError::RowOutOfRange {
                y: pos.y,
                max: self.bitmap.len() as i32,
            }),
        }
    }

    /// Validate the frame's shape: 32 rows, each decodable.
    pub fn validate(&self, frame_idx: usize) -> Result<()> {
        if self.bitmap.len() != DISPLAY_HEIGHT as usize {
            return Err(EngineError::InvalidRowCount {
                frame: frame_idx,
                expected: DISPLAY_HEIGHT as usize,
                actual: self.bitmap.len(),
            });
        }
        for row in &self.bitmap {
            row.decode()?;
        }
        Ok(())
    }
}

impl Default for Frame {
    fn default() -> Self {
        Frame::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;
    use crate::limits::TRANSPARENT_IDX;

    #[test]
    fn test_new_frame_is_transparent() {
        let frame = Frame::new(50);
        assert_eq!(Some(TRANSPARENT_IDX), frame.pixel((0, 0)));
        assert_eq!(Some(TRANSPARENT_IDX), frame.pixel((127, 31)));
        assert!(frame.validate(0).is_ok());
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let frame = Frame::new(50);
        assert_eq!(None, frame.pixel((-1, 0)));
        assert_eq!(None, frame.pixel((0, -1)));
        assert_eq!(None, frame.pixel((128, 0)));
        assert_eq!(None, frame.pixel((0, 32)));
    }

    #[test]
    fn test_set_pixel() {
        let mut frame = Frame::new(50);
        frame.set_pixel((3, 4), 0xf).unwrap();
        assert_eq!(Some(0xf), frame.pixel((3, 4)));
        assert_eq!(Some(TRANSPARENT_IDX), frame.pixel((4, 4)));

        assert!(frame.set_pixel((0, 32), 1).is_err());
        assert!(frame.set_pixel((128, 0), 1).is_err());
    }

    #[test]
    fn test_validate_rejects_short_bitmap() {
        let mut frame = Frame::new(50);
        frame.bitmap.pop();
        assert!(frame.validate(0).is_err());
    }
}
