use serde::{Deserialize, Serialize};

use crate::{EngineError, Frame, Header, Result};

/// Which neighbor absorbs a dropped frame's duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropDirection {
    /// Merge into the previous frame.
    Backward,
    /// Merge into the next frame.
    Forward,
}

impl DropDirection {
    pub fn delta(self) -> i32 {
        match self {
            DropDirection::Backward => -1,
            DropDirection::Forward => 1,
        }
    }
}

/// A whole animation: header options plus the ordered frame list. The
/// document is the unit of load and save; there is no partial persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub header: Header,
    pub frames: Vec<Frame>,
}

impl Document {
    /// A single-frame document with default options.
    pub fn new() -> Self {
        Document {
            header: Header::default(),
            frames: vec![Frame::default()],
        }
    }

    pub fn frame(&self, frame_idx: usize) -> Result<&Frame> {
        self.frames.get(frame_idx).ok_or(EngineError::FrameOutOfRange {
            frame: frame_idx,
            max: self.frames.len(),
        })
    }

    pub fn frame_mut(&mut self, frame_idx: usize) -> Result<&mut Frame> {
        let max = self.frames.len();
        self.frames
            .get_mut(frame_idx)
            .ok_or(EngineError::FrameOutOfRange { frame: frame_idx, max })
    }

    /// Change a frame's display duration. Zero is rejected; the document is
    /// untouched on failure.
    pub fn set_frame_duration(&mut self, frame_idx: usize, ms: u32) -> Result<()> {
        if ms == 0 {
            return Err(EngineError::InvalidDuration);
        }
        self.frame_mut(frame_idx)?.duration = ms;
        Ok(())
    }

    /// Remove `frame_idx` and merge its duration into the adjacent frame in
    /// `direction`. Returns the index the selection should land on: the
    /// absorbing frame when merging backward, the (renumbered) next frame
    /// when merging forward.
    pub fn drop_frame(&mut self, frame_idx: usize, direction: DropDirection) -> Result<usize> {
        let max = self.frames.len();
        if frame_idx >= max {
            return Err(EngineError::FrameOutOfRange { frame: frame_idx, max });
        }
        let target = frame_idx as i32 + direction.delta();
        if target < 0 || target as usize >= max {
            return Err(EngineError::NoAdjacentFrame { frame: frame_idx });
        }
        let target = target as usize;

        let dropped = self.frames[frame_idx].duration;
        self.frames[target].duration = self.frames[target].duration.saturating_add(dropped);
        self.frames.remove(frame_idx);

        Ok(match direction {
            DropDirection::Backward => target,
            DropDirection::Forward => frame_idx,
        })
    }

    /// Rewrite every `frame_num` to the frame's current position. Done on
    /// every save so the stored numbers follow edits and drops.
    pub fn renumber_frames(&mut self) {
        for (i, frame) in self.frames.iter_mut().enumerate() {
            frame.frame_num = i;
        }
    }

    /// Validate the whole document shape; used by the all-or-nothing load.
    pub fn validate(&self) -> Result<()> {
        if self.frames.is_empty() {
            return Err(EngineError::EmptyDocument);
        }
        for (i, frame) in self.frames.iter().enumerate() {
            frame.validate(i)?;
            if frame.duration == 0 {
                log::warn!("frame {i} has a zero duration and will not be visible during playback");
            }
        }
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, DropDirection};
    use crate::Frame;

    fn doc_with_durations(durations: &[u32]) -> Document {
        let mut doc = Document::new();
        doc.frames = durations.iter().map(|&d| Frame::new(d)).collect();
        doc
    }

    #[test]
    fn test_set_frame_duration() {
        let mut doc = doc_with_durations(&[100]);
        doc.set_frame_duration(0, 250).unwrap();
        assert_eq!(250, doc.frames[0].duration);

        assert!(doc.set_frame_duration(0, 0).is_err());
        assert_eq!(250, doc.frames[0].duration);
        assert!(doc.set_frame_duration(1, 100).is_err());
    }

    #[test]
    fn test_drop_frame_backward_merges_duration() {
        let mut doc = doc_with_durations(&[100, 150, 200, 80]);
        let selected = doc.drop_frame(2, DropDirection::Backward).unwrap();

        assert_eq!(1, selected);
        let durations: Vec<u32> = doc.frames.iter().map(|f| f.duration).collect();
        assert_eq!(vec![100, 350, 80], durations);
    }

    #[test]
    fn test_drop_frame_forward_keeps_index() {
        let mut doc = doc_with_durations(&[100, 150, 200, 80]);
        let selected = doc.drop_frame(1, DropDirection::Forward).unwrap();

        assert_eq!(1, selected);
        let durations: Vec<u32> = doc.frames.iter().map(|f| f.duration).collect();
        assert_eq!(vec![100, 350, 80], durations);
    }

    #[test]
    fn test_drop_frame_without_neighbor_is_rejected() {
        let mut doc = doc_with_durations(&[100, 150]);
        assert!(doc.drop_frame(0, DropDirection::Backward).is_err());
        assert!(doc.drop_frame(1, DropDirection::Forward).is_err());
        assert!(doc.drop_frame(2, DropDirection::Backward).is_err());
        assert_eq!(2, doc.frames.len());
    }

    #[test]
    fn test_renumber_frames() {
        let mut doc = doc_with_durations(&[100, 150, 200]);
        doc.frames[0].frame_num = 7;
        doc.frames[2].frame_num = 1;
        doc.renumber_frames();
        let nums: Vec<usize> = doc.frames.iter().map(|f| f.frame_num).collect();
        assert_eq!(vec![0, 1, 2], nums);
    }

    #[test]
    fn test_validate_rejects_empty_document() {
        let mut doc = Document::new();
        doc.frames.clear();
        assert!(doc.validate().is_err());
    }
}
