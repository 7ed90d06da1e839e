pub mod undo_stack;
pub use undo_stack::*;

mod edit_operations;
pub use edit_operations::*;

use dmd_engine::{Document, EngineError, Frame, Result, limits::TRANSPARENT_IDX};

/// One editing session over a loaded animation document.
///
/// Owns the document, the frame selection, the active drawing color and the
/// undo history of the selected frame. All mutation entry points live here;
/// UI widgets and file/timer plumbing stay outside.
pub struct EditState {
    document: Document,
    selected_frame: usize,
    active_color: u8,
    history: FrameHistory,
    playback_generation: usize,
}

impl EditState {
    pub fn from_document(document: Document) -> Result<Self> {
        document.validate()?;
        Ok(EditState {
            document,
            selected_frame: 0,
            // the editor starts with the transparency swatch selected
            active_color: TRANSPARENT_IDX,
            history: FrameHistory::new(),
            playback_generation: 0,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn selected_frame(&self) -> usize {
        self.selected_frame
    }

    /// Move the selection to another frame. Changing frames drops the undo
    /// history; snapshots of one frame's bitmap must never be restored into
    /// another frame.
    pub fn select_frame(&mut self, frame_idx: usize) -> Result<()> {
        if frame_idx >= self.document.frames.len() {
            return Err(EngineError::FrameOutOfRange {
                frame: frame_idx,
                max: self.document.frames.len(),
            });
        }
        if frame_idx != self.selected_frame {
            self.selected_frame = frame_idx;
            self.history.clear();
        }
        Ok(())
    }

    pub fn active_color(&self) -> u8 {
        self.active_color
    }

    pub fn set_active_color(&mut self, color: u8) -> Result<()> {
        if color >= 16 {
            return Err(EngineError::InvalidColorIndex { value: color as u32 });
        }
        self.active_color = color;
        Ok(())
    }

    pub fn current_frame(&self) -> &Frame {
        &self.document.frames[self.selected_frame]
    }

    pub(crate) fn current_frame_mut(&mut self) -> &mut Frame {
        &mut self.document.frames[self.selected_frame]
    }

    pub(crate) fn set_selected_frame_raw(&mut self, frame_idx: usize) {
        self.selected_frame = frame_idx;
    }

    pub(crate) fn history_mut(&mut self) -> &mut FrameHistory {
        &mut self.history
    }

    pub fn history(&self) -> &FrameHistory {
        &self.history
    }

    pub(crate) fn next_playback_generation(&mut self) -> usize {
        self.playback_generation += 1;
        self.playback_generation
    }

    /// True while `generation` is the most recently started playback.
    pub fn is_current_playback(&self, generation: usize) -> bool {
        self.playback_generation == generation
    }
}

impl UndoState for EditState {
    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        let frame_idx = self.selected_frame;
        if self.history.undo_into(&mut self.document.frames[frame_idx].bitmap) {
            log::debug!("undo on frame {frame_idx}");
        }
        Ok(())
    }

    fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        let frame_idx = self.selected_frame;
        if self.history.redo_into(&mut self.document.frames[frame_idx].bitmap) {
            log::debug!("redo on frame {frame_idx}");
        }
        Ok(())
    }
}
