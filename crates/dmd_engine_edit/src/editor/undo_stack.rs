use dmd_engine::{BitmapRow, Result};

pub trait UndoState {
    fn can_undo(&self) -> bool;
    fn undo(&mut self) -> Result<()>;

    fn can_redo(&self) -> bool;
    fn redo(&mut self) -> Result<()>;
}

/// Snapshot history for the bitmap of the currently selected frame.
///
/// A linear stack of deep copies plus a cursor; -1 means empty. The stack is
/// scoped to one frame and cleared whenever the selection moves.
#[derive(Default)]
pub struct FrameHistory {
    snapshots: Vec<Vec<BitmapRow>>,
    cursor: isize,
}

impl FrameHistory {
    pub fn new() -> Self {
        FrameHistory {
            snapshots: Vec::new(),
            cursor: -1,
        }
    }

    /// Capture the bitmap before a destructive edit. Discards any redo tail
    /// beyond the cursor.
    pub fn snapshot(&mut self, bitmap: &[BitmapRow]) {
        self.snapshots.truncate((self.cursor + 1) as usize);
        self.snapshots.push(bitmap.to_vec());
        self.cursor = self.snapshots.len() as isize - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.snapshots.is_empty() && self.cursor < self.snapshots.len() as isize - 1
    }

    /// Step back one snapshot and write it into `bitmap`. When the cursor
    /// sits at the top of the stack the live bitmap is captured first, once,
    /// so a later redo can return to it.
    pub fn undo_into(&mut self, bitmap: &mut Vec<BitmapRow>) -> bool {
        if !self.can_undo() {
            return false;
        }
        if self.cursor == self.snapshots.len() as isize - 1 {
            self.snapshot(bitmap);
        }
        self.cursor -= 1;
        *bitmap = self.snapshots[self.cursor as usize].clone();
        true
    }

    /// Step forward one snapshot and write it into `bitmap`.
    pub fn redo_into(&mut self, bitmap: &mut Vec<BitmapRow>) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        *bitmap = self.snapshots[self.cursor as usize].clone();
        true
    }

    /// Drop all snapshots. Called on frame navigation and at playback start.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = -1;
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::FrameHistory;
    use dmd_engine::{BitmapRow, limits::DISPLAY_HEIGHT};

    fn bitmap_of(color: u8) -> Vec<BitmapRow> {
        vec![BitmapRow::filled(color).unwrap(); DISPLAY_HEIGHT as usize]
    }

    #[test]
    fn test_undo_redo_sequence() {
        // snapshot; edit A; snapshot; edit B; undo; undo; redo -> state after A
        let mut history = FrameHistory::new();
        let initial = bitmap_of(0);
        let mut live = initial.clone();

        history.snapshot(&live);
        live = bitmap_of(1); // edit A
        history.snapshot(&live);
        live = bitmap_of(2); // edit B

        assert!(history.undo_into(&mut live));
        assert_eq!(bitmap_of(1), live);
        assert!(history.undo_into(&mut live));
        assert_eq!(initial, live);
        assert!(history.redo_into(&mut live));
        assert_eq!(bitmap_of(1), live);
    }

    #[test]
    fn test_redo_returns_to_pre_undo_state() {
        let mut history = FrameHistory::new();
        let mut live = bitmap_of(0);
        history.snapshot(&live);
        live = bitmap_of(1);
        history.snapshot(&live);
        live = bitmap_of(3);

        assert!(history.undo_into(&mut live));
        assert_eq!(bitmap_of(1), live);
        // the edited state was captured by the first undo of the sequence
        assert!(history.redo_into(&mut live));
        assert_eq!(bitmap_of(3), live);
    }

    #[test]
    fn test_single_snapshot_cannot_undo() {
        let mut history = FrameHistory::new();
        let mut live = bitmap_of(0);
        history.snapshot(&live);
        live = bitmap_of(1);
        assert!(!history.undo_into(&mut live));
        assert_eq!(bitmap_of(1), live);
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut history = FrameHistory::new();
        let mut live = bitmap_of(0);
        assert!(!history.undo_into(&mut live));
        assert!(!history.redo_into(&mut live));
        assert_eq!(bitmap_of(0), live);
    }

    #[test]
    fn test_snapshot_discards_redo_tail() {
        let mut history = FrameHistory::new();
        let mut live = bitmap_of(0);
        history.snapshot(&live);
        live = bitmap_of(1);
        history.snapshot(&live);
        live = bitmap_of(2);

        assert!(history.undo_into(&mut live));
        history.snapshot(&live); // new edit branch
        assert!(!history.redo_into(&mut live));
    }

    #[test]
    fn test_snapshots_are_deep_copies() {
        let mut history = FrameHistory::new();
        let mut live = bitmap_of(0);
        history.snapshot(&live);
        let before = live.clone();

        // mutating the live bitmap must not corrupt the stored snapshot
        live[0].set_pixel(0, 5).unwrap();
        history.snapshot(&live);
        live[0].set_pixel(1, 5).unwrap();

        assert!(history.undo_into(&mut live));
        assert!(history.undo_into(&mut live));
        assert_eq!(before, live);
    }

    #[test]
    fn test_clear() {
        let mut history = FrameHistory::new();
        history.snapshot(&bitmap_of(0));
        history.snapshot(&bitmap_of(1));
        history.clear();
        assert!(history.is_empty());
        let mut live = bitmap_of(2);
        assert!(!history.undo_into(&mut live));
    }
}
