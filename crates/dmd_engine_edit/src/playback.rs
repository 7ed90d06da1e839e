//! Precomputed playback schedules.
//!
//! Playback is a list of timed steps derived from the frame durations and
//! the header's transition flags; the timer driving it lives outside the
//! core. The clock bookends always run for 800 ms — the transition flags
//! only decide whether the glyph scrolls or sits still.

use dmd_engine::{Document, Transition};

use crate::EditState;

/// Milliseconds between two clock wipe steps.
pub const WIPE_STEP_MS: u64 = 25;

/// Number of steps in one clock wipe (one per panel row).
pub const WIPE_STEPS: i32 = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackAction {
    /// Show the large clock glyph shifted up by `row_offset` rows.
    ClockWipe { row_offset: i32 },
    /// Show an animation frame.
    ShowFrame(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackStep {
    pub at_ms: u64,
    pub action: PlaybackAction,
}

/// A full playback run, ordered by time.
#[derive(Clone, Debug, Default)]
pub struct PlaybackSchedule {
    pub steps: Vec<PlaybackStep>,
    pub total_ms: u64,
}

impl PlaybackSchedule {
    pub fn build(document: &Document) -> Self {
        let mut steps = Vec::new();

        let intro_scrolls = document.header.intro_transition == Transition::Enable;
        let mut running = push_wipe(&mut steps, 0, move |i| if intro_scrolls { i } else { 0 });

        for (frame_idx, frame) in document.frames.iter().enumerate() {
            steps.push(PlaybackStep {
                at_ms: running,
                action: PlaybackAction::ShowFrame(frame_idx),
            });
            running += frame.duration as u64;
        }

        let outro_scrolls = document.header.outro_transition == Transition::Enable;
        let total_ms = push_wipe(&mut steps, running, move |i| if outro_scrolls { WIPE_STEPS - 1 - i } else { 0 });

        PlaybackSchedule { steps, total_ms }
    }
}

fn push_wipe(steps: &mut Vec<PlaybackStep>, start_ms: u64, offset_of: impl Fn(i32) -> i32) -> u64 {
    let mut running = start_ms;
    for i in 0..WIPE_STEPS {
        running += WIPE_STEP_MS;
        steps.push(PlaybackStep {
            at_ms: running,
            action: PlaybackAction::ClockWipe { row_offset: offset_of(i) },
        });
    }
    running
}

impl EditState {
    /// Start a playback run: drops the edit history, invalidates any earlier
    /// run and returns its schedule together with the new generation token.
    pub fn begin_playback(&mut self) -> (usize, PlaybackSchedule) {
        self.history_mut().clear();
        let generation = self.next_playback_generation();
        log::info!("playback {generation} started");
        (generation, PlaybackSchedule::build(self.document()))
    }
}
