use serde::{Deserialize, Serialize};

/// Whether the clock wipe transition runs around the animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    Enable,
    #[default]
    Disable,
}

/// How the clock overlay is layered against the frame bitmap. Values outside
/// the two known layer modes are kept verbatim so foreign documents survive a
/// load/save cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockType {
    ClockOnTop,
    ClockBehind,
    #[serde(untagged)]
    Other(String),
}

/// Which of the two clock glyphs is sampled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockSize {
    ClockLarge,
    ClockSmall,
    #[serde(untagged)]
    Other(String),
}

/// Animation-wide options stored ahead of the frame list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub intro_transition: Transition,
    pub outro_transition: Transition,
    pub clock_type: ClockType,
    pub clock_size: ClockSize,
    pub clock_start_frame: i32,
    pub clock_end_frame: i32,
    pub clock_position_x: i32,
    pub clock_position_y: i32,
}

impl Header {
    /// True when the clock overlay participates in compositing `frame_idx`.
    pub fn clock_active_for(&self, frame_idx: usize) -> bool {
        let frame_idx = frame_idx as i32;
        self.clock_start_frame <= frame_idx && frame_idx <= self.clock_end_frame
    }
}

impl Default for Header {
    fn default() -> Self {
        Header {
            intro_transition: Transition::Disable,
            outro_transition: Transition::Disable,
            clock_type: ClockType::Other("NoClock".to_string()),
            clock_size: ClockSize::Other("NoClock".to_string()),
            clock_start_frame: -1,
            clock_end_frame: -1,
            clock_position_x: 0,
            clock_position_y: 0,
        }
    }
}
