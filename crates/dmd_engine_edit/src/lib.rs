#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

mod editor;
pub use editor::*;

mod playback;
pub use playback::*;

// Re-export the engine types session users need
pub use dmd_engine::{
    BitmapRow, ClockAsset, ClockSize, ClockType, Document, DropDirection, EngineError, Frame, Header, Position, Result, Transition,
};
