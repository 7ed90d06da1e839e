#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]

mod error;
pub use error::*;

pub mod limits;

mod position;
pub use position::*;

mod palette_handling;
pub use palette_handling::*;

mod bitmap_row;
pub use bitmap_row::*;

mod frame;
pub use frame::*;

mod header;
pub use header::*;

mod document;
pub use document::*;

pub mod formats;
pub use formats::*;

mod clock;
pub use clock::*;

pub mod paint;

mod compositor;
pub use compositor::*;
