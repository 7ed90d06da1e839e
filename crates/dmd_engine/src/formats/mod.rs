//! On-disk representations of animation documents.

mod dmd_json;
pub use dmd_json::*;
