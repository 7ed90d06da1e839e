//! Unified error types for dmd_engine

use thiserror::Error;

/// Main error type for dmd_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === Format Errors ===
    #[error("Bitmap row must be {expected} characters, got {actual}")]
    InvalidRowLength { expected: usize, actual: usize },

    #[error("Bitmap row contains non-hex digit '{digit}' at column {column}")]
    InvalidRowDigit { column: usize, digit: char },

    #[error("Bitmap row needs {expected} pixels, got {actual}")]
    InvalidPixelCount { expected: usize, actual: usize },

    #[error("Color index {value} out of palette range (0..16)")]
    InvalidColorIndex { value: u32 },

    #[error("Frame {frame} has {actual} bitmap rows, expected {expected}")]
    InvalidRowCount { frame: usize, expected: usize, actual: usize },

    #[error("Animation document contains no frames")]
    EmptyDocument,

    #[error("Malformed animation JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse int error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    // === Range Errors ===
    #[error("Column {x} out of display range (0..{max})")]
    ColumnOutOfRange { x: i32, max: i32 },

    #[error("Row {y} out of display range (0..{max})")]
    RowOutOfRange { y: i32, max: i32 },

    #[error("Frame {frame} out of range (0..{max})")]
    FrameOutOfRange { frame: usize, max: usize },

    #[error("Frame duration must be a positive number of milliseconds")]
    InvalidDuration,

    #[error("Frame {frame} has no neighbor to merge into")]
    NoAdjacentFrame { frame: usize },

    #[error("Invalid value '{value}' for field {field}")]
    InvalidFieldValue { field: String, value: String },
}

/// Result type alias for dmd_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create an invalid field value error
    pub fn invalid_field(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            value: value.into(),
        }
    }
}
