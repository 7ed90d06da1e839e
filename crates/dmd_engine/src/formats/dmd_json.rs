//! The Run-DMD animation JSON format.
//!
//! A document is a single JSON object: a `header` with the clock/transition
//! options and a `frames` array of row-encoded bitmaps. Loading is
//! all-or-nothing; saving renumbers the frames and otherwise reproduces rows
//! and header values byte-for-byte.

use crate::{Document, Result};

/// Parse a document from JSON text. Any malformed row, wrong frame shape, or
/// JSON error rejects the whole payload.
pub fn load_document(text: &str) -> Result<Document> {
    let document: Document = serde_json::from_str(text)?;
    document.validate()?;
    log::info!("loaded animation with {} frames", document.frames.len());
    Ok(document)
}

/// Serialize the document for saving. Frame numbers are rewritten to each
/// frame's current position; output is pretty-printed with the two-space
/// indentation the format has always shipped with.
pub fn save_document(document: &mut Document) -> Result<String> {
    document.renumber_frames();
    Ok(serde_json::to_string_pretty(document)?)
}

/// Derive the suggested file name for a saved copy: `name.ext` becomes
/// `name-new.ext`.
pub fn suggested_save_name(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}-new.{ext}"),
        None => format!("{file_name}-new"),
    }
}
