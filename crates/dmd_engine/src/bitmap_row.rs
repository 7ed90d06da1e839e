use serde::{Deserialize, Serialize};

use crate::{
    EngineError, Result,
    limits::{DISPLAY_WIDTH, ROW_TEXT_LEN},
};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// One row of a frame bitmap in its textual form: a single delimiter byte
/// followed by 128 hex digits, one per pixel. The delimiter is an artifact of
/// the on-disk format and is preserved verbatim so documents round-trip
/// byte-for-byte.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitmapRow(String);

impl BitmapRow {
    /// Create a row from its textual form, validating length and digits.
    pub fn from_text(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        Self::validate(&text)?;
        Ok(BitmapRow(text))
    }

    /// A row with every pixel set to `color`, using `|` as delimiter.
    pub fn filled(color: u8) -> Result<Self> {
        Self::encode(&[color; DISPLAY_WIDTH as usize], '|')
    }

    fn validate(text: &str) -> Result<()> {
        if text.len() != ROW_TEXT_LEN {
            return Err(EngineError::InvalidRowLength {
                expected: ROW_TEXT_LEN,
                actual: text.len(),
            });
        }
        for (i, &b) in text.as_bytes()[1..].iter().enumerate() {
            if !b.is_ascii_hexdigit() {
                return Err(EngineError::InvalidRowDigit {
                    column: i,
                    digit: b as char,
                });
            }
        }
        Ok(())
    }

    /// Decode the row into one color index per pixel.
    pub fn decode(&self) -> Result<Vec<u8>> {
        Self::validate(&self.0)?;
        Ok(self.0.as_bytes()[1..]
            .iter()
            .map(|b| (*b as char).to_digit(16).unwrap_or_default() as u8)
            .collect())
    }

    /// Encode 128 color indices into a row with the given delimiter.
    pub fn encode(pixels: &[u8], delimiter: char) -> Result<Self> {
        if pixels.len() != DISPLAY_WIDTH as usize {
            return Err(EngineError::InvalidPixelCount {
                expected: DISPLAY_WIDTH as usize,
                actual: pixels.len(),
            });
        }
        let mut text = String::with_capacity(ROW_TEXT_LEN);
        text.push(delimiter);
        for &pixel in pixels {
            if pixel >= 16 {
                return Err(EngineError::InvalidColorIndex { value: pixel as u32 });
            }
            text.push(HEX_DIGITS[pixel as usize] as char);
        }
        Ok(BitmapRow(text))
    }

    /// Color index at grid column `x`, or `None` when `x` is off the row or
    /// the stored digit is not decodable.
    pub fn pixel_at(&self, x: i32) -> Option<u8> {
        if x < 0 || x >= DISPLAY_WIDTH {
            return None;
        }
        let b = *self.0.as_bytes().get(1 + x as usize)?;
        (b as char).to_digit(16).map(|d| d as u8)
    }

    /// Replace exactly the digit at grid column `x`; every other byte of the
    /// row (delimiter included) stays untouched.
    pub fn set_pixel(&mut self, x: i32, color: u8) -> Result<()> {
        if x < 0 || x >= DISPLAY_WIDTH {
            return Err(EngineError::ColumnOutOfRange { x, max: DISPLAY_WIDTH });
        }
        if color >= 16 {
            return Err(EngineError::InvalidColorIndex { value: color as u32 });
        }
        let idx = 1 + x as usize;
        match self.0.as_bytes().get(idx) {
            Some(b) if b.is_ascii_hexdigit() => {
                let digit = HEX_DIGITS[color as usize] as char;
                self.0.replace_range(idx..=idx, &digit.to_string());
                Ok(())
            }
            Some(&b) => Err(EngineError::InvalidRowDigit {
                column: x as usize,
                digit: b as char,
            }),
            None => Err(EngineError::InvalidRowLength {
                expected: ROW_TEXT_LEN,
                actual: self.0.len(),
            }),
        }
    }

    pub fn delimiter(&self) -> char {
        self.0.chars().next().unwrap_or('|')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BitmapRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
