use std::fmt::Display;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{EngineError, Result, limits::PALETTE_LEN, limits::TRANSPARENT_IDX};

lazy_static::lazy_static! {
    static ref HEX_COLOR_REGEX: Regex = Regex::new(r"([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})").unwrap();
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Color: r={:02X}, g={:02X}, b={:02X}}}", self.r, self.g, self.b)
    }
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn get_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        if let Some(cap) = HEX_COLOR_REGEX.captures(hex) {
            let (_, [r, g, b]) = cap.extract();
            let r = u32::from_str_radix(r, 16)?;
            let g = u32::from_str_radix(g, 16)?;
            let b = u32::from_str_radix(b, 16)?;
            Ok(Color::new(r as u8, g as u8, b as u8))
        } else {
            Err(EngineError::invalid_field("hex color", hex))
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Color {
            r: value.0,
            g: value.1,
            b: value.2,
        }
    }
}

/// The fixed 16-entry panel palette: black, a red ramp, and the light grey
/// placeholder that stands in for the transparency sentinel on screen.
pub const DMD_PALETTE: [Color; PALETTE_LEN] = [
    Color::new(0x00, 0x00, 0x00),
    Color::new(0x70, 0x00, 0x00),
    Color::new(0x7b, 0x00, 0x00),
    Color::new(0x86, 0x00, 0x00),
    Color::new(0x91, 0x00, 0x00),
    Color::new(0x9c, 0x00, 0x00),
    Color::new(0xa7, 0x00, 0x00),
    Color::new(0xb2, 0x00, 0x00),
    Color::new(0xbd, 0x00, 0x00),
    Color::new(0xc8, 0x00, 0x00),
    Color::new(0xe0, 0xe0, 0xe0),
    Color::new(0xd3, 0x00, 0x00),
    Color::new(0xde, 0x00, 0x00),
    Color::new(0xe9, 0x00, 0x00),
    Color::new(0xf4, 0x00, 0x00),
    Color::new(0xff, 0x00, 0x00),
];

/// Display color for a palette index. The transparency sentinel resolves to
/// its own palette slot (the checkerboard grey).
pub fn display_color(index: u8) -> Color {
    DMD_PALETTE[(index as usize).min(PALETTE_LEN - 1)]
}

/// Display color for the transparency sentinel.
pub fn transparent_color() -> Color {
    DMD_PALETTE[TRANSPARENT_IDX as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = Color::new(0xe0, 0xe0, 0xe0);
        assert_eq!("#e0e0e0", color.to_hex());
        assert_eq!(color, Color::from_hex(&color.to_hex()).unwrap());
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#e0e0").is_err());
        assert!(Color::from_hex("red").is_err());
    }

    #[test]
    fn test_sentinel_display_color() {
        assert_eq!(Color::new(0xe0, 0xe0, 0xe0), transparent_color());
    }
}
