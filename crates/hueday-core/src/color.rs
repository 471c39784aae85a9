//! Color primitives: hex colors, named entries and the contrast picker.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Luminance above which dark text is used.
pub const CONTRAST_THRESHOLD: f64 = 0.6;

/// Hex color parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Hex color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("Hex color must have 6 digits: {0:?}")]
    InvalidLength(String),
    #[error("Invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

/// An opaque sRGB color written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string (digits are case-insensitive).
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if digits.len() != 6 {
            return Err(ColorError::InvalidLength(s.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::InvalidDigit(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Perceptual luminance in `0.0..=1.0`.
    pub fn luminance(&self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    /// Foreground color that stays legible on top of this color.
    pub fn text_color(&self) -> TextColor {
        if self.luminance() > CONTRAST_THRESHOLD {
            TextColor::Black
        } else {
            TextColor::White
        }
    }

    /// RGBA bytes with full opacity.
    pub fn to_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Linear interpolation towards `other`, `t` clamped to `0.0..=1.0`.
    pub fn lerp(&self, other: &HexColor, t: f32) -> HexColor {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        HexColor::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Black or white foreground chosen for legibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }

    pub fn to_hex(&self) -> HexColor {
        match self {
            Self::Black => HexColor::BLACK,
            Self::White => HexColor::WHITE,
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contrast color for an arbitrary string.
///
/// Anything that is not a well-formed `#RRGGBB` gets white text.
pub fn text_color_for(hex: &str) -> TextColor {
    match HexColor::parse(hex) {
        Ok(color) => color.text_color(),
        Err(e) => {
            log::debug!("Contrast fallback to white: {}", e);
            TextColor::White
        }
    }
}

/// A generated color and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub hex: HexColor,
    pub name: String,
}

impl ColorEntry {
    pub fn new(hex: HexColor, name: impl Into<String>) -> Self {
        Self { hex, name: name.into() }
    }

    pub fn text_color(&self) -> TextColor {
        self.hex.text_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let color = HexColor::parse("#FFaa01").unwrap();
        assert_eq!(color, HexColor::new(255, 170, 1));
        assert_eq!(color.to_string(), "#ffaa01");
        assert_eq!("#000000".parse::<HexColor>().unwrap(), HexColor::BLACK);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(HexColor::parse("ffaa01"), Err(ColorError::MissingHash(_))));
        assert!(matches!(HexColor::parse("#fff"), Err(ColorError::InvalidLength(_))));
        assert!(matches!(HexColor::parse("#ffaa0g"), Err(ColorError::InvalidDigit(_))));
        assert!(matches!(HexColor::parse("#+1aa01"), Err(ColorError::InvalidDigit(_))));
        assert!(matches!(HexColor::parse("#ffé01"), Err(ColorError::InvalidDigit(_))));
    }

    #[test]
    fn test_text_color_extremes() {
        assert_eq!(HexColor::WHITE.text_color(), TextColor::Black);
        assert_eq!(HexColor::BLACK.text_color(), TextColor::White);
        assert_eq!(HexColor::parse("#ffff00").unwrap().text_color(), TextColor::Black);
        assert_eq!(HexColor::parse("#0000ff").unwrap().text_color(), TextColor::White);
    }

    #[test]
    fn test_threshold_is_strict() {
        // 153 / 255 == 0.6 exactly for a gray.
        let boundary = HexColor::new(153, 153, 153);
        assert!((boundary.luminance() - 0.6).abs() < 1e-12);
        assert_eq!(boundary.text_color(), TextColor::White);

        for (r, g, b) in [(0, 222, 199), (4, 212, 240), (10, 254, 8)] {
            assert_eq!(HexColor::new(r, g, b).text_color(), TextColor::White);
        }

        let above = HexColor::new(154, 154, 154);
        assert_eq!(above.text_color(), TextColor::Black);
    }

    #[test]
    fn test_coefficients_weight_green_most() {
        // Pure green: 0.587 -> white text; add a little red to push past 0.6.
        assert_eq!(HexColor::new(0, 255, 0).text_color(), TextColor::White);
        assert_eq!(HexColor::new(40, 255, 0).text_color(), TextColor::Black);
    }

    #[test]
    fn test_text_color_is_deterministic_over_grays() {
        for v in 0..=255u8 {
            let color = HexColor::new(v, v, v);
            let first = color.text_color();
            assert_eq!(first, color.text_color());
            assert_eq!(first, text_color_for(&color.to_string()));
        }
    }

    #[test]
    fn test_malformed_input_falls_back_to_white() {
        assert_eq!(text_color_for("#fff"), TextColor::White);
        assert_eq!(text_color_for(""), TextColor::White);
        assert_eq!(text_color_for("not a color"), TextColor::White);
        assert_eq!(text_color_for("#ffffff"), TextColor::Black);
    }

    #[test]
    fn test_text_color_names() {
        assert_eq!(TextColor::Black.as_str(), "black");
        assert_eq!(TextColor::White.to_string(), "white");
    }

    #[test]
    fn test_lerp() {
        let a = HexColor::BLACK;
        let b = HexColor::new(200, 100, 50);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), HexColor::new(100, 50, 25));
        assert_eq!(a.lerp(&b, 3.0), b);
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = ColorEntry::new(HexColor::new(0x12, 0x34, 0x56), "Chathams Blue");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r##"{"hex":"#123456","name":"Chathams Blue"}"##);

        let parsed: ColorEntry = serde_json::from_str(r##"{"hex":"#ABCDEF","name":"x"}"##).unwrap();
        assert_eq!(parsed.hex, HexColor::new(0xab, 0xcd, 0xef));
        assert!(serde_json::from_str::<ColorEntry>(r##"{"hex":"#abc","name":"x"}"##).is_err());
    }
}
