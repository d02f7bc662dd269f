use std::fmt;
use std::str::FromStr;

use palette::{FromColor, IntoColor, Lab, Oklch, Srgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Why a hex color string failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("expected 6 hex digits, got {len}")]
    InvalidLength { len: usize },
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidDigit { found: char, position: usize },
}

/// An sRGB color with 8-bit channels.
///
/// The canonical text form is `#RRGGBB`: parsing accepts either case and an
/// optional leading `#`, formatting always produces uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#1E293B`, `1e293b`, or `#FF8800`.
    ///
    /// Exactly 6 hex digits are required after stripping one optional
    /// leading `#`. Malformed input is reported, never coerced to a
    /// default color.
    pub fn from_hex(input: &str) -> Result<Self, ParseColorError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let len = digits.chars().count();
        if len != 6 {
            return Err(ParseColorError::InvalidLength { len });
        }

        let mut nibbles = [0u8; 6];
        for (position, c) in digits.chars().enumerate() {
            match c.to_digit(16) {
                Some(d) => nibbles[position] = d as u8,
                None => return Err(ParseColorError::InvalidDigit { found: c, position }),
            }
        }

        Ok(Self {
            r: nibbles[0] * 16 + nibbles[1],
            g: nibbles[2] * 16 + nibbles[3],
            b: nibbles[4] * 16 + nibbles[5],
        })
    }

    /// Serialize to the canonical uppercase form `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Convert to CIELAB (for K-means clustering and deduplication).
    pub fn to_lab(self) -> Lab {
        let srgb_f32: Srgb<f32> = self.to_srgb_u8().into_format();
        srgb_f32.into_color()
    }

    /// Create from CIELAB.
    pub fn from_lab(lab: Lab) -> Self {
        let srgb_f32: Srgb<f32> = Srgb::from_color(lab);
        Self::from_srgb_f32_clamped(srgb_f32)
    }

    /// Convert to Oklch (for hue geometry and lightness/chroma adjustments).
    pub fn to_oklch(self) -> Oklch {
        let srgb_f32: Srgb<f32> = self.to_srgb_u8().into_format();
        srgb_f32.into_color()
    }

    /// Create from Oklch.
    pub fn from_oklch(oklch: Oklch) -> Self {
        let srgb_f32: Srgb<f32> = Srgb::from_color(oklch);
        Self::from_srgb_f32_clamped(srgb_f32)
    }

    /// Clamp an Srgb<f32> to [0, 1] and convert to Color.
    fn from_srgb_f32_clamped(srgb: Srgb<f32>) -> Self {
        let r = (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b }
    }

    /// Adjust Oklch lightness by `delta`. Positive = lighter, negative = darker.
    /// Lightness is clamped to [0, 1].
    pub fn adjust_lightness(self, delta: f32) -> Color {
        let mut oklch = self.to_oklch();
        oklch.l = (oklch.l + delta).clamp(0.0, 1.0);
        Color::from_oklch(oklch)
    }

    /// Adjust Oklch chroma by `delta`. Positive = more saturated, negative = less.
    /// Chroma is clamped to [0, 0.4].
    pub fn adjust_chroma(self, delta: f32) -> Color {
        let mut oklch = self.to_oklch();
        oklch.chroma = (oklch.chroma + delta).clamp(0.0, 0.4);
        Color::from_oklch(oklch)
    }

    /// Rotate the Oklch hue by `degrees`, wrapping around the color wheel.
    /// Lightness and chroma are preserved; the result is gamut-clamped.
    pub fn rotate_hue(self, degrees: f32) -> Color {
        let oklch = self.to_oklch();
        let hue = f32::from(oklch.hue) + degrees;
        Color::from_oklch(Oklch::new(oklch.l, oklch.chroma, hue))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let original = Color::from_hex("#FF8800").unwrap();
        assert_eq!(original.r, 255);
        assert_eq!(original.g, 136);
        assert_eq!(original.b, 0);
        assert_eq!(original.to_hex(), "#FF8800");
    }

    #[test]
    fn hex_lowercase_input_normalizes_to_uppercase() {
        let color = Color::from_hex("#ff8800").unwrap();
        assert_eq!(color.to_hex(), "#FF8800");
    }

    #[test]
    fn hex_without_hash() {
        let color = Color::from_hex("aabbcc").unwrap();
        assert_eq!(color.to_hex(), "#AABBCC");
    }

    #[test]
    fn hex_short_form_is_rejected() {
        assert_eq!(
            Color::from_hex("#abc"),
            Err(ParseColorError::InvalidLength { len: 3 })
        );
    }

    #[test]
    fn hex_long_form_is_rejected() {
        assert_eq!(
            Color::from_hex("#aabbccdd"),
            Err(ParseColorError::InvalidLength { len: 8 })
        );
    }

    #[test]
    fn hex_bad_digit_reports_position() {
        assert_eq!(
            Color::from_hex("zzzzzz"),
            Err(ParseColorError::InvalidDigit {
                found: 'z',
                position: 0
            })
        );
        assert_eq!(
            Color::from_hex("#aabbcg"),
            Err(ParseColorError::InvalidDigit {
                found: 'g',
                position: 5
            })
        );
    }

    #[test]
    fn hex_non_ascii_is_rejected_not_panicked_on() {
        assert_eq!(
            Color::from_hex("ааbbcc"), // leading chars are Cyrillic
            Err(ParseColorError::InvalidDigit {
                found: 'а',
                position: 0
            })
        );
    }

    #[test]
    fn from_str_matches_from_hex() {
        let parsed: Color = "#1E293B".parse().unwrap();
        assert_eq!(parsed, Color::from_hex("#1E293B").unwrap());
    }

    #[test]
    fn srgb_to_lab_round_trip() {
        let colors = [
            Color::new(200, 100, 50),
            Color::new(0, 255, 0),
            Color::new(128, 128, 128),
            Color::BLACK,
            Color::WHITE,
        ];
        for original in colors {
            let recovered = Color::from_lab(original.to_lab());
            assert!(
                (original.r as i16 - recovered.r as i16).unsigned_abs() <= 1
                    && (original.g as i16 - recovered.g as i16).unsigned_abs() <= 1
                    && (original.b as i16 - recovered.b as i16).unsigned_abs() <= 1,
                "channel drift for {original}: recovered {recovered}"
            );
        }
    }

    #[test]
    fn srgb_to_oklch_round_trip() {
        let colors = [
            Color::new(200, 100, 50),
            Color::new(0, 255, 0),
            Color::new(128, 128, 128),
            Color::WHITE,
        ];
        for original in colors {
            let recovered = Color::from_oklch(original.to_oklch());
            assert!(
                (original.r as i16 - recovered.r as i16).unsigned_abs() <= 1
                    && (original.g as i16 - recovered.g as i16).unsigned_abs() <= 1
                    && (original.b as i16 - recovered.b as i16).unsigned_abs() <= 1,
                "channel drift for {original}: recovered {recovered}"
            );
        }
    }

    #[test]
    fn rotate_hue_full_turn_is_identity() {
        let color = Color::new(200, 60, 40);
        let rotated = color.rotate_hue(360.0);
        assert!(
            (color.r as i16 - rotated.r as i16).unsigned_abs() <= 1
                && (color.g as i16 - rotated.g as i16).unsigned_abs() <= 1
                && (color.b as i16 - rotated.b as i16).unsigned_abs() <= 1,
            "full rotation should return to {color}, got {rotated}"
        );
    }

    #[test]
    fn rotate_hue_of_gray_stays_achromatic() {
        let gray = Color::new(128, 128, 128);
        let rotated = gray.rotate_hue(120.0);
        let oklch = rotated.to_oklch();
        assert!(
            oklch.chroma < 0.02,
            "rotated gray should stay near-achromatic, chroma was {}",
            oklch.chroma
        );
    }

    #[test]
    fn adjust_lightness_clamps_at_white() {
        let result = Color::WHITE.adjust_lightness(1.0);
        assert!(
            result.r >= 254 && result.g >= 254 && result.b >= 254,
            "lightness past 1.0 should clamp to white, got {result}"
        );
    }

    #[test]
    fn display_matches_to_hex() {
        let color = Color::new(171, 205, 239);
        assert_eq!(format!("{color}"), color.to_hex());
    }

    #[test]
    fn serde_round_trips_as_hex_string() {
        let color = Color::new(30, 41, 59);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#1E293B\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }

    #[test]
    fn serde_rejects_malformed_hex() {
        let err = serde_json::from_str::<Color>("\"#abc\"").unwrap_err();
        assert!(
            err.to_string().contains("expected 6 hex digits"),
            "unexpected error: {err}"
        );
    }
}
