//! 8-bit RGB colors with hex parsing and linear blending.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ChartError;

/// An opaque RGB color with one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure white.
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Color from channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Format`] unless exactly six hex digits follow
    /// the optional marker.
    pub fn from_hex(src: &str) -> Result<Self, ChartError> {
        let trimmed = src.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(ChartError::Format(format!("invalid hex color {src:?}")));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| ChartError::Format(format!("{src:?}: {e}")))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Blend toward `other` by `t` (clamped to [0, 1]), rounding each
    /// channel to the nearest integer.
    #[must_use]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            let a = f32::from(a);
            (a + (f32::from(b) - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Color::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_marker() {
        let grey = Color::from_hex("#c4c8db").unwrap();
        assert_eq!(grey, Color::new(0xc4, 0xc8, 0xdb));
        assert_eq!(Color::from_hex("C4C8DB").unwrap(), grey);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(Color::from_hex("#c4c8d").is_err());
        assert!(Color::from_hex("#c4c8dbff").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("##c4c8db").is_err());
    }

    #[test]
    fn hex_round_trips_for_every_channel_value() {
        for v in 0..=255u8 {
            let c = Color::new(v, 255 - v, v / 2);
            assert_eq!(Color::from_hex(&c.to_hex()).unwrap(), c);
        }
    }

    #[test]
    fn to_hex_zero_pads() {
        assert_eq!(Color::new(0, 10, 255).to_hex(), "#000aff");
    }

    #[test]
    fn lerp_rounds_to_nearest() {
        let grey = Color::new(0xc4, 0xc8, 0xdb);
        // 196 + 59 * 0.75 = 240.25, 200 + 55 * 0.75 = 241.25,
        // 219 + 36 * 0.75 = 246
        assert_eq!(grey.lerp(Color::WHITE, 0.75), Color::new(240, 241, 246));
        assert_eq!(
            Color::new(0, 0, 0).lerp(Color::new(1, 3, 255), 0.5),
            Color::new(1, 2, 128)
        );
    }

    #[test]
    fn lerp_endpoints_and_clamping() {
        let a = Color::new(10, 20, 30);
        let b = Color::new(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::new(80, 255, 80)).unwrap();
        assert_eq!(json, "\"#50ff50\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::new(80, 255, 80));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
