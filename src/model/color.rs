// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Opaque RGB colors and the "automatic" sentinel
//!
//! Colors here are plain 8-bit RGB triples. No color management happens in
//! this crate; a value is converted to a `peniko::Color` only at paint time.

use std::fmt;
use std::str::FromStr;

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a paint color
    pub fn to_color(self) -> Color {
        Color::from_rgb8(self.r, self.g, self.b)
    }

    /// Blend `self` toward `other` by `alpha`/256, the way a classic
    /// menu "lowlight" is computed
    pub fn blend(self, other: Rgb, alpha: u16) -> Rgb {
        let alpha = alpha.min(255);
        let mix = |a: u8, b: u8| -> u8 {
            let a = u16::from(a);
            let b = u16::from(b);
            // a * (255 - alpha) + b * alpha <= 255 * 255
            ((a * (255 - alpha) + b * alpha) >> 8) as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error returned when parsing a `#rrggbb` string fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}', expected #rrggbb")]
pub struct ParseRgbError(pub String);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseRgbError(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseRgbError(s.to_string()))
        };
        Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseRgbError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// The raw color stored on a picker button
///
/// `Automatic` is the sentinel meaning "use the configured default color".
/// It never compares equal to any concrete color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorValue {
    #[default]
    Automatic,
    Rgb(Rgb),
}

impl ColorValue {
    /// Resolve the sentinel against a default color
    pub fn resolve(self, default: Rgb) -> Rgb {
        match self {
            ColorValue::Automatic => default,
            ColorValue::Rgb(rgb) => rgb,
        }
    }

    pub fn is_automatic(self) -> bool {
        matches!(self, ColorValue::Automatic)
    }
}

impl From<Rgb> for ColorValue {
    fn from(value: Rgb) -> Self {
        ColorValue::Rgb(value)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Automatic => f.write_str("automatic"),
            ColorValue::Rgb(rgb) => rgb.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex() {
        assert_eq!("#ff8000".parse::<Rgb>(), Ok(Rgb::new(0xff, 0x80, 0x00)));
        assert_eq!("33CC99".parse::<Rgb>(), Ok(Rgb::new(0x33, 0xcc, 0x99)));
        assert!("#ff80".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Rgb::new(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
    }

    #[test]
    fn automatic_never_equals_a_concrete_color() {
        let black = ColorValue::Rgb(Rgb::BLACK);
        assert_ne!(ColorValue::Automatic, black);
        assert_eq!(ColorValue::Automatic.resolve(Rgb::BLACK), Rgb::BLACK);
        assert_eq!(black.resolve(Rgb::WHITE), Rgb::BLACK);
    }

    #[test]
    fn blend_toward_highlight() {
        let menu = Rgb::new(0xF0, 0xF0, 0xF0);
        let highlight = Rgb::new(0x00, 0x78, 0xD7);
        let low = menu.blend(highlight, 48);
        // (240 * 207 + 0 * 48) >> 8 = 194
        assert_eq!(low.r, 194);
        assert_eq!(low.b, ((240u16 * 207 + 0xD7 * 48) >> 8) as u8);
    }
}
