use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A colour as written in configuration.
///
/// Parsed from `#rrggbb`, `#rgb`, `rgb(r, g, b)` or `oklch(l, c, h)` and
/// serialized back to the same notation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    /// Parse a `#rrggbb` or `#rgb` hex colour.
    pub fn hex(s: &str) -> Result<Self, ConfigError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ConfigError::InvalidColor(s.to_string()))?;
        let channel = |range: std::ops::Range<usize>, repeat: bool| -> Result<u8, ConfigError> {
            let part = digits
                .get(range)
                .ok_or_else(|| ConfigError::InvalidColor(s.to_string()))?;
            let value = u8::from_str_radix(part, 16)
                .map_err(|_| ConfigError::InvalidColor(s.to_string()))?;
            Ok(if repeat { value * 17 } else { value })
        };

        match digits.len() {
            6 => Ok(Self::rgb(channel(0..2, false)?, channel(2..4, false)?, channel(4..6, false)?)),
            3 => Ok(Self::rgb(channel(0..1, true)?, channel(1..2, true)?, channel(2..3, true)?)),
            _ => Err(ConfigError::InvalidColor(s.to_string())),
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::hex(s);
        }

        let invalid = || ConfigError::InvalidColor(s.to_string());
        let (name, args) = s
            .strip_suffix(')')
            .and_then(|rest| rest.split_once('('))
            .ok_or_else(invalid)?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        match name.trim() {
            "rgb" => {
                let mut channels = [0u8; 3];
                for (slot, part) in channels.iter_mut().zip(&parts) {
                    *slot = part.parse().map_err(|_| invalid())?;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            "oklch" => {
                let mut values = [0f32; 3];
                for (slot, part) in values.iter_mut().zip(&parts) {
                    *slot = part.parse().map_err(|_| invalid())?;
                }
                Ok(Self::oklch(values[0], values[1], values[2]))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb { r, g, b } => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Oklch { l, c, h } => write!(f, "oklch({l}, {c}, {h})"),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_long_and_short() {
        assert_eq!("#c1c1c1".parse::<Color>().unwrap(), Color::rgb(0xc1, 0xc1, 0xc1));
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!("rgb(1, 2, 3)".parse::<Color>().unwrap(), Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_parse_oklch_function() {
        assert_eq!(
            "oklch(0.7, 0.1, 250)".parse::<Color>().unwrap(),
            Color::oklch(0.7, 0.1, 250.0)
        );
        assert!(matches!(
            "oklch(0.7, 0.1)".parse::<Color>(),
            Err(ConfigError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("rgb(1, 2)".parse::<Color>().is_err());
        assert!("blue".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_round_trips_hex() {
        let color = Color::rgb(0x12, 0xab, 0x00);
        assert_eq!(color.to_string(), "#12ab00");
    }

    #[test]
    fn test_oklch_black_and_white() {
        assert_eq!(Color::oklch(0.0, 0.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));
        let white = Color::oklch(1.0, 0.0, 0.0).to_rgb();
        assert!(white.r >= 254 && white.g >= 254 && white.b >= 254);
    }
}
