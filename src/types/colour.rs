//! Colour type, hex parsing, and HSL conversions.

use std::fmt;
use std::str::FromStr;

use palette::{Hsl as PaletteHsl, IntoColor, Srgb};

use crate::error::{GeotileError, Result};

/// An RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A colour in HSL space. All three components are in `[0, 1]`;
/// hue is stored as a fraction of a full turn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB` (3 digits, each nibble doubled: `#3c3` → `#33cc33`)
    /// and `#RRGGBB`, with or without the leading `#`. Anything else fails
    /// with [`GeotileError::InvalidColour`].
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !hex.is_ascii() {
            return Err(GeotileError::InvalidColour {
                value: s.to_string(),
                help: Some("Use #RGB or #RRGGBB format".to_string()),
            });
        }

        match hex.len() {
            3 => {
                let r = parse_hex_digit(s, hex, 0)?;
                let g = parse_hex_digit(s, hex, 1)?;
                let b = parse_hex_digit(s, hex, 2)?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(s, &hex[0..2])?;
                let g = parse_hex_byte(s, &hex[2..4])?;
                let b = parse_hex_byte(s, &hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(GeotileError::InvalidColour {
                value: s.to_string(),
                help: Some("Use #RGB or #RRGGBB format".to_string()),
            }),
        }
    }

    /// Convert to HSL.
    pub fn to_hsl(self) -> Hsl {
        let srgb: Srgb<f32> = Srgb::new(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        );
        let hsl: PaletteHsl = srgb.into_color();

        Hsl {
            hue: hsl.hue.into_positive_degrees() / 360.0,
            saturation: hsl.saturation,
            lightness: hsl.lightness,
        }
    }

    /// Convert from HSL, rounding each channel to the nearest integer.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let phsl = PaletteHsl::new(hsl.hue * 360.0, hsl.saturation, hsl.lightness);
        let rgb: Srgb<f32> = phsl.into_color();

        Self::rgb(
            (rgb.red * 255.0).round() as u8,
            (rgb.green * 255.0).round() as u8,
            (rgb.blue * 255.0).round() as u8,
        )
    }

    /// Format as a CSS `rgb(r,g,b)` string.
    pub fn to_css_string(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl FromStr for Colour {
    type Err = GeotileError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Parse a single hex digit out of an already length-checked string.
fn parse_hex_digit(input: &str, hex: &str, index: usize) -> Result<u8> {
    hex.chars()
        .nth(index)
        .and_then(|c| c.to_digit(16))
        .map(|d| d as u8)
        .ok_or_else(|| GeotileError::InvalidColour {
            value: input.to_string(),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(input: &str, s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| GeotileError::InvalidColour {
        value: input.to_string(),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#933c3c").unwrap();
        assert_eq!(c, Colour::rgb(0x93, 0x3c, 0x3c));

        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));
    }

    #[test]
    fn test_from_hex_3digit() {
        let c = Colour::from_hex("#3c3").unwrap();
        assert_eq!(c, Colour::from_hex("#33cc33").unwrap());

        let c = Colour::from_hex("#ABC").unwrap();
        assert_eq!(c, Colour::rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_from_hex_no_hash() {
        let c = Colour::from_hex("933c3c").unwrap();
        assert_eq!(c, Colour::rgb(0x93, 0x3c, 0x3c));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("zz").is_err());
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("#1234567").is_err());
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("\u{1f600}12").is_err());
    }

    #[test]
    fn test_css_string() {
        assert_eq!(Colour::rgb(147, 60, 60).to_css_string(), "rgb(147,60,60)");
        assert_eq!(Colour::rgb(0, 0, 0).to_string(), "rgb(0,0,0)");
    }

    #[test]
    fn test_to_hsl_primaries() {
        let red = Colour::rgb(255, 0, 0).to_hsl();
        assert!(red.hue.abs() < 1e-6);
        assert!((red.saturation - 1.0).abs() < 1e-6);
        assert!((red.lightness - 0.5).abs() < 1e-6);

        let blue = Colour::rgb(0, 0, 255).to_hsl();
        assert!((blue.hue - 240.0 / 360.0).abs() < 1e-6);
    }

    #[test]
    fn test_to_hsl_grey_has_no_saturation() {
        let grey = Colour::rgb(128, 128, 128).to_hsl();
        assert!(grey.saturation.abs() < 1e-6);
    }

    #[test]
    fn test_from_hsl_primaries() {
        let red = Colour::from_hsl(Hsl {
            hue: 0.0,
            saturation: 1.0,
            lightness: 0.5,
        });
        assert_eq!(red, Colour::rgb(255, 0, 0));

        let white = Colour::from_hsl(Hsl {
            hue: 0.25,
            saturation: 0.0,
            lightness: 1.0,
        });
        assert_eq!(white, Colour::rgb(255, 255, 255));
    }

    #[test]
    fn test_hsl_round_trip_close() {
        let original = Colour::rgb(147, 60, 60);
        let back = Colour::from_hsl(original.to_hsl());

        // Rounding through f32 HSL may move a channel by one step at most.
        assert!((i16::from(original.r) - i16::from(back.r)).abs() <= 1);
        assert!((i16::from(original.g) - i16::from(back.g)).abs() <= 1);
        assert!((i16::from(original.b) - i16::from(back.b)).abs() <= 1);
    }
}
