//! RGB color type, hex formatting, and gradient interpolation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color with 8-bit channels.
///
/// Colors serialize as 6-hex-digit strings (`"#rrggbb"`), the format used by
/// the persisted drawing document.
///
/// # Examples
///
/// ```
/// use vectorpad::draw::Color;
/// let red: Color = "#ff0000".parse().unwrap();
/// assert_eq!(red.to_string(), "#ff0000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linearly interpolates between `self` and `other` at ratio `i / steps`.
    ///
    /// Each channel is interpolated independently and truncated (not rounded)
    /// to an integer value, so a black-to-white ramp tops out at `#fefefe` at
    /// the last step rather than reaching pure white.
    pub fn lerp_step(&self, other: Color, i: usize, steps: usize) -> Color {
        debug_assert!(steps > 0);
        let channel = |a: u8, b: u8| {
            let value = f64::from(a) + (f64::from(b) - f64::from(a)) * i as f64 / steps as f64;
            value as u8
        };
        Color {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{0}': expected '#rrggbb' or a known color name")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() == 6 {
                let parse =
                    |range| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid(trimmed));
                return Ok(Color {
                    r: parse(0..2)?,
                    g: parse(2..4)?,
                    b: parse(4..6)?,
                });
            }
            return Err(invalid(trimmed));
        }
        name_to_color(trimmed).ok_or_else(|| invalid(trimmed))
    }
}

fn invalid(s: &str) -> ParseColorError {
    ParseColorError(s.to_string())
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional fill colors.
///
/// The document format encodes "no fill" as the empty string (a hollow shape
/// keeps its `color` field but leaves it blank), so `Option<Color>` cannot use
/// the derived impls directly.
pub mod opt_hex {
    use super::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(color) => serializer.collect_str(color),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Color>, D::Error> {
        let s = Option::<String>::deserialize(deserializer)?;
        match s.as_deref() {
            None | Some("") => Ok(None),
            Some(text) => text.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const ORANGE: Color = Color::new(255, 128, 0);
pub const PINK: Color = Color::new(255, 0, 255);

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config
/// file, and accepted anywhere a hex string is.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let color: Color = "#1a2b3c".parse().unwrap();
        assert_eq!(color, Color::new(0x1a, 0x2b, 0x3c));
        assert_eq!(color.to_string(), "#1a2b3c");
    }

    #[test]
    fn named_colors_parse_case_insensitively() {
        assert_eq!("Red".parse::<Color>().unwrap(), RED);
        assert_eq!("BLACK".parse::<Color>().unwrap(), BLACK);
        assert!("chartreuse".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
    }

    #[test]
    fn lerp_truncates_channels() {
        // 799/800 of the way from black to white: 255 * 799 / 800 = 254.68...
        let band = BLACK.lerp_step(WHITE, 799, 800);
        assert_eq!(band, Color::new(254, 254, 254));
        assert_eq!(BLACK.lerp_step(WHITE, 0, 800), BLACK);
    }

    #[test]
    fn optional_fill_serializes_as_empty_string() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "opt_hex")]
            fill: Option<Color>,
        }

        let json = serde_json::to_string(&Wrapper { fill: None }).unwrap();
        assert_eq!(json, r#"{"fill":""}"#);
        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert!(back.fill.is_none());

        let json = serde_json::to_string(&Wrapper { fill: Some(RED) }).unwrap();
        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back.fill, Some(RED));
    }
}
