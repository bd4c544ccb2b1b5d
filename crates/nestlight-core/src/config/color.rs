//! Colors and the textual forms they can be written in.
//!
//! Settings accept colors as `#RRGGBB`, `#RGB` (with or without `#`),
//! CSS3 color names, 24-bit integers, and `"transparent"` / `"none"`.

use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::ConfigError;

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from `0xRRGGBB`.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06X}", self.to_u32())
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_string()
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match ColorSpec::Text(value).parse()? {
            Color::Opaque(rgb) => Ok(rgb),
            Color::Transparent => Err(ConfigError::TransparentBase("color".to_string())),
        }
    }
}

/// A color that may let the layer below show through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Transparent,
    Opaque(Rgb),
}

impl Color {
    pub const fn rgb(value: u32) -> Self {
        Color::Opaque(Rgb::from_u32(value))
    }

    /// The opaque color, if any.
    pub fn opaque(self) -> Option<Rgb> {
        match self {
            Color::Opaque(rgb) => Some(rgb),
            Color::Transparent => None,
        }
    }
}

/// Foreground and background of one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorPair {
    pub foreground: Color,
    pub background: Color,
}

impl ColorPair {
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
        }
    }

    pub const fn foreground(color: u32) -> Self {
        Self::new(Color::rgb(color), Color::Transparent)
    }
}

/// A color as written in a settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Integer(i64),
    Text(String),
}

impl ColorSpec {
    /// Parses the spec into a color.
    pub fn parse(&self) -> Result<Color, ConfigError> {
        match self {
            ColorSpec::Integer(value) => u32::try_from(*value)
                .ok()
                .filter(|&v| v <= 0xFF_FFFF)
                .map(Color::rgb)
                .ok_or(ConfigError::ColorOutOfRange(*value)),
            ColorSpec::Text(text) => parse_color_text(text),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(text: &str) -> Self {
        ColorSpec::Text(text.to_string())
    }
}

fn parse_color_text(text: &str) -> Result<Color, ConfigError> {
    let lowered = text.trim().to_ascii_lowercase();
    if lowered == "transparent" || lowered == "none" {
        return Ok(Color::Transparent);
    }

    Srgb::<u8>::from_str(&lowered)
        .ok()
        .or_else(|| palette::named::from_str(&lowered))
        .map(|srgb| Color::Opaque(Rgb::new(srgb.red, srgb.green, srgb.blue)))
        .ok_or_else(|| ConfigError::InvalidColor(text.to_string()))
}
