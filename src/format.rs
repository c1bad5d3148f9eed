//! Pixel formats and color packing
//!
//! Every surface stores one 32-bit word per pixel. The format decides how a
//! logical RGBA color lands in that word:
//!
//! | format   | bits 31-24 | 23-16 | 15-8 | 7-0 |
//! |----------|------------|-------|------|-----|
//! | `Argb32` | alpha      | red   | green| blue|
//! | `Rgb24`  | unused (0) | red   | green| blue|

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CanvasError;

// ============================================================================
// PixelFormat
// ============================================================================

/// Layout of a packed pixel word. Fixed for the life of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// Alpha is meaningful and stored in the top byte
    #[default]
    Argb32,
    /// Alpha is ignored; the top byte is always written as zero
    Rgb24,
}

impl PixelFormat {
    /// Raw value of `Argb32` at the numeric boundary
    pub const RAW_ARGB32: u32 = 0;
    /// Raw value of `Rgb24` at the numeric boundary
    pub const RAW_RGB24: u32 = 1;

    /// Decode a raw format tag (as handed over by an external display layer)
    pub fn from_raw(raw: u32) -> Result<Self, CanvasError> {
        match raw {
            Self::RAW_ARGB32 => Ok(Self::Argb32),
            Self::RAW_RGB24 => Ok(Self::Rgb24),
            other => {
                log::warn!("unsupported pixel format {}", other);
                Err(CanvasError::UnsupportedFormat(other))
            }
        }
    }

    /// Raw tag for this format
    pub fn to_raw(self) -> u32 {
        match self {
            Self::Argb32 => Self::RAW_ARGB32,
            Self::Rgb24 => Self::RAW_RGB24,
        }
    }

    /// Word every pixel holds right after allocation:
    /// opaque black for `Argb32`, zero for `Rgb24`
    #[inline]
    pub fn initial_word(self) -> u32 {
        match self {
            Self::Argb32 => 0xff00_0000,
            Self::Rgb24 => 0,
        }
    }

    /// Pack a color for this format
    #[inline]
    pub fn word(self, color: Color) -> u32 {
        color_to_word(self, color)
    }

    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, Self::Argb32)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argb32 => f.write_str("argb32"),
            Self::Rgb24 => f.write_str("rgb24"),
        }
    }
}

impl FromStr for PixelFormat {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "argb32" | "argb" => Ok(Self::Argb32),
            "rgb24" | "rgb" => Ok(Self::Rgb24),
            other => {
                log::warn!("unsupported pixel format name {:?}", other);
                Err(CanvasError::Config(format!("unknown pixel format {:?}", other)))
            }
        }
    }
}

impl TryFrom<u32> for PixelFormat {
    type Error = CanvasError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

// ============================================================================
// Color
// ============================================================================

/// An RGBA quadruple of 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Fully opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::rgba(r, g, b, a)
    }
}

// ============================================================================
// Packing
// ============================================================================

/// Pack a color into a pixel word for `format`. Total and side-effect free.
#[inline]
pub fn color_to_word(format: PixelFormat, color: Color) -> u32 {
    let rgb = ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32;
    match format {
        PixelFormat::Argb32 => ((color.a as u32) << 24) | rgb,
        PixelFormat::Rgb24 => rgb,
    }
}

/// Unpack a pixel word. `Rgb24` words always read back as opaque.
#[inline]
pub fn word_to_color(format: PixelFormat, word: u32) -> Color {
    let r = (word >> 16) as u8;
    let g = (word >> 8) as u8;
    let b = word as u8;
    match format {
        PixelFormat::Argb32 => Color::rgba(r, g, b, (word >> 24) as u8),
        PixelFormat::Rgb24 => Color::rgb(r, g, b),
    }
}
