//! Intertitle aesthetics and the color-sampling boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color from components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Predefined white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Predefined black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Parses a hex color string (#RRGGBB, leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let component = |range| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };
        Ok(Self {
            r: component(0..2)?,
            g: component(2..4)?,
            b: component(4..6)?,
        })
    }

    /// Formats the color as #RRGGBB.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Formats the color in ASS style-block notation (&HAABBGGRR), fully
    /// opaque. ASS alpha is inverted, so opaque is 00.
    pub fn to_ass(&self) -> String {
        format!("&H00{:02X}{:02X}{:02X}", self.b, self.g, self.r)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// The essential aesthetics of an intertitle: the lettering color and the
/// card color behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleStyle {
    pub foreground: Rgb,
    pub background: Rgb,
}

impl TitleStyle {
    /// Creates a style from a foreground and background pair.
    pub const fn new(foreground: Rgb, background: Rgb) -> Self {
        Self {
            foreground,
            background,
        }
    }
}

impl Default for TitleStyle {
    /// White lettering on a black card, the overwhelmingly common case for
    /// silent-era intertitles.
    fn default() -> Self {
        Self::new(Rgb::WHITE, Rgb::BLACK)
    }
}

/// Looks up the color pair for a frame of the film.
///
/// The real implementation sits outside this workspace (a k-means quantizer
/// over the frame's pixels, reporting the minority cluster as foreground
/// and the majority as background); range extraction only needs this
/// boundary.
pub trait StyleSampler {
    /// The style visible at `frame`.
    fn sample(&self, frame: i64) -> Result<TitleStyle>;
}

/// A sampler that reports the same style for every frame.
///
/// Used when no frame imagery is available, and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedStyleSampler(pub TitleStyle);

impl StyleSampler for FixedStyleSampler {
    fn sample(&self, _frame: i64) -> Result<TitleStyle> {
        Ok(self.0)
    }
}
