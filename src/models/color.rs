//! Canonical color record.
//!
//! Components are stored as floats in `0.0..=1.0` together with the color
//! space they are expressed in. Conversions to and from platform or CSS
//! representations live here as explicit functions, keeping the stored form
//! independent of any one rendering API.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color space a [`Color`]'s components are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Encode, Decode)]
pub enum ColorSpace {
    /// Standard RGB, the assumed space when none is given.
    #[default]
    Srgb,
    /// Wide-gamut Display P3.
    DisplayP3,
}

/// Plain-data color: red, green, blue, alpha plus the color space.
///
/// Components outside `0.0..=1.0` are clamped by the constructors.
///
/// # Examples
///
/// ```
/// use valet_store::models::Color;
///
/// let accent = Color::from_hex("#1e90ff")?;
/// assert_eq!(accent.to_hex(), "#1e90ff");
/// assert_eq!(accent.to_css(), "rgb(30 144 255)");
/// # Ok::<(), valet_store::models::ColorParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
    pub space: ColorSpace,
}

/// Failure while parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("unsupported hex color length {found}, expected 3, 6 or 8 digits")]
    UnsupportedLength { found: usize },
    #[error("invalid hex digit in color `{text}`")]
    InvalidDigit { text: String },
}

fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

fn channel_to_u8(value: f32) -> u8 {
    (clamp_unit(value) * 255.0).round() as u8
}

impl Color {
    /// Opaque sRGB color from unit-range components.
    pub fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// sRGB color from unit-range components, clamped into range.
    pub fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red: clamp_unit(red),
            green: clamp_unit(green),
            blue: clamp_unit(blue),
            alpha: clamp_unit(alpha),
            space: ColorSpace::Srgb,
        }
    }

    /// Opaque sRGB color from 8-bit channels.
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f32::from(red) / 255.0,
            f32::from(green) / 255.0,
            f32::from(blue) / 255.0,
        )
    }

    /// Same color with a different alpha, clamped into range.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: clamp_unit(alpha),
            ..self
        }
    }

    /// Same components reinterpreted in another color space.
    pub fn in_space(self, space: ColorSpace) -> Self {
        Self { space, ..self }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    ///
    /// Hex colors are always sRGB.
    pub fn from_hex(text: &str) -> Result<Self, ColorParseError> {
        let digits: Vec<u8> = text
            .strip_prefix('#')
            .unwrap_or(text)
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or_else(|| ColorParseError::InvalidDigit {
                        text: text.to_string(),
                    })
            })
            .collect::<Result<_, _>>()?;
        let pair = |hi: u8, lo: u8| hi * 16 + lo;
        let (red, green, blue, alpha) = match digits[..] {
            [r, g, b] => (r * 17, g * 17, b * 17, u8::MAX),
            [r1, r2, g1, g2, b1, b2] => (pair(r1, r2), pair(g1, g2), pair(b1, b2), u8::MAX),
            [r1, r2, g1, g2, b1, b2, a1, a2] => {
                (pair(r1, r2), pair(g1, g2), pair(b1, b2), pair(a1, a2))
            }
            _ => {
                return Err(ColorParseError::UnsupportedLength {
                    found: digits.len(),
                });
            }
        };
        Ok(Self::from_rgb8(red, green, blue).with_alpha(f32::from(alpha) / 255.0))
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let red = channel_to_u8(self.red);
        let green = channel_to_u8(self.green);
        let blue = channel_to_u8(self.blue);
        if self.alpha < 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                red,
                green,
                blue,
                channel_to_u8(self.alpha)
            )
        } else {
            format!("#{:02x}{:02x}{:02x}", red, green, blue)
        }
    }

    /// Format as a CSS color, `rgb(r g b / a)` or `color(display-p3 ...)`.
    pub fn to_css(&self) -> String {
        match self.space {
            ColorSpace::Srgb => {
                let red = channel_to_u8(self.red);
                let green = channel_to_u8(self.green);
                let blue = channel_to_u8(self.blue);
                if self.alpha < 1.0 {
                    format!("rgb({} {} {} / {})", red, green, blue, self.alpha)
                } else {
                    format!("rgb({} {} {})", red, green, blue)
                }
            }
            ColorSpace::DisplayP3 => {
                if self.alpha < 1.0 {
                    format!(
                        "color(display-p3 {} {} {} / {})",
                        self.red, self.green, self.blue, self.alpha
                    )
                } else {
                    format!("color(display-p3 {} {} {})", self.red, self.green, self.blue)
                }
            }
        }
    }
}
