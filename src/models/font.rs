//! Canonical font description.
//!
//! Family, size, weight and slant as a plain record, with conversions to and
//! from the numeric weight scale platforms and CSS agree on. Platform
//! adapters construct their native font objects from these fields instead of
//! persisting an opaque native handle.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Font family selector.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Encode, Decode)]
pub enum FontFamily {
    /// Whatever the platform considers its default UI face.
    #[default]
    System,
    /// The platform's default fixed-width face.
    Monospace,
    /// A face requested by name.
    Named(String),
}

/// The nine standard weight steps.
///
/// Each step maps to its usual numeric value via [`FontWeight::css_weight`],
/// and arbitrary numeric weights snap to the nearest step via
/// [`FontWeight::from_css_weight`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Encode, Decode,
    EnumIter,
)]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    #[default]
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    /// The numeric weight on the 100 to 900 scale.
    pub fn css_weight(&self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }

    /// Snap a numeric weight to the nearest step, lighter on ties.
    pub fn from_css_weight(weight: u16) -> Self {
        FontWeight::iter()
            .min_by_key(|step| step.css_weight().abs_diff(weight))
            .unwrap_or_default()
    }
}

/// Plain-data font description.
///
/// # Examples
///
/// ```
/// use valet_store::models::{Font, FontWeight};
///
/// let heading = Font::system(24.0).with_weight(FontWeight::Bold);
/// assert_eq!(heading.to_css(), "700 24px system-ui");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Font {
    pub family: FontFamily,
    pub size: f32,
    pub weight: FontWeight,
    pub italic: bool,
}

impl Font {
    /// Regular upright font of the platform's default family.
    pub fn system(size: f32) -> Self {
        Self {
            family: FontFamily::System,
            size,
            weight: FontWeight::Regular,
            italic: false,
        }
    }

    /// Regular upright font of a named family.
    pub fn named<S: Into<String>>(family: S, size: f32) -> Self {
        Self {
            family: FontFamily::Named(family.into()),
            size,
            weight: FontWeight::Regular,
            italic: false,
        }
    }

    pub fn with_weight(self, weight: FontWeight) -> Self {
        Self { weight, ..self }
    }

    pub fn with_italic(self, italic: bool) -> Self {
        Self { italic, ..self }
    }

    /// Format as a CSS `font` shorthand value.
    pub fn to_css(&self) -> String {
        let family = match &self.family {
            FontFamily::System => "system-ui".to_string(),
            FontFamily::Monospace => "monospace".to_string(),
            FontFamily::Named(name) => format!("\"{}\"", name),
        };
        let style = if self.italic { "italic " } else { "" };
        format!("{}{} {}px {}", style, self.weight.css_weight(), self.size, family)
    }
}
