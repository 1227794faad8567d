//! Platform-independent value models.
//!
//! Color and font descriptions as plain data records with explicit
//! conversions, so the same stored value round-trips across platforms with
//! incompatible native types. All models derive both serde and bincode
//! traits and can be persisted through any backend.

pub mod color;
pub mod font;

pub use color::{Color, ColorParseError, ColorSpace};
pub use font::{Font, FontFamily, FontWeight};
