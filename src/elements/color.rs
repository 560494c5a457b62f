//! Color values and normalization.
//!
//! Document parsers report colors in several shapes: a packed `0xRRGGBB`
//! integer, or a three-component tuple whose components are integers in
//! 0-255 or floats in 0.0-1.0. Everything is normalized into an 8-bit
//! [`Rgb`] triple; payloads that carry no usable color normalize to `None`
//! and are treated as unspecified downstream, never as an error.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// An 8-bit RGB color triple.
///
/// Serializes as the JSON array `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a new color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// White.
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&self.r)?;
        seq.serialize_element(&self.g)?;
        seq.serialize_element(&self.b)?;
        seq.end()
    }
}

/// One channel of a collaborator-supplied color tuple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorComponent {
    /// Integer channel, expected in 0-255
    Int(i64),
    /// Float channel; values in 0.0-1.0 are scaled by 255
    Float(f64),
}

impl ColorComponent {
    fn to_channel(self) -> u8 {
        match self {
            ColorComponent::Float(v) if (0.0..=1.0).contains(&v) => (v * 255.0).round() as u8,
            ColorComponent::Float(v) => v.round().clamp(0.0, 255.0) as u8,
            ColorComponent::Int(v) => v.clamp(0, 255) as u8,
        }
    }
}

/// A color payload as delivered by a document source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawColor {
    /// Packed `0xRRGGBB` integer
    Packed(u32),
    /// Three-component tuple
    Components([ColorComponent; 3]),
}

/// Normalize a raw color payload into an 8-bit triple.
///
/// # Examples
///
/// ```
/// use deck_oxide::elements::{normalize_color, ColorComponent, RawColor, Rgb};
///
/// let packed = normalize_color(Some(RawColor::Packed(0xAABBCC)));
/// assert_eq!(packed, Some(Rgb::new(0xAA, 0xBB, 0xCC)));
///
/// let floats = normalize_color(Some(RawColor::Components([
///     ColorComponent::Float(0.0),
///     ColorComponent::Float(0.5),
///     ColorComponent::Float(1.0),
/// ])));
/// assert_eq!(floats, Some(Rgb::new(0, 128, 255)));
///
/// assert_eq!(normalize_color(None), None);
/// ```
pub fn normalize_color(value: Option<RawColor>) -> Option<Rgb> {
    match value? {
        RawColor::Packed(v) => Some(Rgb::new(
            ((v >> 16) & 0xFF) as u8,
            ((v >> 8) & 0xFF) as u8,
            (v & 0xFF) as u8,
        )),
        RawColor::Components([r, g, b]) => {
            Some(Rgb::new(r.to_channel(), g.to_channel(), b.to_channel()))
        },
    }
}
