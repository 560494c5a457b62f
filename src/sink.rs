//! Deck sink contract.
//!
//! The conversion core emits slide content through a [`DeckSink`]
//! implementation (typically wrapping a presentation-authoring library) and
//! never touches the persisted deck format itself. All frames are in slide
//! space: inches on the fixed-size output canvas.

use crate::elements::Rgb;
use crate::error::Result;
use crate::geometry::Point;
use bytes::Bytes;

/// A shape frame in slide space, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideRect {
    /// Distance from the left slide edge
    pub left: f32,
    /// Distance from the top slide edge
    pub top: f32,
    /// Frame width
    pub width: f32,
    /// Frame height
    pub height: f32,
}

impl SlideRect {
    /// Create a new frame.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Frame with width and height floored at `min_extent`.
    ///
    /// Authoring tools may reject zero-size shapes, so every emitted frame
    /// gets a small minimum extent.
    pub fn with_min_extent(self, min_extent: f32) -> Self {
        Self {
            width: self.width.max(min_extent),
            height: self.height.max(min_extent),
            ..self
        }
    }
}

/// A single styled run of text for one text box.
#[derive(Debug, Clone)]
pub struct TextFragment<'a> {
    /// Text content
    pub text: &'a str,
    /// Font name
    pub font_name: &'a str,
    /// Font size in points, already slide-scaled
    pub font_size: f32,
    /// Font color; `None` leaves the authoring default
    pub color: Option<Rgb>,
}

/// Fill and stroke style for an emitted shape.
///
/// An absent fill means the shape is unfilled (transparent background), not
/// filled with a default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// Solid fill color
    pub fill: Option<Rgb>,
    /// Stroke color
    pub stroke: Option<Rgb>,
    /// Stroke width in points, already slide-scaled
    pub stroke_width: f32,
}

/// A deck being authored, one blank slide at a time.
///
/// Shape-adding calls always target the most recently added slide.
pub trait DeckSink {
    /// Append a blank slide to the deck.
    fn add_slide(&mut self) -> Result<()>;

    /// Add a text box containing a single styled run.
    fn add_text_box(&mut self, frame: SlideRect, text: &TextFragment<'_>) -> Result<()>;

    /// Add a picture from encoded image bytes.
    fn add_picture(&mut self, frame: SlideRect, bytes: &Bytes, mime: &str) -> Result<()>;

    /// Add a primitive rectangle shape.
    fn add_rectangle(&mut self, frame: SlideRect, style: &ShapeStyle) -> Result<()>;

    /// Add a freeform polygon shape from an ordered page-space point list.
    ///
    /// `scale` is the `(horizontal, vertical)` factor from page units to
    /// inches; the sink applies it uniformly to every point.
    fn add_freeform(
        &mut self,
        points: &[Point],
        closed: bool,
        scale: (f32, f32),
        style: &ShapeStyle,
    ) -> Result<()>;

    /// Serialize the finished deck to bytes.
    fn serialize(&mut self) -> Result<Bytes>;
}
