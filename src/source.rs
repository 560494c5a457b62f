//! Document source contract.
//!
//! The conversion core never parses document bytes itself: a
//! [`DocumentSource`] implementation (typically wrapping a fixed-layout
//! parsing library) hands over structured page content and renders page
//! regions on demand. Payload types on this boundary stay raw: unnormalized
//! corner quadruples and loosely-shaped colors. The extractors own all
//! normalization.

use crate::elements::{PathOp, RawColor};
use crate::error::Result;
use crate::geometry::BoundingBox;
use bytes::Bytes;

/// A text span as delivered by the document parser, prior to normalization.
#[derive(Debug, Clone)]
pub struct RawTextSpan {
    /// Span text, possibly empty or whitespace-only
    pub text: String,
    /// Unnormalized bounding box as `[x0, y0, x1, y1]`
    pub bbox: [f32; 4],
    /// Font name, when the parser reports one
    pub font_name: Option<String>,
    /// Font size in points, when the parser reports one
    pub font_size: Option<f32>,
    /// Text color
    pub color: Option<RawColor>,
}

/// An image resource together with its occurrence rectangles on one page.
#[derive(Debug, Clone)]
pub struct RawImageResource {
    /// Resource identifier, stable within the document
    pub resource_id: String,
    /// One rectangle per drawn occurrence, `[x0, y0, x1, y1]`
    pub rects: Vec<[f32; 4]>,
}

/// A decoded image resource.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Encoded image payload
    pub bytes: Bytes,
    /// File extension of the encoding, e.g. "png" or "jpg"
    pub ext: String,
}

/// A vector drawing path as delivered by the document parser.
#[derive(Debug, Clone)]
pub struct RawDrawing {
    /// Unnormalized bounding box as `[x0, y0, x1, y1]`
    pub bbox: [f32; 4],
    /// Drawing operators in page space
    pub ops: Vec<PathOp>,
    /// Stroke color
    pub stroke: Option<RawColor>,
    /// Fill color
    pub fill: Option<RawColor>,
    /// Stroke width in points, when the parser reports one
    pub stroke_width: Option<f32>,
    /// Whether the path is declared closed
    pub closed: bool,
    /// Parser's path-type tag
    pub kind: String,
}

/// Access to one parsed fixed-layout document.
///
/// Implementations are queried strictly page by page, in document order.
/// A failing `decode_image` is recoverable (the resource is skipped); every
/// other failure aborts the conversion run.
pub trait DocumentSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Page dimensions `(width, height)` in page units.
    fn page_size(&self, page_index: usize) -> Result<(f32, f32)>;

    /// Structured text spans on a page.
    fn text_spans(&self, page_index: usize) -> Result<Vec<RawTextSpan>>;

    /// Image resources referenced by a page, with occurrence rectangles.
    fn image_resources(&self, page_index: usize) -> Result<Vec<RawImageResource>>;

    /// Decode an image resource to encoded bytes plus extension.
    fn decode_image(&self, page_index: usize, resource_id: &str) -> Result<DecodedImage>;

    /// Vector drawing paths on a page.
    fn drawings(&self, page_index: usize) -> Result<Vec<RawDrawing>>;

    /// Rasterize a page sub-rectangle to encoded PNG bytes at the given
    /// supersampling factor.
    fn rasterize_region(
        &self,
        page_index: usize,
        region: &BoundingBox,
        supersample: f32,
    ) -> Result<Bytes>;
}
