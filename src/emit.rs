//! Slide-space shape emission.
//!
//! Maps page-space primitives onto the fixed-size slide canvas and applies
//! the vector-first-with-fallback policy for icons: every member path of a
//! candidate must flatten usefully before any vector shape is emitted. A
//! single unusable member degrades that one icon, and only that icon, to a
//! rasterized picture of its page region.

use crate::elements::{IconCandidate, TextRun, VectorPathRecord};
use crate::error::{Error, Result};
use crate::flatten::{flatten_path, FlattenedPath};
use crate::geometry::BoundingBox;
use crate::report::IconResult;
use crate::sink::{DeckSink, ShapeStyle, SlideRect, TextFragment};
use crate::source::DocumentSource;
use bytes::Bytes;

/// Slide canvas width in inches (16:9).
pub const SLIDE_WIDTH_IN: f32 = 13.333;

/// Slide canvas height in inches.
pub const SLIDE_HEIGHT_IN: f32 = 7.5;

/// Minimum width/height of any emitted shape, in inches.
pub const MIN_SHAPE_IN: f32 = 0.03;

/// Emitted font sizes are clamped into this range, in points.
pub const MIN_FONT_SIZE_PT: f32 = 6.0;
/// Upper font size clamp, in points.
pub const MAX_FONT_SIZE_PT: f32 = 72.0;

/// Floor applied to emitted stroke widths, in points.
pub const MIN_STROKE_WIDTH_PT: f32 = 0.25;

/// Supersampling factor used when rasterizing icon fallbacks.
pub const RASTER_SUPERSAMPLE: f32 = 2.0;

/// MIME type of rasterized fallback images.
const FALLBACK_MIME: &str = "image/png";

/// Per-page linear transform from page points to slide inches.
///
/// Each axis is scaled independently to fill the canvas; aspect ratio is
/// not preserved.
#[derive(Debug, Clone, Copy)]
pub struct PageScale {
    page_w: f32,
    page_h: f32,
}

impl PageScale {
    /// Create a transform for a page of the given dimensions.
    ///
    /// Dimensions are floored at 1.0 so degenerate pages cannot divide by
    /// zero.
    pub fn new(page_w: f32, page_h: f32) -> Self {
        Self {
            page_w: page_w.max(1.0),
            page_h: page_h.max(1.0),
        }
    }

    /// Horizontal scale factor, inches per page unit.
    pub fn horizontal(&self) -> f32 {
        SLIDE_WIDTH_IN / self.page_w
    }

    /// Vertical scale factor, inches per page unit.
    pub fn vertical(&self) -> f32 {
        SLIDE_HEIGHT_IN / self.page_h
    }

    /// Scale factor for point-denominated values (font sizes, stroke
    /// widths), derived from the vertical axis.
    pub fn point_scale(&self) -> f32 {
        (SLIDE_HEIGHT_IN * 72.0) / self.page_h
    }

    /// Map a page-space box to a slide-space frame.
    pub fn slide_rect(&self, bbox: &BoundingBox) -> SlideRect {
        SlideRect::new(
            bbox.x0 * self.horizontal(),
            bbox.y0 * self.vertical(),
            bbox.width() * self.horizontal(),
            bbox.height() * self.vertical(),
        )
    }
}

/// Outcome of emitting one icon candidate.
#[derive(Debug, Clone)]
pub struct IconEmission {
    /// Vector success or raster fallback
    pub result: IconResult,
    /// Human-readable fallback reason, present on fallback only
    pub reason: Option<String>,
}

/// Emits one page's primitives into the current slide of a deck sink.
#[derive(Debug)]
pub struct ShapeEmitter<'a, S: DeckSink + ?Sized> {
    sink: &'a mut S,
    scale: PageScale,
}

impl<'a, S: DeckSink + ?Sized> ShapeEmitter<'a, S> {
    /// Create an emitter for a page of the given dimensions.
    pub fn new(sink: &'a mut S, page_w: f32, page_h: f32) -> Self {
        Self {
            sink,
            scale: PageScale::new(page_w, page_h),
        }
    }

    /// Emit a text run as a text box.
    ///
    /// The font size is scaled by the vertical axis factor and clamped into
    /// the range authoring tools render sensibly.
    pub fn emit_text(&mut self, run: &TextRun) -> Result<()> {
        let frame = self.scale.slide_rect(&run.bbox).with_min_extent(MIN_SHAPE_IN);
        let font_size = (run.font_size * self.scale.point_scale())
            .clamp(MIN_FONT_SIZE_PT, MAX_FONT_SIZE_PT);

        self.sink.add_text_box(
            frame,
            &TextFragment {
                text: &run.text,
                font_name: &run.font_name,
                font_size,
                color: run.color,
            },
        )
    }

    /// Emit encoded image bytes as a picture at a page-space box.
    ///
    /// A box that scales to a non-positive extent is skipped, not an error.
    pub fn emit_image(&mut self, bbox: &BoundingBox, bytes: &Bytes, mime: &str) -> Result<()> {
        let frame = self.scale.slide_rect(bbox);
        if frame.width <= 0.0 || frame.height <= 0.0 {
            return Ok(());
        }
        self.sink
            .add_picture(frame.with_min_extent(MIN_SHAPE_IN), bytes, mime)
    }

    /// Emit an icon candidate, preferring vector shapes.
    ///
    /// All member paths are flattened first; shapes reach the sink only when
    /// every member is usable. Otherwise the icon's page region is
    /// rasterized at 2x and emitted as a picture, and the returned emission
    /// carries the reason.
    pub fn emit_icon<D: DocumentSource + ?Sized>(
        &mut self,
        source: &D,
        page_index: usize,
        icon: &IconCandidate,
        tolerance: f32,
    ) -> Result<IconEmission> {
        let mut flattened: Vec<FlattenedPath> = Vec::with_capacity(icon.members.len());
        let mut failure: Option<String> = None;

        for member in &icon.members {
            match flatten_path(member, tolerance) {
                Ok(flat) => flattened.push(flat),
                Err(err) => {
                    failure = Some(format!("path {}: {}", member.id, err));
                    break;
                },
            }
        }

        let reason = match failure {
            None => {
                for (flat, member) in flattened.iter().zip(&icon.members) {
                    self.emit_flattened(flat, member)?;
                }
                return Ok(IconEmission {
                    result: IconResult::Vector,
                    reason: None,
                });
            },
            Some(reason) => reason,
        };

        let png = source
            .rasterize_region(page_index, &icon.bbox, RASTER_SUPERSAMPLE)
            .map_err(|e| Error::Rasterize {
                page: page_index + 1,
                reason: e.to_string(),
            })?;
        self.emit_image(&icon.bbox, &png, FALLBACK_MIME)?;

        Ok(IconEmission {
            result: IconResult::FallbackImage,
            reason: Some(reason),
        })
    }

    /// Emit one flattened member path as a shape.
    fn emit_flattened(&mut self, flat: &FlattenedPath, member: &VectorPathRecord) -> Result<()> {
        let style = self.style_for(member);
        match flat {
            FlattenedPath::Rect(rect) => {
                let frame = self.scale.slide_rect(rect).with_min_extent(MIN_SHAPE_IN);
                self.sink.add_rectangle(frame, &style)
            },
            FlattenedPath::Polyline { points, closed } => self.sink.add_freeform(
                points,
                *closed,
                (self.scale.horizontal(), self.scale.vertical()),
                &style,
            ),
        }
    }

    /// Slide-space style for a path record.
    ///
    /// An absent fill stays absent (transparent shape). Stroke width scales
    /// with the vertical axis and keeps a visible floor.
    fn style_for(&self, member: &VectorPathRecord) -> ShapeStyle {
        let width = member.stroke_width.max(MIN_STROKE_WIDTH_PT) * self.scale.point_scale();
        ShapeStyle {
            fill: member.fill,
            stroke: member.stroke,
            stroke_width: width.max(MIN_STROKE_WIDTH_PT),
        }
    }
}
