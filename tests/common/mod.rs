//! Shared mock collaborators for integration tests.

#![allow(dead_code)]

use bytes::Bytes;
use deck_oxide::elements::{PathOp, RawColor, Rgb};
use deck_oxide::error::{Error, Result};
use deck_oxide::geometry::{BoundingBox, Point};
use deck_oxide::sink::{DeckSink, ShapeStyle, SlideRect, TextFragment};
use deck_oxide::source::{
    DecodedImage, DocumentSource, RawDrawing, RawImageResource, RawTextSpan,
};
use std::cell::RefCell;
use std::collections::HashMap;

// ============================================================================
// Document source mock
// ============================================================================

/// One mocked page worth of raw collaborator payloads.
#[derive(Debug, Clone, Default)]
pub struct MockPage {
    pub width: f32,
    pub height: f32,
    pub spans: Vec<RawTextSpan>,
    pub images: Vec<RawImageResource>,
    pub drawings: Vec<RawDrawing>,
}

impl MockPage {
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            ..Default::default()
        }
    }
}

/// In-memory document source; resources decode from a lookup table and
/// rasterization calls are counted.
#[derive(Debug, Default)]
pub struct MockSource {
    pub pages: Vec<MockPage>,
    pub decodable: HashMap<String, DecodedImage>,
    pub raster_calls: RefCell<Vec<(usize, BoundingBox)>>,
}

impl MockSource {
    pub fn new(pages: Vec<MockPage>) -> Self {
        Self {
            pages,
            decodable: HashMap::new(),
            raster_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_png_resource(mut self, resource_id: &str) -> Self {
        self.decodable.insert(
            resource_id.to_string(),
            DecodedImage {
                bytes: Bytes::from_static(b"\x89PNG\r\n\x1a\n"),
                ext: "png".to_string(),
            },
        );
        self
    }

    fn page(&self, page_index: usize) -> Result<&MockPage> {
        self.pages.get(page_index).ok_or(Error::PageOutOfRange {
            index: page_index,
            count: self.pages.len(),
        })
    }
}

impl DocumentSource for MockSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_size(&self, page_index: usize) -> Result<(f32, f32)> {
        let page = self.page(page_index)?;
        Ok((page.width, page.height))
    }

    fn text_spans(&self, page_index: usize) -> Result<Vec<RawTextSpan>> {
        Ok(self.page(page_index)?.spans.clone())
    }

    fn image_resources(&self, page_index: usize) -> Result<Vec<RawImageResource>> {
        Ok(self.page(page_index)?.images.clone())
    }

    fn decode_image(&self, _page_index: usize, resource_id: &str) -> Result<DecodedImage> {
        self.decodable
            .get(resource_id)
            .cloned()
            .ok_or_else(|| Error::Source(format!("cannot decode resource {}", resource_id)))
    }

    fn drawings(&self, page_index: usize) -> Result<Vec<RawDrawing>> {
        Ok(self.page(page_index)?.drawings.clone())
    }

    fn rasterize_region(
        &self,
        page_index: usize,
        region: &BoundingBox,
        _supersample: f32,
    ) -> Result<Bytes> {
        self.raster_calls.borrow_mut().push((page_index, *region));
        Ok(Bytes::from_static(b"\x89PNG-raster"))
    }
}

// ============================================================================
// Deck sink mock
// ============================================================================

/// Everything a conversion run asked the sink to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Slide,
    TextBox {
        frame: SlideRect,
        text: String,
        font_name: String,
        font_size: f32,
        color: Option<Rgb>,
    },
    Picture {
        frame: SlideRect,
        mime: String,
        byte_len: usize,
    },
    Rectangle {
        frame: SlideRect,
        style: ShapeStyle,
    },
    Freeform {
        point_count: usize,
        closed: bool,
        scale: (f32, f32),
        style: ShapeStyle,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slides(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Slide))
            .count()
    }

    pub fn pictures(&self) -> Vec<&SinkEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Picture { .. }))
            .collect()
    }
}

impl DeckSink for RecordingSink {
    fn add_slide(&mut self) -> Result<()> {
        self.events.push(SinkEvent::Slide);
        Ok(())
    }

    fn add_text_box(&mut self, frame: SlideRect, text: &TextFragment<'_>) -> Result<()> {
        self.events.push(SinkEvent::TextBox {
            frame,
            text: text.text.to_string(),
            font_name: text.font_name.to_string(),
            font_size: text.font_size,
            color: text.color,
        });
        Ok(())
    }

    fn add_picture(&mut self, frame: SlideRect, bytes: &Bytes, mime: &str) -> Result<()> {
        self.events.push(SinkEvent::Picture {
            frame,
            mime: mime.to_string(),
            byte_len: bytes.len(),
        });
        Ok(())
    }

    fn add_rectangle(&mut self, frame: SlideRect, style: &ShapeStyle) -> Result<()> {
        self.events.push(SinkEvent::Rectangle {
            frame,
            style: *style,
        });
        Ok(())
    }

    fn add_freeform(
        &mut self,
        points: &[Point],
        closed: bool,
        scale: (f32, f32),
        style: &ShapeStyle,
    ) -> Result<()> {
        self.events.push(SinkEvent::Freeform {
            point_count: points.len(),
            closed,
            scale,
            style: *style,
        });
        Ok(())
    }

    fn serialize(&mut self) -> Result<Bytes> {
        Ok(Bytes::from_static(b"DECK"))
    }
}

// ============================================================================
// Payload builders
// ============================================================================

pub fn span(text: &str, bbox: [f32; 4]) -> RawTextSpan {
    RawTextSpan {
        text: text.to_string(),
        bbox,
        font_name: Some("Helvetica".to_string()),
        font_size: Some(12.0),
        color: Some(RawColor::Packed(0x203040)),
    }
}

pub fn stroked_drawing(bbox: [f32; 4], ops: Vec<PathOp>) -> RawDrawing {
    RawDrawing {
        bbox,
        ops,
        stroke: Some(RawColor::Packed(0x000000)),
        fill: None,
        stroke_width: Some(1.0),
        closed: false,
        kind: "s".to_string(),
    }
}

pub fn rect_op(x0: f32, y0: f32, x1: f32, y1: f32) -> PathOp {
    PathOp::Rect(BoundingBox::from_corners(x0, y0, x1, y1))
}

pub fn line_op(x0: f32, y0: f32, x1: f32, y1: f32) -> PathOp {
    PathOp::LineTo(Point::new(x0, y0), Point::new(x1, y1))
}

pub fn move_op(x: f32, y: f32) -> PathOp {
    PathOp::MoveTo(Point::new(x, y))
}
