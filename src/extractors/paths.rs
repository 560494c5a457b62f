//! Vector path extraction.

use crate::config::ConversionOptions;
use crate::elements::{normalize_color, VectorPathRecord};
use crate::error::Result;
use crate::geometry::BoundingBox;
use crate::source::DocumentSource;

/// Stroke width used when the parser reports none.
pub(crate) const DEFAULT_STROKE_WIDTH: f32 = 0.75;

/// Collect a page's vector drawing paths.
///
/// Zero-area paths are dropped, and so is anything covering more than
/// `background_filter_ratio` of the page area: those are page backgrounds,
/// not content.
pub fn extract_vectors<S: DocumentSource + ?Sized>(
    source: &S,
    page_index: usize,
    page_w: f32,
    page_h: f32,
    page_area: f32,
    options: &ConversionOptions,
) -> Result<Vec<VectorPathRecord>> {
    let mut records: Vec<VectorPathRecord> = Vec::new();

    for (idx, drawing) in source.drawings(page_index)?.into_iter().enumerate() {
        let [x0, y0, x1, y1] = drawing.bbox;
        let bbox = BoundingBox::normalized(x0, y0, x1, y1, page_w, page_h);

        let area = bbox.area();
        if area <= 0.0 {
            continue;
        }
        if area / page_area > options.background_filter_ratio {
            continue;
        }

        records.push(VectorPathRecord {
            id: format!("vec_{}", idx),
            bbox,
            ops: drawing.ops,
            stroke: normalize_color(drawing.stroke),
            fill: normalize_color(drawing.fill),
            stroke_width: drawing.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH),
            closed: drawing.closed,
            kind: drawing.kind,
        });
    }

    Ok(records)
}
