//! Text run extraction.

use crate::elements::{normalize_color, TextRun};
use crate::error::Result;
use crate::geometry::BoundingBox;
use crate::source::DocumentSource;
use crate::utils::safe_float_cmp;

/// Font name used when the parser reports none.
pub(crate) const DEFAULT_FONT_NAME: &str = "Arial";

/// Font size used when the parser reports none or a non-positive value.
pub(crate) const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Collect a page's text spans as normalized, reading-ordered runs.
///
/// Spans that are empty after trimming are dropped. The result is sorted by
/// `(y0 rounded to one decimal, x0)` ascending: top-to-bottom then
/// left-to-right, with near-equal rows grouped by the 0.1-unit band.
pub fn extract_texts<S: DocumentSource + ?Sized>(
    source: &S,
    page_index: usize,
    page_w: f32,
    page_h: f32,
) -> Result<Vec<TextRun>> {
    let mut runs: Vec<TextRun> = Vec::new();

    for span in source.text_spans(page_index)? {
        let text = span.text.trim();
        if text.is_empty() {
            continue;
        }

        let [x0, y0, x1, y1] = span.bbox;
        runs.push(TextRun {
            text: text.to_string(),
            bbox: BoundingBox::normalized(x0, y0, x1, y1, page_w, page_h),
            font_name: span
                .font_name
                .unwrap_or_else(|| DEFAULT_FONT_NAME.to_string()),
            font_size: span
                .font_size
                .filter(|size| *size > 0.0)
                .unwrap_or(DEFAULT_FONT_SIZE),
            color: normalize_color(span.color),
        });
    }

    runs.sort_by(|a, b| {
        let row_a = (a.bbox.y0 * 10.0).round();
        let row_b = (b.bbox.y0 * 10.0).round();
        safe_float_cmp(row_a, row_b).then_with(|| safe_float_cmp(a.bbox.x0, b.bbox.x0))
    });

    Ok(runs)
}
