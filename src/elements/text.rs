//! Positioned text run element.

use crate::elements::color::Rgb;
use crate::geometry::BoundingBox;
use serde::Serialize;

/// A single positioned run of styled text extracted from a page.
///
/// Runs are immutable once extracted: created by the primitive extractor,
/// consumed exactly once by shape emission. The text is always non-empty
/// after trimming and the bounding box is page-normalized.
#[derive(Debug, Clone, Serialize)]
pub struct TextRun {
    /// Text content, trimmed and non-empty
    pub text: String,
    /// Page-space bounding box
    #[serde(rename = "bbox_pt")]
    pub bbox: BoundingBox,
    /// Font name, falling back to a generic sans-serif when absent
    pub font_name: String,
    /// Font size in points, always positive
    #[serde(rename = "font_size_pt")]
    pub font_size: f32,
    /// Text color, when the source specifies one
    pub color: Option<Rgb>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_serialization_shape() {
        let run = TextRun {
            text: "Title".to_string(),
            bbox: BoundingBox::from_corners(10.0, 20.0, 110.0, 40.0),
            font_name: "Helvetica".to_string(),
            font_size: 18.0,
            color: Some(Rgb::new(10, 20, 30)),
        };

        let value = serde_json::to_value(&run).unwrap();
        assert_eq!(value["text"], "Title");
        assert_eq!(value["bbox_pt"][2], 110.0);
        assert_eq!(value["font_name"], "Helvetica");
        assert_eq!(value["font_size_pt"], 18.0);
        assert_eq!(value["color"][0], 10);
    }

    #[test]
    fn test_absent_color_serializes_as_null() {
        let run = TextRun {
            text: "x".to_string(),
            bbox: BoundingBox::from_corners(0.0, 0.0, 1.0, 1.0),
            font_name: "Arial".to_string(),
            font_size: 12.0,
            color: None,
        };
        let value = serde_json::to_value(&run).unwrap();
        assert!(value["color"].is_null());
    }
}
