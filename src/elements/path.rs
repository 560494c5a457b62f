//! Vector path record element.
//!
//! A path record is an ordered list of drawing operators plus stroke/fill
//! style, as reported by the document parser. Operators carry absolute
//! page-space points; unrecognized operators are preserved as bare point
//! lists rather than rejected, so a single odd operator never discards a
//! whole path.

use crate::elements::color::Rgb;
use crate::geometry::{BoundingBox, Point};

/// A single path drawing operator.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOp {
    /// Begin a new subpath at a point (m operator)
    MoveTo(Point),
    /// Line segment with explicit start and end points (l operator)
    LineTo(Point, Point),
    /// Cubic Bézier curve with all four control points (c operator)
    CurveTo(Point, Point, Point, Point),
    /// Axis-aligned rectangle (re operator)
    Rect(BoundingBox),
    /// Unrecognized operator carrying point-valued arguments
    Other(Vec<Point>),
}

impl PathOp {
    /// Short operator name used in the page-graph snapshot.
    pub fn name(&self) -> &'static str {
        match self {
            PathOp::MoveTo(_) => "m",
            PathOp::LineTo(_, _) => "l",
            PathOp::CurveTo(_, _, _, _) => "c",
            PathOp::Rect(_) => "re",
            PathOp::Other(_) => "?",
        }
    }
}

/// A vector drawing path extracted from a page.
///
/// Records whose bounding box exceeds the background-area threshold are
/// filtered out at extraction time and never reach this type's consumers.
#[derive(Debug, Clone)]
pub struct VectorPathRecord {
    /// Identifier, unique within its page
    pub id: String,
    /// Page-space bounding box
    pub bbox: BoundingBox,
    /// Ordered drawing operators
    pub ops: Vec<PathOp>,
    /// Stroke color, when stroked
    pub stroke: Option<Rgb>,
    /// Fill color, when filled
    pub fill: Option<Rgb>,
    /// Stroke width in points
    pub stroke_width: f32,
    /// Whether the path is declared closed
    pub closed: bool,
    /// Path-type tag as reported by the source (e.g. "f", "s", "fs")
    pub kind: String,
}

impl VectorPathRecord {
    /// Operator-name sequence for the page-graph snapshot.
    pub fn op_names(&self) -> Vec<&'static str> {
        self.ops.iter().map(PathOp::name).collect()
    }
}
