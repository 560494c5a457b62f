//! Flattening of vector path operators into polylines.
//!
//! A path record's operator sequence is reduced to either an exact
//! axis-aligned rectangle (the single lossless case) or an ordered polyline
//! whose curve segments are subdivided within a tolerance. Failure is a
//! value, not a panic: the emitter consumes the [`FlattenFailure`] and
//! degrades the owning icon to a rasterized fallback.
//!
//! Known limitation: a record containing several `MoveTo` subpaths is
//! concatenated into one continuous polyline instead of multiple contours,
//! which can misrender multi-contour glyph-like shapes.

use crate::elements::{PathOp, VectorPathRecord};
use crate::geometry::{self, BoundingBox, Point};

/// Consecutive polyline points closer than this are merged.
pub const MIN_POINT_DISTANCE: f32 = 0.01;

/// Result of flattening one path record.
#[derive(Debug, Clone, PartialEq)]
pub enum FlattenedPath {
    /// A single-rectangle path, representable exactly
    Rect(BoundingBox),
    /// General polyline approximation
    Polyline {
        /// Ordered page-space points, deduplicated
        points: Vec<Point>,
        /// Whether the polyline outlines a closed shape
        closed: bool,
    },
}

impl FlattenedPath {
    /// The polyline points this path renders to.
    ///
    /// A rectangle yields its four corners in winding order.
    pub fn points(&self) -> Vec<Point> {
        match self {
            FlattenedPath::Rect(rect) => rect_corners(rect).to_vec(),
            FlattenedPath::Polyline { points, .. } => points.clone(),
        }
    }

    /// Whether the flattened shape is closed. Rectangles always are.
    pub fn is_closed(&self) -> bool {
        match self {
            FlattenedPath::Rect(_) => true,
            FlattenedPath::Polyline { closed, .. } => *closed,
        }
    }
}

/// Why a path could not be flattened into a usable polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FlattenFailure {
    /// The operator list was empty
    #[error("path has no drawing operators")]
    EmptyPath,

    /// Flattening produced fewer than the two points a shape needs
    #[error("path flattened to {0} point(s); at least 2 required")]
    TooFewPoints(usize),
}

/// Corners of a rectangle in fixed winding order.
fn rect_corners(rect: &BoundingBox) -> [Point; 4] {
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ]
}

/// Flatten a path record's operators into a polyline.
///
/// A record whose entire operator list is one rectangle bypasses
/// approximation and is returned exactly. A rectangle operator anywhere in
/// the path forces the closed flag, regardless of the record's own flag.
pub fn flatten_path(
    record: &VectorPathRecord,
    tolerance: f32,
) -> std::result::Result<FlattenedPath, FlattenFailure> {
    if record.ops.is_empty() {
        return Err(FlattenFailure::EmptyPath);
    }

    if let [PathOp::Rect(rect)] = record.ops.as_slice() {
        return Ok(FlattenedPath::Rect(*rect));
    }

    let mut points: Vec<Point> = Vec::new();
    let mut closed = record.closed;

    for op in &record.ops {
        match op {
            PathOp::MoveTo(p) => {
                // Only the first subpath start survives; later MoveTo points
                // are already covered by the preceding segment endpoints.
                if points.is_empty() {
                    points.push(*p);
                }
            },
            PathOp::LineTo(start, end) => {
                if points.is_empty() {
                    points.push(*start);
                }
                points.push(*end);
            },
            PathOp::CurveTo(p0, p1, p2, p3) => {
                let curve = geometry::flatten_cubic(*p0, *p1, *p2, *p3, tolerance);
                if points.is_empty() {
                    points.push(curve[0]);
                }
                points.extend_from_slice(&curve[1..]);
            },
            PathOp::Rect(rect) => {
                let corners = rect_corners(rect);
                if points.is_empty() {
                    points.extend_from_slice(&corners);
                } else {
                    points.extend_from_slice(&corners[1..]);
                }
                closed = true;
            },
            PathOp::Other(args) => {
                // Tolerant fallback: keep the points, never fail the path.
                let Some((first, rest)) = args.split_first() else {
                    continue;
                };
                if points.is_empty() {
                    points.push(*first);
                }
                points.extend_from_slice(rest);
            },
        }
    }

    let points = geometry::dedup_consecutive(points, MIN_POINT_DISTANCE);
    if points.len() < 2 {
        return Err(FlattenFailure::TooFewPoints(points.len()));
    }

    Ok(FlattenedPath::Polyline { points, closed })
}
