//! Geometric primitives for page-space layout math.
//!
//! This module provides the basic geometric types and operations used
//! throughout extraction, clustering, and flattening: bounding-box
//! normalization, union and proximity math, cubic Bézier subdivision, and
//! polyline deduplication.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Minimum number of segments used when subdividing a cubic Bézier curve.
pub const MIN_CURVE_SEGMENTS: usize = 6;

/// Maximum number of segments used when subdividing a cubic Bézier curve.
pub const MAX_CURVE_SEGMENTS: usize = 30;

/// Floor applied to the subdivision tolerance to keep segment counts finite.
pub const MIN_CURVE_TOLERANCE: f32 = 0.1;

/// A 2D point in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use deck_oxide::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Compute the Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use deck_oxide::geometry::{euclidean_distance, Point};
///
/// let p1 = Point::new(0.0, 0.0);
/// let p2 = Point::new(3.0, 4.0);
///
/// assert_eq!(euclidean_distance(&p1, &p2), 5.0);
/// ```
pub fn euclidean_distance(p1: &Point, p2: &Point) -> f32 {
    ((p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)).sqrt()
}

/// An axis-aligned bounding box in page space, stored as corner coordinates.
///
/// The invariant `x0 <= x1 && y0 <= y1` holds for every constructed box.
/// Serializes as the JSON array `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl BoundingBox {
    /// Create a box from two corner points, ordering the corners.
    ///
    /// # Examples
    ///
    /// ```
    /// use deck_oxide::geometry::BoundingBox;
    ///
    /// let bbox = BoundingBox::from_corners(110.0, 70.0, 10.0, 20.0);
    /// assert_eq!(bbox.x0, 10.0);
    /// assert_eq!(bbox.y0, 20.0);
    /// assert_eq!(bbox.x1, 110.0);
    /// assert_eq!(bbox.y1, 70.0);
    /// ```
    pub fn from_corners(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        let (x0, x1) = if x1 < x0 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y1 < y0 { (y1, y0) } else { (y0, y1) };
        Self { x0, y0, x1, y1 }
    }

    /// Create a box clamped into the page rectangle, with corners ordered.
    ///
    /// Every coordinate is first clamped into `[0, page_w] x [0, page_h]`,
    /// then the corners are ordered so that `x0 <= x1` and `y0 <= y1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use deck_oxide::geometry::BoundingBox;
    ///
    /// let bbox = BoundingBox::normalized(-5.0, 30.0, 700.0, 10.0, 612.0, 792.0);
    /// assert_eq!(bbox.x0, 0.0);
    /// assert_eq!(bbox.y0, 10.0);
    /// assert_eq!(bbox.x1, 612.0);
    /// assert_eq!(bbox.y1, 30.0);
    /// ```
    pub fn normalized(x0: f32, y0: f32, x1: f32, y1: f32, page_w: f32, page_h: f32) -> Self {
        let clamp = |v: f32, limit: f32| v.max(0.0).min(limit);
        Self::from_corners(
            clamp(x0, page_w),
            clamp(y0, page_h),
            clamp(x1, page_w),
            clamp(y1, page_h),
        )
    }

    /// Width of the box.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the box.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Area of the box.
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Whether the box has zero area.
    pub fn is_degenerate(&self) -> bool {
        self.area() <= 0.0
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Test whether two boxes are separated by at most `gap` along each axis.
    ///
    /// Boxes that touch or overlap are within any non-negative gap. This is
    /// the adjacency relation used by icon clustering.
    ///
    /// # Examples
    ///
    /// ```
    /// use deck_oxide::geometry::BoundingBox;
    ///
    /// let a = BoundingBox::from_corners(0.0, 0.0, 10.0, 10.0);
    /// let b = BoundingBox::from_corners(14.0, 0.0, 20.0, 10.0);
    ///
    /// assert!(a.is_within_gap(&b, 6.0));
    /// assert!(!a.is_within_gap(&b, 2.0));
    /// ```
    pub fn is_within_gap(&self, other: &BoundingBox, gap: f32) -> bool {
        !(self.x1 + gap < other.x0
            || other.x1 + gap < self.x0
            || self.y1 + gap < other.y0
            || other.y1 + gap < self.y0)
    }

    /// Corner coordinates as `[x0, y0, x1, y1]`.
    pub fn to_array(&self) -> [f32; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }
}

impl Serialize for BoundingBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(4))?;
        for v in self.to_array() {
            seq.serialize_element(&v)?;
        }
        seq.end()
    }
}

/// Number of segments used to subdivide a curve with the given chord length.
///
/// The count is `ceil(chord / max(tolerance, 0.1))` clamped into
/// `[MIN_CURVE_SEGMENTS, MAX_CURVE_SEGMENTS]`, so it grows with chord length
/// at fixed tolerance but is always bounded.
pub fn curve_segment_count(chord: f32, tolerance: f32) -> usize {
    let raw = (chord / tolerance.max(MIN_CURVE_TOLERANCE)).ceil();
    (raw as i64).clamp(MIN_CURVE_SEGMENTS as i64, MAX_CURVE_SEGMENTS as i64) as usize
}

/// Subdivide a cubic Bézier curve into a polyline.
///
/// Samples the standard cubic blend
/// `B(t) = (1-t)^3 P0 + 3(1-t)^2 t P1 + 3(1-t) t^2 P2 + t^3 P3`
/// at `t = i / segments` for `i = 0..=segments`, where the segment count is
/// derived from the P0 -> P3 chord length via [`curve_segment_count`].
/// The returned polyline includes both endpoints.
pub fn flatten_cubic(p0: Point, p1: Point, p2: Point, p3: Point, tolerance: f32) -> Vec<Point> {
    let chord = euclidean_distance(&p0, &p3);
    let segments = curve_segment_count(chord, tolerance);

    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let mt = 1.0 - t;
        let x = mt * mt * mt * p0.x
            + 3.0 * mt * mt * t * p1.x
            + 3.0 * mt * t * t * p2.x
            + t * t * t * p3.x;
        let y = mt * mt * mt * p0.y
            + 3.0 * mt * mt * t * p1.y
            + 3.0 * mt * t * t * p2.y
            + t * t * t * p3.y;
        points.push(Point::new(x, y));
    }
    points
}

/// Drop consecutive points closer than `min_distance`.
///
/// The first point is always kept. Used after flattening to avoid
/// zero-length segments downstream.
pub fn dedup_consecutive(points: Vec<Point>, min_distance: f32) -> Vec<Point> {
    let mut deduped: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        match deduped.last() {
            Some(last) if euclidean_distance(last, &p) < min_distance => {},
            _ => deduped.push(p),
        }
    }
    deduped
}
