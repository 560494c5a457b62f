//! Icon candidate element.

use crate::elements::path::VectorPathRecord;
use crate::geometry::BoundingBox;
use serde::Serialize;

/// Classification assigned to a clustered group of vector paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconClass {
    /// Candidate for editable vector emission
    VectorCandidate,
}

/// A spatial cluster of vector path records hypothesized to form one
/// coherent iconographic shape.
///
/// The bounding box is the union of the member boxes; each path record on a
/// page belongs to at most one candidate.
#[derive(Debug, Clone)]
pub struct IconCandidate {
    /// Identifier, unique within its page
    pub id: String,
    /// Union of member bounding boxes
    pub bbox: BoundingBox,
    /// Member paths, in cluster-visitation order
    pub members: Vec<VectorPathRecord>,
    /// Classification tag
    pub classification: IconClass,
}
