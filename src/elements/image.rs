//! Raster image placement element.

use crate::geometry::BoundingBox;
use bytes::Bytes;
use serde::Serialize;

/// One placement of an image resource on a page.
///
/// A single underlying resource drawn at several page locations yields one
/// placement per occurrence rectangle; the encoded payload is shared between
/// them via [`Bytes`]. Raw bytes are excluded from serialization so the
/// page-graph snapshot stays lightweight.
#[derive(Debug, Clone, Serialize)]
pub struct ImagePlacement {
    /// Identifier, unique within its page
    pub id: String,
    /// Page-space occurrence rectangle
    #[serde(rename = "bbox_pt")]
    pub bbox: BoundingBox,
    /// MIME type of the encoded payload, e.g. `image/png`
    pub mime: String,
    /// Encoded image bytes
    #[serde(skip)]
    pub bytes: Bytes,
}
