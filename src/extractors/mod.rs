//! Per-page primitive extraction.
//!
//! One parsed page becomes three typed collections (text runs, image
//! placements, vector path records) plus the icon candidates clustered
//! from the vectors. Extraction is the only place raw collaborator payloads
//! are normalized; everything downstream works on typed elements.

pub mod images;
pub mod paths;
pub mod text;

use crate::cluster;
use crate::config::ConversionOptions;
use crate::elements::{IconCandidate, ImagePlacement, TextRun, VectorPathRecord};
use crate::error::Result;
use crate::source::DocumentSource;

pub use images::extract_images;
pub use paths::extract_vectors;
pub use text::extract_texts;

/// Everything extracted from one page, ready for emission.
#[derive(Debug)]
pub struct PageExtraction {
    /// One-based page number
    pub page_no: usize,
    /// Page width in page units
    pub width: f32,
    /// Page height in page units
    pub height: f32,
    /// Text runs in reading order
    pub texts: Vec<TextRun>,
    /// Image placements
    pub images: Vec<ImagePlacement>,
    /// Vector paths surviving the background filter
    pub vectors: Vec<VectorPathRecord>,
    /// Icon candidates clustered from the vectors
    pub icons: Vec<IconCandidate>,
}

/// Extract one page's primitives and cluster its icon candidates.
pub fn extract_page<S: DocumentSource + ?Sized>(
    source: &S,
    page_index: usize,
    options: &ConversionOptions,
) -> Result<PageExtraction> {
    let (width, height) = source.page_size(page_index)?;
    // Degenerate pages must not zero the background-filter denominator.
    let page_area = (width * height).max(1.0);

    let texts = extract_texts(source, page_index, width, height)?;
    let images = extract_images(source, page_index, width, height)?;
    let vectors = extract_vectors(source, page_index, width, height, page_area, options)?;
    let icons = cluster::cluster_icons(&vectors, options);

    log::debug!(
        "page {}: {} texts, {} images, {} vector paths, {} icon candidates",
        page_index + 1,
        texts.len(),
        images.len(),
        vectors.len(),
        icons.len()
    );

    Ok(PageExtraction {
        page_no: page_index + 1,
        width,
        height,
        texts,
        images,
        vectors,
        icons,
    })
}
