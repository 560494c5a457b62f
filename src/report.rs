//! Conversion report and page-graph aggregation.
//!
//! Two machine-checkable artifacts accompany every produced deck: a report
//! of running counters plus one outcome record per icon, and a page-graph
//! snapshot of every extracted primitive (without raw image bytes). Both
//! serialize with fixed field names consumed by downstream tooling; neither
//! is ever read back by the pipeline.

use crate::elements::{IconCandidate, IconClass, ImagePlacement, Rgb, TextRun, VectorPathRecord};
use crate::error::Result;
use crate::extractors::PageExtraction;
use crate::geometry::BoundingBox;
use serde::Serialize;
use std::collections::BTreeSet;

/// Strategy tag recorded in the page graph.
pub const STRATEGY: &str = "vector-first-with-fallback";

/// Page-graph schema version.
pub const GRAPH_VERSION: &str = "1.0";

/// How one icon candidate was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconResult {
    /// Emitted as editable vector shapes
    Vector,
    /// Degraded to a rasterized picture
    FallbackImage,
}

/// Outcome record for one icon candidate.
#[derive(Debug, Clone, Serialize)]
pub struct IconOutcome {
    /// One-based page number
    pub page_no: usize,
    /// Icon identifier
    pub icon_id: String,
    /// Icon bounding box in page space
    pub bbox_pt: BoundingBox,
    /// Vector success or raster fallback
    pub result: IconResult,
    /// Human-readable fallback reason; empty on success
    pub reason: String,
}

/// Running diagnostics for one conversion run.
///
/// Mutated incrementally while the run progresses; immutable once the run
/// completes. Warnings are a deduplicated set serialized in sorted order.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    /// Pages in the source document
    pub total_pages: usize,
    /// Icons emitted as vector shapes
    pub vector_icons_ok: usize,
    /// Icons degraded to rasterized pictures
    pub vector_icons_fallback: usize,
    /// Text runs emitted
    pub text_count: usize,
    /// Image placements emitted
    pub image_count: usize,
    /// Deduplicated warning messages
    pub warnings: BTreeSet<String>,
    /// One outcome record per icon candidate
    pub icons: Vec<IconOutcome>,
}

impl ConversionReport {
    /// Serialize the report to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Page-graph entry for one vector path.
#[derive(Debug, Clone, Serialize)]
struct VectorGraphEntry {
    id: String,
    bbox_pt: BoundingBox,
    stroke: Option<Rgb>,
    fill: Option<Rgb>,
    width: f32,
    #[serde(rename = "type")]
    kind: String,
    ops: Vec<&'static str>,
}

impl VectorGraphEntry {
    fn from_record(record: &VectorPathRecord) -> Self {
        Self {
            id: record.id.clone(),
            bbox_pt: record.bbox,
            stroke: record.stroke,
            fill: record.fill,
            width: record.stroke_width,
            kind: record.kind.clone(),
            ops: record.op_names(),
        }
    }
}

/// Page-graph entry for one icon candidate.
#[derive(Debug, Clone, Serialize)]
struct IconGraphEntry {
    id: String,
    bbox_pt: BoundingBox,
    paths: Vec<String>,
    classify_result: IconClass,
}

impl IconGraphEntry {
    fn from_candidate(icon: &IconCandidate) -> Self {
        Self {
            id: icon.id.clone(),
            bbox_pt: icon.bbox,
            paths: icon.members.iter().map(|m| m.id.clone()).collect(),
            classify_result: icon.classification,
        }
    }
}

/// Snapshot of one page's extracted primitives.
#[derive(Debug, Clone, Serialize)]
pub struct PageGraphPage {
    /// One-based page number
    pub page_no: usize,
    /// Page width in page units
    pub width_pt: f32,
    /// Page height in page units
    pub height_pt: f32,
    /// Text runs in reading order
    pub texts: Vec<TextRun>,
    /// Image placements (payload bytes excluded)
    pub images: Vec<ImagePlacement>,
    vectors: Vec<VectorGraphEntry>,
    icons: Vec<IconGraphEntry>,
}

impl PageGraphPage {
    fn from_extraction(extraction: &PageExtraction) -> Self {
        Self {
            page_no: extraction.page_no,
            width_pt: extraction.width,
            height_pt: extraction.height,
            texts: extraction.texts.clone(),
            images: extraction.images.clone(),
            vectors: extraction
                .vectors
                .iter()
                .map(VectorGraphEntry::from_record)
                .collect(),
            icons: extraction
                .icons
                .iter()
                .map(IconGraphEntry::from_candidate)
                .collect(),
        }
    }
}

/// Totals computed when a run finishes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GraphSummary {
    /// Pages in the document
    pub pages: usize,
    /// Total text runs
    pub texts: usize,
    /// Total image placements
    pub images: usize,
    /// Icons emitted as vectors
    pub vector_icons_ok: usize,
    /// Icons degraded to pictures
    pub vector_icons_fallback: usize,
}

/// Serializable snapshot of everything extracted during a run.
#[derive(Debug, Clone, Serialize)]
pub struct PageGraph {
    /// Per-page snapshots, in document order
    pub pages: Vec<PageGraphPage>,
    /// Schema version
    pub version: String,
    /// Conversion strategy tag
    pub strategy: String,
    /// Run totals
    pub summary: GraphSummary,
}

impl PageGraph {
    /// Serialize the page graph to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Accumulates the report and page graph over one conversion run.
///
/// Pure accumulation: counters and snapshots in, frozen artifacts out of
/// [`ReportAggregator::finish`]. Holds no logic beyond summary totals.
#[derive(Debug)]
pub struct ReportAggregator {
    report: ConversionReport,
    pages: Vec<PageGraphPage>,
}

impl ReportAggregator {
    /// Create an aggregator for a document with the given page count.
    pub fn new(total_pages: usize) -> Self {
        Self {
            report: ConversionReport {
                total_pages,
                vector_icons_ok: 0,
                vector_icons_fallback: 0,
                text_count: 0,
                image_count: 0,
                warnings: BTreeSet::new(),
                icons: Vec::new(),
            },
            pages: Vec::with_capacity(total_pages),
        }
    }

    /// Record one extracted page: counters plus its graph snapshot.
    pub fn record_page(&mut self, extraction: &PageExtraction) {
        self.report.text_count += extraction.texts.len();
        self.report.image_count += extraction.images.len();
        self.pages.push(PageGraphPage::from_extraction(extraction));
    }

    /// Record one icon outcome.
    pub fn record_icon(&mut self, outcome: IconOutcome) {
        match outcome.result {
            IconResult::Vector => self.report.vector_icons_ok += 1,
            IconResult::FallbackImage => self.report.vector_icons_fallback += 1,
        }
        self.report.icons.push(outcome);
    }

    /// Add a warning message; duplicates collapse.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.report.warnings.insert(message.into());
    }

    /// The report accumulated so far.
    pub fn report(&self) -> &ConversionReport {
        &self.report
    }

    /// Freeze the run's artifacts.
    pub fn finish(self) -> (ConversionReport, PageGraph) {
        let summary = GraphSummary {
            pages: self.report.total_pages,
            texts: self.report.text_count,
            images: self.report.image_count,
            vector_icons_ok: self.report.vector_icons_ok,
            vector_icons_fallback: self.report.vector_icons_fallback,
        };
        let graph = PageGraph {
            pages: self.pages,
            version: GRAPH_VERSION.to_string(),
            strategy: STRATEGY.to_string(),
            summary,
        };
        (self.report, graph)
    }
}
