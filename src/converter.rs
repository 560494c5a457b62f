//! End-to-end conversion driver.
//!
//! Runs the per-page pipeline in strict document order: extract primitives,
//! cluster icons, then write each page's slide through the deck sink while
//! the aggregator records every decision. One `DeckConverter` call owns all
//! of its mutable state, so simultaneous runs never share anything.

use crate::config::ConversionOptions;
use crate::emit::ShapeEmitter;
use crate::error::Result;
use crate::extractors::{self, PageExtraction};
use crate::report::{ConversionReport, IconOutcome, IconResult, PageGraph, ReportAggregator};
use crate::sink::DeckSink;
use crate::source::DocumentSource;
use bytes::Bytes;

/// Receiver for coarse progress milestones.
///
/// Called at run start, after each page is extracted, after each slide is
/// written, and at completion (where the finished report rides along). The
/// callback must not block materially: the run is single-threaded and stalls
/// with it.
pub trait ProgressSink {
    /// Report progress: percentage in 0..=100, a stage label, and the
    /// finished report on the final call.
    fn progress(&mut self, percent: u8, stage: &str, report: Option<&ConversionReport>);
}

impl<F> ProgressSink for F
where
    F: FnMut(u8, &str, Option<&ConversionReport>),
{
    fn progress(&mut self, percent: u8, stage: &str, report: Option<&ConversionReport>) {
        self(percent, stage, report)
    }
}

/// Everything a completed run produces.
#[derive(Debug)]
pub struct ConversionArtifacts {
    /// Serialized deck bytes
    pub deck_bytes: Bytes,
    /// Diagnostic report
    pub report: ConversionReport,
    /// Page-graph snapshot
    pub page_graph: PageGraph,
}

/// Converts one fixed-layout document into an editable slide deck.
#[derive(Debug, Clone)]
pub struct DeckConverter {
    options: ConversionOptions,
}

impl DeckConverter {
    /// Create a converter with the given options.
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// The options this converter runs with.
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Convert a whole document.
    ///
    /// Pages are processed in document order; a collaborator failure aborts
    /// the run and no partial deck is returned.
    pub fn convert<D, S, P>(
        &self,
        source: &D,
        sink: &mut S,
        progress: &mut P,
    ) -> Result<ConversionArtifacts>
    where
        D: DocumentSource + ?Sized,
        S: DeckSink + ?Sized,
        P: ProgressSink + ?Sized,
    {
        progress.progress(5, "parsing document", None);

        let total_pages = source.page_count();
        let mut aggregator = ReportAggregator::new(total_pages);
        let mut extracted: Vec<PageExtraction> = Vec::with_capacity(total_pages);

        for index in 0..total_pages {
            let page = extractors::extract_page(source, index, &self.options)?;
            aggregator.record_page(&page);
            extracted.push(page);

            let percent = 10 + milestone(index + 1, total_pages, 45.0);
            progress.progress(
                percent,
                &format!("extracting page objects ({}/{})", index + 1, total_pages),
                None,
            );
        }

        progress.progress(60, "writing slides", None);

        for (index, page) in extracted.iter().enumerate() {
            self.write_page(source, sink, page, &mut aggregator)?;

            let percent = 60 + milestone(index + 1, total_pages, 35.0);
            progress.progress(
                percent,
                &format!("writing slide ({}/{})", index + 1, total_pages),
                None,
            );
        }

        let deck_bytes = sink.serialize()?;
        let (report, page_graph) = aggregator.finish();

        progress.progress(100, "conversion complete", Some(&report));

        Ok(ConversionArtifacts {
            deck_bytes,
            report,
            page_graph,
        })
    }

    /// Write one extracted page as a slide.
    fn write_page<D, S>(
        &self,
        source: &D,
        sink: &mut S,
        page: &PageExtraction,
        aggregator: &mut ReportAggregator,
    ) -> Result<()>
    where
        D: DocumentSource + ?Sized,
        S: DeckSink + ?Sized,
    {
        sink.add_slide()?;
        let mut emitter = ShapeEmitter::new(sink, page.width, page.height);

        for run in &page.texts {
            emitter.emit_text(run)?;
        }
        for image in &page.images {
            emitter.emit_image(&image.bbox, &image.bytes, &image.mime)?;
        }

        for icon in &page.icons {
            let emission = emitter.emit_icon(
                source,
                page.page_no - 1,
                icon,
                self.options.vector_tolerance_pt,
            )?;

            if self.options.debug {
                log::debug!(
                    "page {}: icon {} ({} paths) -> {:?}",
                    page.page_no,
                    icon.id,
                    icon.members.len(),
                    emission.result
                );
            }

            let reason = emission.reason.unwrap_or_default();
            if emission.result == IconResult::FallbackImage {
                log::warn!(
                    "page {}: icon {} fell back to image: {}",
                    page.page_no,
                    icon.id,
                    reason
                );
                aggregator.add_warning(format!(
                    "Icon {} on page {} fallback to image: {}",
                    icon.id, page.page_no, reason
                ));
            }

            aggregator.record_icon(IconOutcome {
                page_no: page.page_no,
                icon_id: icon.id.clone(),
                bbox_pt: icon.bbox,
                result: emission.result,
                reason,
            });
        }

        Ok(())
    }
}

/// Fraction of a progress span covered after `done` of `total` steps.
fn milestone(done: usize, total: usize, span: f32) -> u8 {
    (done as f32 / total.max(1) as f32 * span) as u8
}
