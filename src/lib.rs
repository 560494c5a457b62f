//! # Deck Oxide
//!
//! Reconstructs an editable slide deck from the visual content of a
//! fixed-layout document: positioned text runs, raster images, and vector
//! line-art.
//!
//! ## Core Features
//!
//! - **Typed extraction**: each page becomes text runs, image placements,
//!   and vector path records with page-normalized bounding boxes
//! - **Icon clustering**: small vector paths group into spatially coherent
//!   icon candidates via bounding-box proximity
//! - **Vector-first emission**: icon paths flatten into editable shapes
//!   within a tolerance; anything unflattenable degrades that one icon to a
//!   rasterized picture, never the page or the run
//! - **Machine-checkable diagnostics**: a conversion report with per-icon
//!   outcome records and a page-graph snapshot of every extracted primitive
//!
//! Document parsing, deck serialization, and job management stay behind the
//! [`source::DocumentSource`], [`sink::DeckSink`], and
//! [`converter::ProgressSink`] traits; the core is a pure function of
//! `(document, options)` plus a progress callback.
//!
//! ## Quick Start
//!
//! ```ignore
//! use deck_oxide::{ConversionOptions, DeckConverter};
//!
//! # fn main() -> deck_oxide::Result<()> {
//! let source = MyParserAdapter::open("report.pdf")?;
//! let mut sink = MyPptxAdapter::new();
//!
//! let converter = DeckConverter::new(ConversionOptions::default());
//! let artifacts = converter.convert(&source, &mut sink, &mut |pct, stage, _| {
//!     println!("{:3}% {}", pct, stage);
//! })?;
//!
//! println!("{}", artifacts.report.to_json()?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Geometry and typed primitives
pub mod elements;
pub mod geometry;

// Per-page pipeline stages
pub mod cluster;
pub mod extractors;
pub mod flatten;

// Slide emission
pub mod emit;

// Diagnostics
pub mod report;

// Collaborator contracts
pub mod sink;
pub mod source;

// Driver and configuration
pub mod config;
pub mod converter;

// Re-exports
pub use config::ConversionOptions;
pub use converter::{ConversionArtifacts, DeckConverter, ProgressSink};
pub use error::{Error, Result};
pub use report::{ConversionReport, IconOutcome, IconResult, PageGraph};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all
    /// other values, so sorting never panics on hostile coordinates.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater, // NaN > all numbers
            (false, true) => Ordering::Less,    // all numbers < NaN
            (false, false) => {
                // Both are normal numbers, safe to unwrap
                a.partial_cmp(&b).unwrap()
            },
        }
    }

}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
