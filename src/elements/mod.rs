//! Typed visual primitives extracted from a page.
//!
//! Text runs, image placements, vector path records, and clustered icon
//! candidates. All primitives carry a page-normalized bounding box and are
//! owned by the conversion run that extracted them; none is mutated after
//! the pipeline stage that consumes it.

pub mod color;
pub mod icon;
pub mod image;
pub mod path;
pub mod text;

pub use color::{normalize_color, ColorComponent, RawColor, Rgb};
pub use icon::{IconCandidate, IconClass};
pub use image::ImagePlacement;
pub use path::{PathOp, VectorPathRecord};
pub use text::TextRun;
