//! Configuration for a conversion run.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Options governing one document-to-deck conversion run.
///
/// Immutable input to a run. Deserialization accepts a sparse override set:
/// absent fields take their defaults and unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Operating mode tag, recorded but not interpreted by the core
    pub mode: String,

    /// Curve subdivision tolerance in points
    pub vector_tolerance_pt: f32,

    /// Maximum bounding-box gap for two paths to join one icon cluster
    pub cluster_gap_pt: f32,

    /// Paths covering more than this fraction of the page area are treated
    /// as backgrounds and discarded (0-1)
    pub background_filter_ratio: f32,

    /// Minimum icon side length in points
    pub min_icon_size_pt: f32,

    /// Maximum icon side length in points
    pub max_icon_size_pt: f32,

    /// Emit extra per-icon diagnostics to the log
    pub debug: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            mode: "local_high_precision".to_string(),
            vector_tolerance_pt: 0.6,
            cluster_gap_pt: 6.0,
            background_filter_ratio: 0.35,
            min_icon_size_pt: 8.0,
            max_icon_size_pt: 220.0,
            debug: false,
        }
    }
}

impl ConversionOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON override set.
    ///
    /// # Examples
    ///
    /// ```
    /// use deck_oxide::ConversionOptions;
    ///
    /// let options = ConversionOptions::from_json(r#"{"cluster_gap_pt": 4.0}"#).unwrap();
    /// assert_eq!(options.cluster_gap_pt, 4.0);
    /// assert_eq!(options.vector_tolerance_pt, 0.6);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Options(e.to_string()))
    }

    /// Set the operating mode tag.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Set the curve subdivision tolerance.
    pub fn with_vector_tolerance(mut self, tolerance_pt: f32) -> Self {
        self.vector_tolerance_pt = tolerance_pt;
        self
    }

    /// Set the cluster gap tolerance.
    pub fn with_cluster_gap(mut self, gap_pt: f32) -> Self {
        self.cluster_gap_pt = gap_pt;
        self
    }

    /// Set the background filter ratio.
    pub fn with_background_filter_ratio(mut self, ratio: f32) -> Self {
        self.background_filter_ratio = ratio;
        self
    }

    /// Set the accepted icon side-length range.
    pub fn with_icon_size_range(mut self, min_pt: f32, max_pt: f32) -> Self {
        self.min_icon_size_pt = min_pt;
        self.max_icon_size_pt = max_pt;
        self
    }

    /// Enable per-icon debug diagnostics.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConversionOptions::default();
        assert_eq!(options.mode, "local_high_precision");
        assert_eq!(options.vector_tolerance_pt, 0.6);
        assert_eq!(options.cluster_gap_pt, 6.0);
        assert_eq!(options.background_filter_ratio, 0.35);
        assert_eq!(options.min_icon_size_pt, 8.0);
        assert_eq!(options.max_icon_size_pt, 220.0);
        assert!(!options.debug);
    }

    #[test]
    fn test_sparse_json_overrides() {
        let options =
            ConversionOptions::from_json(r#"{"mode": "editable", "min_icon_size_pt": 12.0}"#)
                .unwrap();
        assert_eq!(options.mode, "editable");
        assert_eq!(options.min_icon_size_pt, 12.0);
        // Remaining fields keep their defaults.
        assert_eq!(options.max_icon_size_pt, 220.0);
        assert_eq!(options.background_filter_ratio, 0.35);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let options =
            ConversionOptions::from_json(r#"{"image_scale": 2, "cluster_gap_pt": 3.0}"#).unwrap();
        assert_eq!(options.cluster_gap_pt, 3.0);
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = ConversionOptions::from_json("{not json").unwrap_err();
        assert!(format!("{}", err).contains("Invalid options JSON"));
    }

    #[test]
    fn test_builder_setters() {
        let options = ConversionOptions::new()
            .with_mode("fidelity")
            .with_vector_tolerance(0.3)
            .with_cluster_gap(8.0)
            .with_background_filter_ratio(0.5)
            .with_icon_size_range(4.0, 160.0)
            .with_debug(true);

        assert_eq!(options.mode, "fidelity");
        assert_eq!(options.vector_tolerance_pt, 0.3);
        assert_eq!(options.cluster_gap_pt, 8.0);
        assert_eq!(options.background_filter_ratio, 0.5);
        assert_eq!(options.min_icon_size_pt, 4.0);
        assert_eq!(options.max_icon_size_pt, 160.0);
        assert!(options.debug);
    }
}
