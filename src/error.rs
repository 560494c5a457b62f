//! Error types for the conversion core.
//!
//! Per-primitive problems (an image that fails to decode, a path that fails
//! to flatten) are handled locally and never surface here. An `Error` always
//! aborts the whole conversion run.

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Document source collaborator failure
    #[error("Document source error: {0}")]
    Source(String),

    /// Deck sink collaborator failure
    #[error("Deck sink error: {0}")]
    Sink(String),

    /// Page index outside the document
    #[error("Page index {index} out of range (document has {count} pages)")]
    PageOutOfRange {
        /// Requested zero-based page index
        index: usize,
        /// Number of pages in the document
        count: usize,
    },

    /// Rasterization of a page region failed
    #[error("Failed to rasterize page {page} region: {reason}")]
    Rasterize {
        /// One-based page number
        page: usize,
        /// Reason reported by the document source
        reason: String,
    },

    /// Invalid options payload
    #[error("Invalid options JSON: {0}")]
    Options(String),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_out_of_range_message() {
        let err = Error::PageOutOfRange { index: 4, count: 3 };
        let msg = format!("{}", err);
        assert!(msg.contains("4"));
        assert!(msg.contains("3 pages"));
    }

    #[test]
    fn test_rasterize_message() {
        let err = Error::Rasterize {
            page: 2,
            reason: "renderer unavailable".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("page 2"));
        assert!(msg.contains("renderer unavailable"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
