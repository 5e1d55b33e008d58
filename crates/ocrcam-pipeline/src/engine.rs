//! The OCR engine boundary.
//!
//! The engine is an external black box: pixels in, text out. It sits
//! behind the [`OcrEngine`] trait so the pipeline is testable with a
//! stub and independent of any real OCR installation.

use serde::{Deserialize, Serialize};

use crate::types::PixelGrid;

/// The OCR engine could not run.
///
/// Raised for a missing binary, a bad installation, or an internal
/// engine fault. Deliberately distinct from an engine that ran and
/// found no text, which is reported as `Ok` with an empty string.
///
/// Carries only a human-readable reason: the engine is a black box and
/// every failure is terminal for the invocation, so the reason is only
/// ever shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("OCR engine unavailable: {0}")]
pub struct OcrUnavailable(String);

impl OcrUnavailable {
    /// Create an error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    /// The human-readable reason the engine could not run.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.0
    }
}

/// A synchronous, blocking text-recognition engine.
pub trait OcrEngine: Send + Sync {
    /// Engine identifier for diagnostics (e.g. `"tesseract"`).
    fn name(&self) -> &'static str;

    /// Extract text from an image.
    ///
    /// The pipeline always passes the grid in RGB channel order.
    /// An empty or whitespace-only string is a valid result.
    ///
    /// # Errors
    ///
    /// Returns [`OcrUnavailable`] if the engine could not run at all.
    fn recognize(&self, image: &PixelGrid) -> Result<String, OcrUnavailable>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_display_includes_reason() {
        let err = OcrUnavailable::new("tesseract not on PATH");
        assert_eq!(
            err.to_string(),
            "OCR engine unavailable: tesseract not on PATH"
        );
        assert_eq!(err.reason(), "tesseract not on PATH");
    }

    #[test]
    fn unavailable_serde_round_trip() {
        let err = OcrUnavailable::new("engine fault");
        let json = serde_json::to_string(&err).unwrap();
        let deserialized: OcrUnavailable = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }
}
