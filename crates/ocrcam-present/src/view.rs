//! The data contract handed to the rendering layer.
//!
//! Rather than building markup strings, the presenter exposes a plain
//! [`View`] value — captions, escaped display text, raw download bytes —
//! and lets the rendering layer decide how to draw it. That keeps the
//! escaping and state-selection logic unit-testable without any UI.

use serde::{Deserialize, Serialize};

use ocrcam_pipeline::PixelGrid;

use crate::download::Download;

/// Hint shown before any photo has been taken.
pub const AWAITING_CAPTURE_HINT: &str = "Aún no has tomado una foto.";

/// Hint shown when the engine ran but found no text.
pub const NO_TEXT_HINT: &str =
    "No se detectó texto. Acerca más la cámara, mejora la luz o prueba con Con Filtro.";

/// Message shown when the captured bytes could not be decoded.
pub const DECODE_FAILED_MESSAGE: &str = "No se pudo leer la imagen capturada.";

/// Message shown when the OCR engine could not run.
pub const OCR_UNAVAILABLE_MESSAGE: &str = "El motor OCR no está disponible.";

/// Everything the rendering layer needs to draw one invocation's outcome.
///
/// Exactly one variant per terminal state of the invocation:
/// no capture yet, a decode failure, an engine failure, a blank result,
/// or recognized text. The two failure variants are deliberately
/// distinct from [`View::NoTextDetected`] — "engine unavailable" must
/// never be silently presented as "no text found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    /// No image captured yet; render a single neutral hint and nothing else.
    AwaitingCapture {
        /// The neutral hint text.
        hint: String,
    },

    /// The captured bytes were empty or not a decodable image.
    DecodeFailed {
        /// User-facing message including the underlying decode reason.
        message: String,
    },

    /// The OCR engine could not run.
    OcrUnavailable {
        /// User-facing message including the engine's reason.
        message: String,
    },

    /// The engine ran but returned empty or whitespace-only text.
    NoTextDetected {
        /// Post-filter RGB image for the preview pane.
        preview: PixelGrid,
        /// Preview caption for the selected filter mode.
        caption: String,
        /// Actionable hint instead of an empty result box.
        hint: String,
    },

    /// Text was recognized.
    Recognized {
        /// Post-filter RGB image for the preview pane.
        preview: PixelGrid,
        /// Preview caption for the selected filter mode.
        caption: String,
        /// HTML-escaped text with newlines as `<br>`, display only.
        display_markup: String,
        /// The raw unescaped text as a downloadable artifact.
        download: Download,
    },
}
