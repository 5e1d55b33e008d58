//! ocrcam-present: Pure presentation data shaping (sans-IO).
//!
//! Turns the outcome of one pipeline invocation into the [`View`] data
//! contract the rendering layer consumes: state selection, HTML
//! escaping, captioning, and the plain-text download artifact. No
//! markup rendering and no I/O happen here.

pub mod download;
pub mod escape;
pub mod view;

pub use download::{Download, text_download};
pub use view::View;

use ocrcam_pipeline::{FilterMode, OcrEngine, PipelineError, ProcessResult};

/// Run one full invocation: captured bytes in, [`View`] out.
///
/// This is the whole tool as a pure function. `capture` is `None`
/// before the first photo; otherwise it holds the raw captured bytes.
/// Every [`PipelineError`] is caught here and translated into a
/// user-facing [`View`] variant — nothing propagates as a crash, and
/// nothing is retried or cached. A new capture simply calls this again.
#[must_use]
pub fn invoke(capture: Option<&[u8]>, filter: FilterMode, engine: &dyn OcrEngine) -> View {
    let Some(bytes) = capture else {
        return View::AwaitingCapture {
            hint: view::AWAITING_CAPTURE_HINT.to_string(),
        };
    };

    match ocrcam_pipeline::process(bytes, filter, engine) {
        Ok(result) => present(result, filter),
        Err(PipelineError::Ocr(err)) => View::OcrUnavailable {
            message: format!("{} ({err})", view::OCR_UNAVAILABLE_MESSAGE),
        },
        Err(err @ (PipelineError::EmptyInput | PipelineError::ImageDecode(_))) => {
            View::DecodeFailed {
                message: format!("{} ({err})", view::DECODE_FAILED_MESSAGE),
            }
        }
    }
}

/// Shape a successful pipeline result for display.
///
/// Selects [`View::NoTextDetected`] when the text is empty or
/// whitespace-only; otherwise builds the escaped display markup and the
/// raw download payload. The two never mix: escaping is display-only.
#[must_use]
pub fn present(result: ProcessResult, filter: FilterMode) -> View {
    let caption = filter.caption().to_string();
    if result.text.trim().is_empty() {
        return View::NoTextDetected {
            preview: result.image,
            caption,
            hint: view::NO_TEXT_HINT.to_string(),
        };
    }

    let display_markup = escape::to_display_markup(&result.text);
    let download = download::text_download(&result.text);
    View::Recognized {
        preview: result.image,
        caption,
        display_markup,
        download,
    }
}
