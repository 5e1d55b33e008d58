//! Image decoding into the pipeline's pixel grid.
//!
//! Accepts raw captured bytes (JPEG, PNG, BMP, WebP) and produces a
//! [`PixelGrid`] in BGR channel order. Format sniffing is delegated to
//! the `image` crate; any alpha channel is discarded.
//!
//! This is the first step in the pipeline: raw bytes in, BGR grid out.

use crate::types::{ChannelOrder, PipelineError, PixelGrid};

/// Decode raw captured bytes into a BGR [`PixelGrid`].
///
/// The rest of the pipeline assumes the capture-decoder convention of
/// BGR ordering; [`PixelGrid::into_rgb`] swaps it back before the grid
/// reaches the engine or a display surface.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `bytes` is empty or decodes
/// to an image with no pixels.
/// Returns [`PipelineError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
#[must_use = "returns the decoded pixel grid"]
pub fn decode_bgr(bytes: &[u8]) -> Result<PixelGrid, PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let rgb = image::load_from_memory(bytes)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    let mut data = rgb.into_raw();
    for px in data.chunks_exact_mut(3) {
        px.swap(0, 2);
    }

    // A decoded image with a zero dimension has no pixels to recognize.
    PixelGrid::from_raw(width, height, ChannelOrder::Bgr, data).ok_or(PipelineError::EmptyInput)
}
