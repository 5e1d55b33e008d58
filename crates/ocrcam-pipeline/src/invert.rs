//! The optional preprocessing step: full color inversion.
//!
//! Inversion replaces every sample with its bitwise complement
//! (`255 - sample`), producing a photometric negative. It exists to
//! rescue light text on a dark background, which typical OCR engines
//! handle poorly. There is deliberately nothing else here: no
//! thresholding, no deskew, no denoise.

use crate::types::{FilterMode, PixelGrid};

/// Apply the selected filter to a pixel grid.
///
/// [`FilterMode::Filtered`] inverts every sample in place;
/// [`FilterMode::Unfiltered`] returns the grid unchanged. The grid is
/// consumed and returned by value, so no downstream consumer can
/// observe both the filtered and unfiltered variant through aliasing.
/// Shape and channel order are always preserved.
#[must_use = "returns the preprocessed grid"]
pub fn preprocess(mut grid: PixelGrid, filter: FilterMode) -> PixelGrid {
    if filter == FilterMode::Filtered {
        // Bitwise NOT of a u8 sample equals 255 - sample.
        for s in grid.samples_mut() {
            *s = !*s;
        }
    }
    grid
}
