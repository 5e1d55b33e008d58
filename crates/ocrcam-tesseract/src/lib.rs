//! ocrcam-tesseract: Tesseract CLI engine for the ocrcam pipeline.
//!
//! Implements [`OcrEngine`] by shelling out to the `tesseract` binary:
//! the pixel grid is PNG-encoded into a temp file and recognized with
//! `tesseract <file> stdout`. Every spawn, exit, or encoding failure
//! maps to [`OcrUnavailable`] so the pipeline never crashes on a
//! missing or broken installation.
//!
//! This is the only crate in the workspace that performs I/O.

use std::path::PathBuf;
use std::process::Command;

use image::ImageEncoder;
use tracing::{debug, warn};

use ocrcam_pipeline::{OcrEngine, OcrUnavailable, PixelGrid};

/// OCR engine backed by the `tesseract` command-line binary.
///
/// By default invokes `tesseract` from `PATH` with the installation's
/// default language. Both are overridable for non-standard setups.
#[derive(Debug, Clone)]
pub struct TesseractCli {
    binary: PathBuf,
    language: Option<String>,
}

impl TesseractCli {
    /// Engine using the `tesseract` binary from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("tesseract"),
            language: None,
        }
    }

    /// Engine using an explicit binary path.
    #[must_use]
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            language: None,
        }
    }

    /// Select a recognition language (passed as `-l <lang>`).
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Probe whether the binary can be executed at all.
    ///
    /// Runs `tesseract --version`. Useful to surface a configuration
    /// problem before the user takes a photo.
    #[must_use]
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .output()
            .is_ok_and(|out| out.status.success())
    }
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractCli {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn recognize(&self, image: &PixelGrid) -> Result<String, OcrUnavailable> {
        // Normalize to RGB; a no-op reorder when the pipeline already did it.
        let rgb = image.clone().into_rgb();
        let png = encode_png(&rgb)?;

        let file = tempfile::Builder::new()
            .prefix("ocrcam-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| OcrUnavailable::new(format!("failed to create temp image: {e}")))?;
        std::fs::write(file.path(), &png)
            .map_err(|e| OcrUnavailable::new(format!("failed to write temp image: {e}")))?;

        let mut cmd = Command::new(&self.binary);
        cmd.arg(file.path()).arg("stdout");
        if let Some(language) = &self.language {
            cmd.arg("-l").arg(language);
        }

        debug!(binary = %self.binary.display(), "invoking tesseract");
        let output = cmd.output().map_err(|e| {
            warn!(binary = %self.binary.display(), error = %e, "failed to spawn tesseract");
            OcrUnavailable::new(format!("failed to run {}: {e}", self.binary.display()))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(stderr = %stderr.trim(), "tesseract exited with failure");
            return Err(OcrUnavailable::new(format!(
                "tesseract failed: {}",
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| OcrUnavailable::new(format!("invalid UTF-8 from tesseract: {e}")))
    }
}

/// PNG-encode an RGB pixel grid for handoff to the CLI.
fn encode_png(image: &PixelGrid) -> Result<Vec<u8>, OcrUnavailable> {
    let mut png = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| OcrUnavailable::new(format!("failed to encode image for engine: {e}")))?;
    Ok(png)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ocrcam_pipeline::ChannelOrder;

    fn tiny_grid() -> PixelGrid {
        PixelGrid::from_pixel(4, 4, ChannelOrder::Rgb, [255, 255, 255]).unwrap()
    }

    #[test]
    fn engine_name() {
        assert_eq!(TesseractCli::new().name(), "tesseract");
    }

    #[test]
    fn missing_binary_is_not_available() {
        let engine = TesseractCli::with_binary("/nonexistent/ocrcam-no-such-tesseract");
        assert!(!engine.is_available());
    }

    #[test]
    fn missing_binary_surfaces_unavailable() {
        let engine = TesseractCli::with_binary("/nonexistent/ocrcam-no-such-tesseract");
        let result = engine.recognize(&tiny_grid());
        let err = result.unwrap_err();
        assert!(
            err.reason().contains("failed to run"),
            "unexpected reason: {}",
            err.reason()
        );
    }

    #[test]
    fn encode_png_produces_png_signature() {
        let png = encode_png(&tiny_grid()).unwrap();
        assert_eq!(
            &png[..8],
            &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']
        );
    }

    #[test]
    fn encoded_png_decodes_back_to_the_same_pixels() {
        let grid = tiny_grid();
        let png = encode_png(&grid).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
        assert_eq!(decoded.as_raw().as_slice(), grid.as_raw());
    }
}
