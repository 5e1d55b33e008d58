//! ocrcam-pipeline: Pure capture-to-text recognition pipeline (sans-IO).
//!
//! Turns one captured image into extracted text through:
//! decode -> optional color inversion -> channel reorder -> OCR.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and calls the OCR engine through the [`OcrEngine`]
//! trait. Real engine bindings live in `ocrcam-tesseract`; presentation
//! data shaping lives in `ocrcam-present`.

pub mod decode;
pub mod engine;
pub mod invert;
pub mod types;

pub use engine::{OcrEngine, OcrUnavailable};
pub use types::{ChannelOrder, FilterMode, PipelineError, PixelGrid, ProcessResult};

/// Run the full recognition pipeline on one captured image.
///
/// Takes the raw captured bytes (JPEG, PNG, BMP, WebP), the selected
/// filter mode, and an OCR engine, then produces a [`ProcessResult`]
/// holding the post-filter RGB image (for preview display) and the
/// extracted text.
///
/// # Pipeline steps
///
/// 1. Decode into a BGR pixel grid (alpha discarded)
/// 2. Optional full color inversion
/// 3. Reorder BGR to RGB for the engine and the preview
/// 4. Recognize text
///
/// The steps run strictly in sequence; nothing outlives the call.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
/// Returns [`PipelineError::Ocr`] if the engine could not run.
pub fn process(
    image_bytes: &[u8],
    filter: FilterMode,
    engine: &dyn OcrEngine,
) -> Result<ProcessResult, PipelineError> {
    // 1. Decode into a BGR pixel grid.
    let grid = decode::decode_bgr(image_bytes)?;

    // 2. Optional full color inversion.
    let grid = invert::preprocess(grid, filter);

    // 3. Reorder to RGB. The engine contract and the preview surface
    //    both expect RGB.
    let rgb = grid.into_rgb();

    // 4. Recognize. An empty string is a valid outcome here.
    let text = engine.recognize(&rgb)?;

    Ok(ProcessResult { image: rgb, text })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Engine stub that returns a fixed string.
    struct FixedEngine(&'static str);

    impl OcrEngine for FixedEngine {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn recognize(&self, _image: &PixelGrid) -> Result<String, OcrUnavailable> {
            Ok(self.0.to_string())
        }
    }

    /// Engine stub that records the grid it was handed.
    struct RecordingEngine {
        seen: Mutex<Option<PixelGrid>>,
    }

    impl RecordingEngine {
        fn new() -> Self {
            Self {
                seen: Mutex::new(None),
            }
        }

        fn seen(&self) -> PixelGrid {
            self.seen.lock().unwrap().clone().unwrap()
        }
    }

    impl OcrEngine for RecordingEngine {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn recognize(&self, image: &PixelGrid) -> Result<String, OcrUnavailable> {
            *self.seen.lock().unwrap() = Some(image.clone());
            Ok(String::new())
        }
    }

    /// Engine stub that always fails.
    struct BrokenEngine;

    impl OcrEngine for BrokenEngine {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn recognize(&self, _image: &PixelGrid) -> Result<String, OcrUnavailable> {
            Err(OcrUnavailable::new("engine exploded"))
        }
    }

    /// Helper: encode a single-color RGB image as a PNG byte buffer.
    fn encode_rgb_png(width: u32, height: u32, pixel: [u8; 3]) -> Vec<u8> {
        let img = image::RgbImage::from_fn(width, height, |_, _| image::Rgb(pixel));
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgb8,
        )
        .unwrap();
        buf
    }

    #[test]
    fn process_empty_input() {
        let result = process(&[], FilterMode::Unfiltered, &FixedEngine("x"));
        assert!(matches!(result, Err(PipelineError::EmptyInput)));
    }

    #[test]
    fn process_corrupt_input() {
        let result = process(&[0xFF, 0x00], FilterMode::Unfiltered, &FixedEngine("x"));
        assert!(matches!(result, Err(PipelineError::ImageDecode(_))));
    }

    #[test]
    fn process_surfaces_engine_failure() {
        let png = encode_rgb_png(10, 10, [10, 20, 200]);
        let result = process(&png, FilterMode::Unfiltered, &BrokenEngine);
        assert!(matches!(result, Err(PipelineError::Ocr(_))));
    }

    #[test]
    fn process_returns_engine_text() {
        let png = encode_rgb_png(10, 10, [10, 20, 200]);
        let result = process(&png, FilterMode::Unfiltered, &FixedEngine("hola mundo")).unwrap();
        assert_eq!(result.text, "hola mundo");
    }

    #[test]
    fn engine_receives_direct_rgb_without_filter() {
        let engine = RecordingEngine::new();
        let png = encode_rgb_png(10, 10, [10, 20, 200]);
        process(&png, FilterMode::Unfiltered, &engine).unwrap();

        let seen = engine.seen();
        assert_eq!(seen.order(), ChannelOrder::Rgb);
        assert_eq!(seen.sample(5, 5, 0), 10);
        assert_eq!(seen.sample(5, 5, 1), 20);
        assert_eq!(seen.sample(5, 5, 2), 200);
    }

    #[test]
    fn engine_receives_complemented_samples_with_filter() {
        let engine = RecordingEngine::new();
        let png = encode_rgb_png(10, 10, [10, 20, 200]);
        process(&png, FilterMode::Filtered, &engine).unwrap();

        let seen = engine.seen();
        assert_eq!(seen.order(), ChannelOrder::Rgb);
        assert_eq!(seen.sample(5, 5, 0), 245);
        assert_eq!(seen.sample(5, 5, 1), 235);
        assert_eq!(seen.sample(5, 5, 2), 55);
    }

    #[test]
    fn result_image_matches_engine_input() {
        // The preview image and the grid handed to the engine must be
        // the same post-filter RGB data.
        let engine = RecordingEngine::new();
        let png = encode_rgb_png(6, 4, [1, 2, 3]);
        let result = process(&png, FilterMode::Filtered, &engine).unwrap();
        assert_eq!(result.image, engine.seen());
    }
}
