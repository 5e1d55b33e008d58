//! Shared types for the ocrcam recognition pipeline.

use serde::{Deserialize, Serialize};

/// Number of color channels in every [`PixelGrid`].
///
/// Always 3. Alpha, when present in the source image, is discarded at
/// decode time.
pub const CHANNELS: usize = 3;

/// Ordering of the three color channels within a [`PixelGrid`].
///
/// Capture decoders conventionally hand the pipeline BGR data; OCR
/// engines and preview surfaces expect RGB. The grid records which
/// ordering it currently holds so the reorder happens exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelOrder {
    /// Blue, green, red — the decoder's native order.
    Bgr,
    /// Red, green, blue — the order recognizers and displays expect.
    Rgb,
}

/// In-memory decoded image: `height * width * 3` unsigned 8-bit samples
/// in row-major order.
///
/// Construction enforces positive dimensions and a buffer length of
/// exactly `width * height * 3`; every method preserves both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    order: ChannelOrder,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Create a grid from a raw sample buffer.
    ///
    /// Returns `None` if either dimension is zero or `data` does not
    /// hold exactly `width * height * 3` samples.
    #[must_use]
    pub fn from_raw(width: u32, height: u32, order: ChannelOrder, data: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(CHANNELS)?;
        if width == 0 || height == 0 || data.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            order,
            data,
        })
    }

    /// Create a grid filled with a single repeated pixel.
    ///
    /// Returns `None` if either dimension is zero.
    #[must_use]
    pub fn from_pixel(width: u32, height: u32, order: ChannelOrder, pixel: [u8; 3]) -> Option<Self> {
        let pixels = (width as usize).checked_mul(height as usize)?;
        let mut data = Vec::with_capacity(pixels.checked_mul(CHANNELS)?);
        for _ in 0..pixels {
            data.extend_from_slice(&pixel);
        }
        Self::from_raw(width, height, order, data)
    }

    /// Width in pixels. Always positive.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels. Always positive.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Current channel ordering.
    #[must_use]
    pub const fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Borrow the raw sample buffer.
    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the raw sample buffer.
    ///
    /// The buffer length is fixed through the slice, so the shape
    /// invariant cannot be violated here.
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the grid and return the underlying sample buffer.
    #[must_use]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Read one sample.
    ///
    /// `channel` is an index into the current [`ChannelOrder`].
    ///
    /// # Panics
    ///
    /// Panics if `x`, `y`, or `channel` is out of bounds.
    #[must_use]
    pub fn sample(&self, x: u32, y: u32, channel: usize) -> u8 {
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS + channel;
        self.data[idx]
    }

    /// Reorder the grid to RGB.
    ///
    /// Swaps the first and third channel of every pixel when the grid
    /// is BGR; a grid already in RGB passes through untouched.
    #[must_use = "returns the reordered grid"]
    pub fn into_rgb(mut self) -> Self {
        if self.order == ChannelOrder::Bgr {
            for px in self.data.chunks_exact_mut(CHANNELS) {
                px.swap(0, 2);
            }
            self.order = ChannelOrder::Rgb;
        }
        self
    }
}

/// Serde-compatible proxy for [`PixelGrid`].
///
/// Deserialization revalidates the construction invariant through
/// [`PixelGrid::from_raw`] so an invalid buffer cannot enter the
/// pipeline from serialized data.
#[derive(Serialize, Deserialize)]
struct PixelGridProxy {
    width: u32,
    height: u32,
    order: ChannelOrder,
    data: Vec<u8>,
}

impl Serialize for PixelGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let proxy = PixelGridProxy {
            width: self.width,
            height: self.height,
            order: self.order,
            data: self.data.clone(),
        };
        proxy.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PixelGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let proxy = PixelGridProxy::deserialize(deserializer)?;
        Self::from_raw(proxy.width, proxy.height, proxy.order, proxy.data)
            .ok_or_else(|| serde::de::Error::custom("invalid pixel grid dimensions"))
    }
}

/// The single user-selectable preprocessing option.
///
/// Exactly two states, mirroring the capture widget's radio control.
/// The default is [`FilterMode::Filtered`], the first option the
/// control offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    /// "Con Filtro": apply the full photometric negative before
    /// recognition. Rescues light text on a dark background.
    #[default]
    Filtered,
    /// "Sin Filtro": pass the decoded image through unchanged.
    Unfiltered,
}

impl FilterMode {
    /// The label the selection control shows for this mode.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Filtered => "Con Filtro",
            Self::Unfiltered => "Sin Filtro",
        }
    }

    /// The caption shown under the preview image for this mode.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Filtered => "Imagen procesada",
            Self::Unfiltered => "Imagen original",
        }
    }
}

/// Result of running the full recognition pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// The post-filter image in RGB order, ready for preview display.
    pub image: PixelGrid,

    /// The text the engine extracted. May be empty or whitespace-only;
    /// that is a valid outcome, not an error.
    pub text: String,
}

/// Errors that can occur during pipeline processing.
///
/// All variants are terminal for the current invocation: the caller
/// translates them into a user-facing message and the user retries by
/// capturing again.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to decode the captured image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The captured image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// The OCR engine could not run. Distinct from an engine that ran
    /// and found no text.
    #[error(transparent)]
    Ocr(#[from] crate::engine::OcrUnavailable),
}
