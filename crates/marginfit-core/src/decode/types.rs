//! Core types for image decoding.

use image::{DynamicImage, ImageBuffer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fit::{DimensionError, Size};

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The source could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The format is not recognized or no decoder is built in for it.
    #[error("Invalid or unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The data was recognized but is corrupted or incomplete.
    #[error("Corrupted or incomplete image data: {0}")]
    CorruptedData(String),
}

impl From<image::ImageError> for DecodeError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => DecodeError::Io(e),
            image::ImageError::Unsupported(e) => DecodeError::UnsupportedFormat(e.to_string()),
            other => DecodeError::CorruptedData(other.to_string()),
        }
    }
}

/// Filter type for image resampling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Interleaved 8-bit channel layout of a [`DecodedImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 24-bit packed RGB.
    #[default]
    Rgb8,
    /// 32-bit RGB with straight alpha.
    Rgba8,
    /// 8-bit grayscale.
    Luma8,
    /// 8-bit grayscale with alpha.
    LumaA8,
}

impl PixelFormat {
    /// Bytes per pixel.
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
            PixelFormat::Luma8 => 1,
            PixelFormat::LumaA8 => 2,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::Rgba8 | PixelFormat::LumaA8)
    }

    /// Closest 8-bit layout for an image crate color type.
    ///
    /// 16-bit and float sources map onto the 8-bit layout with the same
    /// channels.
    pub fn from_color_type(color: image::ColorType) -> Self {
        match (color.has_color(), color.has_alpha()) {
            (true, true) => PixelFormat::Rgba8,
            (true, false) => PixelFormat::Rgb8,
            (false, true) => PixelFormat::LumaA8,
            (false, false) => PixelFormat::Luma8,
        }
    }

    /// Convert a dynamic image into this layout, consuming it.
    ///
    /// Alpha is dropped when converting into a layout without it.
    pub(crate) fn convert(self, img: DynamicImage) -> DecodedImage {
        let (width, height) = (img.width(), img.height());
        let pixels = match self {
            PixelFormat::Rgb8 => img.into_rgb8().into_raw(),
            PixelFormat::Rgba8 => img.into_rgba8().into_raw(),
            PixelFormat::Luma8 => img.into_luma8().into_raw(),
            PixelFormat::LumaA8 => img.into_luma_alpha8().into_raw(),
        };
        DecodedImage {
            width,
            height,
            format: self,
            pixels,
        }
    }
}

/// A decoded image with interleaved 8-bit pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Channel layout of `pixels`.
    pub format: PixelFormat,
    /// Pixel data in row-major order.
    /// Length should be width * height * format.channels().
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            Self::expected_len(width, height, format),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            format,
            pixels,
        }
    }

    /// Create an RGB image from raw pixel bytes.
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self::new(width, height, PixelFormat::Rgb8, pixels)
    }

    /// Create a DecodedImage from an image::DynamicImage, keeping its
    /// channel layout.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let format = PixelFormat::from_color_type(img.color());
        format.convert(img)
    }

    /// Convert to an image::DynamicImage for further processing.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::PixelBufferMismatch`] if the buffer length
    /// does not match the dimensions and format.
    pub fn to_dynamic_image(&self) -> Result<DynamicImage, DimensionError> {
        let mismatch = || DimensionError::PixelBufferMismatch {
            expected: Self::expected_len(self.width, self.height, self.format),
            actual: self.pixels.len(),
        };
        // from_raw accepts oversized buffers, so check the exact length first
        if self.pixels.len() != Self::expected_len(self.width, self.height, self.format) {
            return Err(mismatch());
        }
        let (w, h, raw) = (self.width, self.height, self.pixels.clone());

        let img = match self.format {
            PixelFormat::Rgb8 => {
                DynamicImage::ImageRgb8(ImageBuffer::from_raw(w, h, raw).ok_or_else(mismatch)?)
            }
            PixelFormat::Rgba8 => {
                DynamicImage::ImageRgba8(ImageBuffer::from_raw(w, h, raw).ok_or_else(mismatch)?)
            }
            PixelFormat::Luma8 => {
                DynamicImage::ImageLuma8(ImageBuffer::from_raw(w, h, raw).ok_or_else(mismatch)?)
            }
            PixelFormat::LumaA8 => {
                DynamicImage::ImageLumaA8(ImageBuffer::from_raw(w, h, raw).ok_or_else(mismatch)?)
            }
        };
        Ok(img)
    }

    /// Native dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    fn expected_len(width: u32, height: u32, format: PixelFormat) -> usize {
        width as usize * height as usize * format.channels()
    }
}
