//! The decode → fit → resample → encode pipeline.
//!
//! An [`ImageResizer`] owns a [`ResizePolicy`] and applies it to every call.
//! Each call decodes its source once, fits it into the requested margin,
//! resamples into a new buffer and writes the encoded result. A call either
//! completes or returns its first error. Nothing is retried.

use std::path::Path;

use thiserror::Error;

use crate::decode::{DecodeError, DecodedImage, FilterType, ImageSource, PixelFormat};
use crate::encode::{encode_to_vec, save_to_file, EncodeError};
use crate::fit::{fit, DimensionError, Size};
use crate::policy::ResizePolicy;
use crate::resample::resample;

/// Errors from a resize pipeline call.
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error("Failed to decode source image: {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to encode output image: {0}")]
    Encode(#[from] EncodeError),
}

impl ResizeError {
    /// True for failures reading the source or writing the destination.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ResizeError::Decode(DecodeError::Io(_)) | ResizeError::Encode(EncodeError::Io(_))
        )
    }
}

impl From<ResizeError> for std::io::Error {
    fn from(err: ResizeError) -> Self {
        match err {
            ResizeError::Decode(DecodeError::Io(e)) | ResizeError::Encode(EncodeError::Io(e)) => e,
            ResizeError::Dimension(e) => std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other),
        }
    }
}

/// Resizes images to fit margins and writes them out.
///
/// # Example
///
/// ```ignore
/// use marginfit_core::{ImageResizer, Size};
/// use std::path::Path;
///
/// let resizer = ImageResizer::default();
/// resizer.resize_and_save(Path::new("photo.png"), Size::new(400, 300), "thumb.jpg")?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageResizer {
    policy: ResizePolicy,
}

impl ImageResizer {
    pub fn new(policy: ResizePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ResizePolicy {
        &self.policy
    }

    /// Replace the whole policy, returning the updated resizer.
    pub fn with_policy(mut self, policy: ResizePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn scale_to_max(&self) -> bool {
        self.policy.scale_to_max
    }

    /// Enlarge originals smaller than the margin when true.
    pub fn set_scale_to_max(&mut self, scale_to_max: bool) {
        self.policy.scale_to_max = scale_to_max;
    }

    pub fn output_format(&self) -> &str {
        &self.policy.output_format
    }

    /// Set the output format name. Unknown names fail when saving, not here.
    pub fn set_output_format(&mut self, output_format: impl Into<String>) {
        self.policy.output_format = output_format.into();
    }

    pub fn pixel_format(&self) -> PixelFormat {
        self.policy.pixel_format
    }

    pub fn set_pixel_format(&mut self, pixel_format: PixelFormat) {
        self.policy.pixel_format = pixel_format;
    }

    pub fn filter(&self) -> FilterType {
        self.policy.filter
    }

    pub fn set_filter(&mut self, filter: FilterType) {
        self.policy.filter = filter;
    }

    /// Target size for an original of `original_width` x `original_height`
    /// inside the given margin. No I/O.
    pub fn target_dimension_by_margins(
        &self,
        margin_width: u32,
        margin_height: u32,
        original_width: u32,
        original_height: u32,
    ) -> Result<Size, DimensionError> {
        self.target_size(
            Size::new(margin_width, margin_height),
            Size::new(original_width, original_height),
        )
    }

    /// Target size for `original` inside `margin` under this policy. No I/O.
    pub fn target_size(&self, margin: Size, original: Size) -> Result<Size, DimensionError> {
        fit(margin, original, self.policy.scale_to_max)
    }

    /// Resample `image` to exactly `target` with this policy's pixel format
    /// and filter.
    pub fn scaled_image(
        &self,
        image: &DecodedImage,
        target: Size,
    ) -> Result<DecodedImage, DimensionError> {
        resample(image, target, self.policy.pixel_format, self.policy.filter)
    }

    /// Decode `source` and resample it to fit `margin`, without encoding.
    pub fn resize<'a>(
        &self,
        source: impl Into<ImageSource<'a>>,
        margin: Size,
    ) -> Result<DecodedImage, ResizeError> {
        let source: ImageSource<'a> = source.into();
        let original = source.decode()?;
        let target = self.target_size(margin, original.size())?;

        tracing::debug!(
            %margin,
            original = %original.size(),
            %target,
            scale_to_max = self.policy.scale_to_max,
            "fitted image to margin"
        );

        Ok(self.scaled_image(&original, target)?)
    }

    /// Resize `source` to fit `margin` and write it to `destination` in the
    /// configured output format, replacing any existing file.
    pub fn resize_and_save<'a>(
        &self,
        source: impl Into<ImageSource<'a>>,
        margin: Size,
        destination: impl AsRef<Path>,
    ) -> Result<(), ResizeError> {
        // Fail on a bad format name before decoding anything
        let format = self.policy.resolved_output_format()?;
        let scaled = self.resize(source, margin)?;
        save_to_file(&scaled, format, destination)?;
        Ok(())
    }

    /// [`resize_and_save`](Self::resize_and_save) with the margin given as
    /// separate width and height.
    pub fn resize_and_save_by_margins<'a>(
        &self,
        source: impl Into<ImageSource<'a>>,
        margin_width: u32,
        margin_height: u32,
        destination: impl AsRef<Path>,
    ) -> Result<(), ResizeError> {
        self.resize_and_save(source, Size::new(margin_width, margin_height), destination)
    }

    /// Resize `source` to fit `margin` and return the encoded bytes.
    pub fn resize_to_bytes<'a>(
        &self,
        source: impl Into<ImageSource<'a>>,
        margin: Size,
    ) -> Result<Vec<u8>, ResizeError> {
        let format = self.policy.resolved_output_format()?;
        let scaled = self.resize(source, margin)?;
        Ok(encode_to_vec(&scaled, format)?)
    }

    /// Encode `image` as-is in the configured output format.
    pub fn save_image(
        &self,
        image: &DecodedImage,
        destination: impl AsRef<Path>,
    ) -> Result<(), ResizeError> {
        let format = self.policy.resolved_output_format()?;
        save_to_file(image, format, destination)?;
        Ok(())
    }
}
