//! Resize policy configuration.

use serde::{Deserialize, Serialize};

use crate::decode::{FilterType, PixelFormat};
use crate::encode::{EncodeError, OutputFormat};

/// Output format name used when none is configured.
pub const DEFAULT_OUTPUT_FORMAT: &str = "JPG";

/// How an [`ImageResizer`](crate::ImageResizer) sizes, resamples and encodes.
///
/// Missing fields take their defaults when deserializing, so a partial
/// document such as `{"scale_to_max": true}` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizePolicy {
    /// Enlarge originals smaller than the margin to fill it (default false)
    pub scale_to_max: bool,
    /// Output format name, e.g. "JPG" or "PNG"
    pub output_format: String,
    /// Pixel layout of the resampled image
    pub pixel_format: PixelFormat,
    /// Interpolation filter used when resampling
    pub filter: FilterType,
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self {
            scale_to_max: false,
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            pixel_format: PixelFormat::default(),
            filter: FilterType::default(),
        }
    }
}

impl ResizePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale_to_max(mut self, scale_to_max: bool) -> Self {
        self.scale_to_max = scale_to_max;
        self
    }

    pub fn with_output_format(mut self, output_format: impl Into<String>) -> Self {
        self.output_format = output_format.into();
        self
    }

    pub fn with_pixel_format(mut self, pixel_format: PixelFormat) -> Self {
        self.pixel_format = pixel_format;
        self
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// Resolve the configured output format name.
    pub fn resolved_output_format(&self) -> Result<OutputFormat, EncodeError> {
        OutputFormat::parse(&self.output_format)
    }
}
