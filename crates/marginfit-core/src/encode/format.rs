//! Output format names.

use std::fmt;
use std::str::FromStr;

use image::ImageFormat;

use super::EncodeError;

/// An encodable output format, parsed from a name such as `"JPG"` or `"png"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat(ImageFormat);

impl OutputFormat {
    pub const JPEG: OutputFormat = OutputFormat(ImageFormat::Jpeg);
    pub const PNG: OutputFormat = OutputFormat(ImageFormat::Png);

    /// Parse a format name or file extension, ignoring case and a leading dot.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::UnsupportedFormat` if the name is unknown or no
    /// encoder for it is compiled in.
    pub fn parse(name: &str) -> Result<Self, EncodeError> {
        let normalized = name.trim().trim_start_matches('.').to_ascii_lowercase();
        let format = ImageFormat::from_extension(&normalized)
            .filter(|format| format.writing_enabled())
            .ok_or_else(|| EncodeError::UnsupportedFormat(name.to_string()))?;
        Ok(Self(format))
    }

    pub fn image_format(self) -> ImageFormat {
        self.0
    }

    /// Preferred file extension, without a dot.
    pub fn extension(self) -> &'static str {
        self.0.extensions_str().first().copied().unwrap_or("bin")
    }

    /// Whether encoded files can carry an alpha channel.
    pub fn supports_alpha(self) -> bool {
        self.0 != ImageFormat::Jpeg
    }
}

impl FromStr for OutputFormat {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}
