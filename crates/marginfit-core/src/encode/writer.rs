//! Encoding decoded images to bytes or files.

use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use thiserror::Error;

use super::OutputFormat;
use crate::decode::{DecodedImage, PixelFormat};
use crate::fit::DimensionError;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The format name is unknown or has no encoder in this build
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// The output format cannot store this pixel layout
    #[error("{format} output cannot store {pixel_format:?} pixels")]
    IncompatiblePixelFormat {
        format: OutputFormat,
        pixel_format: PixelFormat,
    },

    /// The image buffer itself is invalid
    #[error(transparent)]
    InvalidImage(#[from] DimensionError),

    /// The destination could not be created or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The encoder rejected the image
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

impl From<image::ImageError> for EncodeError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => EncodeError::Io(e),
            other => EncodeError::EncodingFailed(other.to_string()),
        }
    }
}

/// Encode an image into an in-memory buffer.
///
/// # Errors
///
/// Returns an error if the pixel layout is incompatible with the format or
/// the encoder fails.
pub fn encode_to_vec(image: &DecodedImage, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Cursor::new(Vec::new());
    write_image(image, format, &mut buffer)?;
    Ok(buffer.into_inner())
}

/// Encode an image and write it to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `EncodeError::Io` if the destination cannot be created or
/// written, plus the errors of [`encode_to_vec`].
pub fn save_to_file(
    image: &DecodedImage,
    format: OutputFormat,
    path: impl AsRef<Path>,
) -> Result<(), EncodeError> {
    let path = path.as_ref();
    // Validate before touching the destination
    let dynamic = prepare(image, format)?;

    let mut writer = BufWriter::new(File::create(path)?);
    dynamic.write_to(&mut writer, format.image_format())?;
    writer.flush()?;

    tracing::trace!(path = %path.display(), %format, size = %image.size(), "saved image");
    Ok(())
}

fn write_image<W: Write + Seek>(
    image: &DecodedImage,
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), EncodeError> {
    let dynamic = prepare(image, format)?;
    dynamic.write_to(writer, format.image_format())?;
    Ok(())
}

fn prepare(image: &DecodedImage, format: OutputFormat) -> Result<image::DynamicImage, EncodeError> {
    if image.format.has_alpha() && !format.supports_alpha() {
        return Err(EncodeError::IncompatiblePixelFormat {
            format,
            pixel_format: image.format,
        });
    }
    Ok(image.to_dynamic_image()?)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
