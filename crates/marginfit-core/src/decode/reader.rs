//! Decoding from byte buffers, files and streams.
//!
//! The container format is sniffed from the data itself, never from a file
//! extension. Decoded pixels keep their native channel layout.

use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use image::ImageReader;

use super::{DecodeError, DecodedImage};

/// Decode an image from in-memory bytes.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the format is not recognized.
/// Returns `DecodeError::CorruptedData` if the data is malformed.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    tracing::trace!(format = ?reader.format(), len = bytes.len(), "decoding image bytes");

    let img = reader.decode()?;
    Ok(DecodedImage::from_dynamic(img))
}

/// Decode an image file.
///
/// # Errors
///
/// Returns `DecodeError::Io` if the file cannot be opened or read, and the
/// same format errors as [`decode_bytes`].
pub fn decode_file(path: impl AsRef<Path>) -> Result<DecodedImage, DecodeError> {
    let path = path.as_ref();
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    tracing::trace!(path = %path.display(), format = ?reader.format(), "decoding image file");

    let img = reader.decode()?;
    Ok(DecodedImage::from_dynamic(img))
}

/// Decode an image from a readable stream.
///
/// The stream is read to its end before decoding since format detection
/// needs to seek.
pub fn decode_reader(reader: impl Read) -> Result<DecodedImage, DecodeError> {
    let mut bytes = Vec::new();
    BufReader::new(reader).read_to_end(&mut bytes)?;
    decode_bytes(&bytes)
}
