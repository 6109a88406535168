//! Image sources accepted by the resize pipeline.

use std::borrow::Cow;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::{decode_bytes, decode_file, decode_reader, DecodeError, DecodedImage};

/// Where the original image comes from.
///
/// Every variant is turned into a [`DecodedImage`] by a single
/// [`decode`](ImageSource::decode) step. Already decoded images are borrowed,
/// not copied.
pub enum ImageSource<'a> {
    /// An image that is already decoded.
    Decoded(&'a DecodedImage),
    /// Encoded image bytes.
    Bytes(&'a [u8]),
    /// Path to an encoded image file.
    File(&'a Path),
    /// A readable stream of encoded image bytes.
    Reader(Box<dyn Read + 'a>),
}

impl<'a> ImageSource<'a> {
    /// Wrap a readable stream.
    pub fn reader(reader: impl Read + 'a) -> Self {
        ImageSource::Reader(Box::new(reader))
    }

    /// Produce the decoded image for this source.
    pub fn decode(self) -> Result<Cow<'a, DecodedImage>, DecodeError> {
        match self {
            ImageSource::Decoded(image) => Ok(Cow::Borrowed(image)),
            ImageSource::Bytes(bytes) => decode_bytes(bytes).map(Cow::Owned),
            ImageSource::File(path) => decode_file(path).map(Cow::Owned),
            ImageSource::Reader(reader) => decode_reader(reader).map(Cow::Owned),
        }
    }
}

impl fmt::Debug for ImageSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Decoded(image) => f
                .debug_tuple("Decoded")
                .field(&format_args!("{}x{} {:?}", image.width, image.height, image.format))
                .finish(),
            ImageSource::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format_args!("{} bytes", bytes.len()))
                .finish(),
            ImageSource::File(path) => f.debug_tuple("File").field(path).finish(),
            ImageSource::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl<'a> From<&'a DecodedImage> for ImageSource<'a> {
    fn from(image: &'a DecodedImage) -> Self {
        ImageSource::Decoded(image)
    }
}

impl<'a> From<&'a [u8]> for ImageSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ImageSource::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for ImageSource<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        ImageSource::Bytes(bytes)
    }
}

impl<'a> From<&'a Path> for ImageSource<'a> {
    fn from(path: &'a Path) -> Self {
        ImageSource::File(path)
    }
}

impl<'a> From<&'a PathBuf> for ImageSource<'a> {
    fn from(path: &'a PathBuf) -> Self {
        ImageSource::File(path)
    }
}
