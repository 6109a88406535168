//! Image decoding for the resize pipeline.
//!
//! This module provides functionality for:
//! - Decoding encoded images from bytes, files and readable streams
//! - Normalizing decoded pixels into a small set of 8-bit layouts
//! - Collapsing every kind of input into one [`ImageSource`]
//!
//! # Architecture
//!
//! Format detection and decoding are delegated to the `image` crate. All
//! operations are synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use marginfit_core::decode::{decode_file, DecodedImage};
//!
//! let image = decode_file("photo.jpg").unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod source;
mod types;

pub use reader::{decode_bytes, decode_file, decode_reader};
pub use source::ImageSource;
pub use types::{DecodeError, DecodedImage, FilterType, PixelFormat};
