//! Image encoding for the resize pipeline.
//!
//! This module provides functionality for:
//! - Resolving output format names such as `"JPG"` or `"png"`
//! - Encoding decoded images into memory or onto disk
//!
//! # Examples
//!
//! ```ignore
//! use marginfit_core::decode::DecodedImage;
//! use marginfit_core::encode::{encode_to_vec, OutputFormat};
//!
//! let image = DecodedImage::from_rgb(100, 100, vec![128u8; 100 * 100 * 3]);
//! let jpeg_bytes = encode_to_vec(&image, OutputFormat::parse("JPG")?)?;
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod format;
mod writer;

pub use format::OutputFormat;
pub use writer::{encode_to_vec, save_to_file, EncodeError};
