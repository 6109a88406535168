//! Marginfit Core - Margin fitting and resizing for raster images
//!
//! This crate sizes images to fit a bounding box ("margin") without
//! distortion, resamples them to that size and writes the result in a
//! named format.
//!
//! - [`fit`] computes the target size. It is pure and never touches pixels.
//! - [`ImageResizer`] runs decode → fit → resample → encode under a
//!   [`ResizePolicy`].
//!
//! # Example
//!
//! ```ignore
//! use marginfit_core::{fit, ImageResizer, Size};
//!
//! assert_eq!(fit(Size::new(100, 200), Size::new(400, 200), false)?, Size::new(100, 50));
//!
//! let resizer = ImageResizer::default();
//! resizer.resize_and_save_by_margins(&jpeg_bytes, 800, 600, "preview.jpg")?;
//! ```

pub mod decode;
pub mod encode;
pub mod fit;
pub mod pipeline;
pub mod policy;
pub mod resample;

pub use decode::{DecodeError, DecodedImage, FilterType, ImageSource, PixelFormat};
pub use encode::{EncodeError, OutputFormat};
pub use fit::{fit, fit_axis, DimensionError, FitAxis, Size};
pub use pipeline::{ImageResizer, ResizeError};
pub use policy::ResizePolicy;
pub use resample::resample;
