//! Margin fitting geometry.
//!
//! Computes the largest size with the original's aspect ratio that fits
//! inside a bounding box ("margin"). One axis of the margin constrains the
//! result directly; the other axis is derived from the original ratio.
//!
//! # Tie-breaking
//!
//! The fitting axis is chosen by a two-tier orientation test:
//!
//! - Tall margin (`width < height`): fit by height when the margin is
//!   relatively wider than the original, otherwise fit by width.
//! - Wide or square margin: fit by width when the margin is relatively
//!   narrower than the original, otherwise fit by height.
//!
//! Equal ratios therefore fit by width for tall margins and by height for
//! wide or square ones.
//!
//! # Rounding
//!
//! Both axes are truncated toward zero, never rounded to nearest. Existing
//! outputs depend on these exact values.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised for sizes the fitter or resampler cannot work with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// An input size has a zero width or height.
    #[error("Invalid {role} size {size}: width and height must be non-zero")]
    ZeroDimension { role: &'static str, size: Size },

    /// A computed or requested target has a zero axis, so no pixels can be drawn.
    #[error("Target size {size} is empty")]
    EmptyTarget { size: Size },

    /// A pixel buffer's length does not match its declared dimensions.
    #[error("Pixel buffer mismatch: expected {expected} bytes, got {actual}")]
    PixelBufferMismatch { expected: usize, actual: usize },
}

/// A width/height pair in pixels.
///
/// Used both for bounding boxes and for image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either axis is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True if this size is no larger than `margin` on both axes.
    pub fn fits_within(&self, margin: Size) -> bool {
        self.width <= margin.width && self.height <= margin.height
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    fn validate(self, role: &'static str) -> Result<Self, DimensionError> {
        if self.is_empty() {
            return Err(DimensionError::ZeroDimension { role, size: self });
        }
        Ok(self)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// The margin axis that directly constrains a fitted size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitAxis {
    Width,
    Height,
}

/// Decide which margin axis constrains the fit.
///
/// # Errors
///
/// Returns [`DimensionError::ZeroDimension`] if either size has a zero axis.
pub fn fit_axis(margin: Size, original: Size) -> Result<FitAxis, DimensionError> {
    let margin = margin.validate("margin")?;
    let original = original.validate("original")?;

    let margin_ratio = margin.aspect_ratio();
    let original_ratio = original.aspect_ratio();

    let axis = if margin.width < margin.height {
        // Tall margin
        if margin_ratio > original_ratio {
            FitAxis::Height
        } else {
            FitAxis::Width
        }
    } else if margin_ratio < original_ratio {
        FitAxis::Width
    } else {
        FitAxis::Height
    };

    Ok(axis)
}

/// Compute the target size for `original` inside `margin`.
///
/// When `scale_to_max` is false an original smaller than the margin on the
/// fitting axis keeps its native size. When true it is enlarged to fill the
/// margin.
///
/// # Errors
///
/// Returns [`DimensionError::ZeroDimension`] if either size has a zero axis.
///
/// # Example
///
/// ```ignore
/// use marginfit_core::{fit, Size};
///
/// let target = fit(Size::new(400, 200), Size::new(500, 1500), false)?;
/// assert_eq!(target, Size::new(66, 200));
/// ```
pub fn fit(margin: Size, original: Size, scale_to_max: bool) -> Result<Size, DimensionError> {
    let axis = fit_axis(margin, original)?;

    let (margin_value, original_value, original_other) = match axis {
        FitAxis::Width => (margin.width, original.width, original.height),
        FitAxis::Height => (margin.height, original.height, original.width),
    };
    let margin_value = margin_value as f64;
    let original_value = original_value as f64;

    let fitted = if !scale_to_max && original_value < margin_value {
        original_value
    } else {
        margin_value
    };
    let derived = fitted / original_value * original_other as f64;

    // Truncation, not rounding
    let (width, height) = match axis {
        FitAxis::Width => (fitted as u32, derived as u32),
        FitAxis::Height => (derived as u32, fitted as u32),
    };

    Ok(Size::new(width, height))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
