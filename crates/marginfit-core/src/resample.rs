//! Resampling a decoded image onto a freshly allocated buffer.
//!
//! The whole source is drawn scaled onto the destination, replacing every
//! destination pixel. Nothing is blended with prior buffer contents, and
//! converting into a layout without alpha discards the source alpha.

use crate::decode::{DecodedImage, FilterType, PixelFormat};
use crate::fit::{DimensionError, Size};

/// Resample an image to exact dimensions in the given pixel format.
///
/// # Arguments
///
/// * `image` - The source image
/// * `target` - Destination size in pixels
/// * `pixel_format` - Channel layout of the destination buffer
/// * `filter` - Interpolation filter to use
///
/// # Errors
///
/// Returns `DimensionError::EmptyTarget` if either target axis is zero, and
/// `DimensionError::PixelBufferMismatch` if the source buffer is malformed.
pub fn resample(
    image: &DecodedImage,
    target: Size,
    pixel_format: PixelFormat,
    filter: FilterType,
) -> Result<DecodedImage, DimensionError> {
    if target.is_empty() {
        return Err(DimensionError::EmptyTarget { size: target });
    }

    let source = image.to_dynamic_image()?;

    // Convert first so interpolation runs in the destination layout
    let converted = pixel_format.convert(source);
    if converted.size() == target {
        return Ok(converted);
    }

    let scaled = converted
        .to_dynamic_image()?
        .resize_exact(target.width, target.height, filter.to_image_filter());

    Ok(pixel_format.convert(scaled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> DecodedImage {
        // Create a simple gradient image for testing
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
            }
        }
        DecodedImage::from_rgb(width, height, pixels)
    }

    #[test]
    fn test_resample_basic() {
        let img = create_test_image(100, 50);
        let resized = resample(&img, Size::new(50, 25), PixelFormat::Rgb8, FilterType::Bilinear)
            .unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25 * 3);
    }

    #[test]
    fn test_resample_same_dimensions() {
        let img = create_test_image(100, 50);
        let resized = resample(&img, Size::new(100, 50), PixelFormat::Rgb8, FilterType::Bilinear)
            .unwrap();

        assert_eq!(resized, img);
    }

    #[test]
    fn test_resample_upscale() {
        let img = create_test_image(50, 25);
        let resized = resample(&img, Size::new(100, 50), PixelFormat::Rgb8, FilterType::Lanczos3)
            .unwrap();

        assert_eq!(resized.size(), Size::new(100, 50));
    }

    #[test]
    fn test_resample_to_rgba() {
        let img = create_test_image(10, 10);
        let resized = resample(&img, Size::new(5, 5), PixelFormat::Rgba8, FilterType::Nearest)
            .unwrap();

        assert_eq!(resized.format, PixelFormat::Rgba8);
        assert_eq!(resized.pixels.len(), 5 * 5 * 4);
        // Opaque source stays opaque
        assert!(resized.pixels.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_resample_drops_alpha() {
        let rgba = DecodedImage::new(2, 2, PixelFormat::Rgba8, [40, 80, 120, 0].repeat(4));
        let resized = resample(&rgba, Size::new(1, 1), PixelFormat::Rgb8, FilterType::Nearest)
            .unwrap();

        // Fully transparent source color is written as-is, not blended
        assert_eq!(resized.pixels, vec![40, 80, 120]);
    }

    #[test]
    fn test_resample_grayscale() {
        let img = create_test_image(8, 8);
        let resized = resample(&img, Size::new(4, 2), PixelFormat::Luma8, FilterType::Bilinear)
            .unwrap();

        assert_eq!(resized.format, PixelFormat::Luma8);
        assert_eq!(resized.pixels.len(), 4 * 2);
    }

    #[test]
    fn test_resample_uniform_color_is_preserved() {
        let img = DecodedImage::from_rgb(30, 20, [12, 34, 56].repeat(600));
        for filter in [FilterType::Nearest, FilterType::Bilinear, FilterType::Lanczos3] {
            let resized = resample(&img, Size::new(7, 5), PixelFormat::Rgb8, filter).unwrap();
            assert!(resized.pixels.chunks_exact(3).all(|px| px == [12, 34, 56]));
        }
    }

    #[test]
    fn test_resample_zero_dimensions_error() {
        let img = create_test_image(100, 50);

        for target in [Size::new(0, 50), Size::new(50, 0)] {
            assert_eq!(
                resample(&img, target, PixelFormat::Rgb8, FilterType::Bilinear).unwrap_err(),
                DimensionError::EmptyTarget { size: target }
            );
        }
    }

    #[test]
    fn test_resample_malformed_source() {
        let img = DecodedImage {
            width: 10,
            height: 10,
            format: PixelFormat::Rgb8,
            pixels: vec![0; 5],
        };
        let result = resample(&img, Size::new(5, 5), PixelFormat::Rgb8, FilterType::Nearest);
        assert!(matches!(
            result,
            Err(DimensionError::PixelBufferMismatch { .. })
        ));
    }
}
