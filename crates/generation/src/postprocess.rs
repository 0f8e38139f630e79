//! Result post-processing before hand-off
//!
//! Edited images travel onward (history, embedding data collection) in a
//! compressed form: longest side capped, JPEG re-encoded.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, RgbaImage};

/// Longest image side after hand-off compression.
pub const HANDOFF_MAX_SIDE: u32 = 800;

/// JPEG quality used for hand-off compression.
pub const HANDOFF_JPEG_QUALITY: u8 = 80;

/// Downscale so the longest side fits `max_side`, then encode as JPEG
///
/// Images already within bounds are re-encoded without resizing. Alpha is
/// flattened away (JPEG carries none).
pub fn shrink_to_fit(
    image: &RgbaImage,
    max_side: u32,
    quality: u8,
) -> Result<Vec<u8>, ImageError> {
    let (width, height) = image.dimensions();
    let longest = width.max(height);

    let resized = if longest > max_side {
        let scale = max_side as f32 / longest as f32;
        let new_width = ((width as f32 * scale).round() as u32).max(1);
        let new_height = ((height as f32 * scale).round() as u32).max(1);
        image::imageops::resize(image, new_width, new_height, FilterType::Lanczos3)
    } else {
        image.clone()
    };

    let rgb = DynamicImage::ImageRgba8(resized).to_rgb8();
    let mut out = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut out, quality).encode_image(&rgb)?;
    Ok(out.into_inner())
}
