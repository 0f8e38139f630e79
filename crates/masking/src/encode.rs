//! Mask encoding
//!
//! Finished masks are handed to the generation client as encoded image
//! blobs. The RGBA form preserves the surface exactly; the grayscale form
//! is what the inpainting endpoint consumes.

use std::io::Cursor;

use image::{GrayImage, ImageError, ImageFormat, RgbaImage};
use thiserror::Error;

use crate::surface::MaskSurface;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Failed to encode mask: {0}")]
    Codec(#[from] ImageError),

    #[error("Mask buffer does not match its dimensions")]
    InvalidBuffer,
}

/// Encode a mask surface as an RGBA PNG blob
///
/// Codec failure is a hard error; no partial mask is returned.
pub fn encode_png(surface: &MaskSurface) -> Result<Vec<u8>, EncodeError> {
    let img = RgbaImage::from_raw(surface.width, surface.height, surface.as_bytes().to_vec())
        .ok_or(EncodeError::InvalidBuffer)?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// Encode a mask surface as an 8-bit grayscale PNG blob
///
/// After binarization all channels are equal, so the red channel carries
/// the full mask.
pub fn encode_grayscale_png(surface: &MaskSurface) -> Result<Vec<u8>, EncodeError> {
    let luma: Vec<u8> = surface.pixels().iter().map(|p| p[0]).collect();
    let img = GrayImage::from_raw(surface.width, surface.height, luma)
        .ok_or(EncodeError::InvalidBuffer)?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkered_surface() -> MaskSurface {
        let mut surface = MaskSurface::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                if (x + y) % 2 == 0 {
                    surface.set_pixel(x, y, [255, 255, 255, 255]);
                }
            }
        }
        surface
    }

    #[test]
    fn test_png_round_trips_pixel_values() {
        let surface = checkered_surface();
        let blob = encode_png(&surface).unwrap();

        let decoded = image::load_from_memory(&blob).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (8, 8));
        for y in 0..8 {
            for x in 0..8 {
                let expected = surface.get_pixel(x, y).unwrap();
                assert_eq!(decoded.get_pixel(x, y).0, expected);
            }
        }
    }

    #[test]
    fn test_grayscale_png_matches_red_channel() {
        let surface = checkered_surface();
        let blob = encode_grayscale_png(&surface).unwrap();

        let decoded = image::load_from_memory(&blob).unwrap().to_luma8();
        assert_eq!(decoded.dimensions(), (8, 8));
        for y in 0..8 {
            for x in 0..8 {
                let expected = surface.get_pixel(x, y).unwrap()[0];
                assert_eq!(decoded.get_pixel(x, y).0[0], expected);
            }
        }
    }
}
