use image::ImageFormat;

use crate::digit_pipeline::common::error::{ConversionError, Result};
use crate::digit_pipeline::transform::{CANONICAL_SIZE, CanonicalImage};

/// Reads an exported digit PNG back into the integer-domain matrix.
pub fn decode_png(bytes: &[u8]) -> Result<CanonicalImage> {
    let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|e| ConversionError::DecodeError(e.to_string()))?
        .into_luma8();

    let (width, height) = decoded.dimensions();
    if width as usize != CANONICAL_SIZE || height as usize != CANONICAL_SIZE {
        return Err(ConversionError::InvalidDimension(width as usize, height as usize));
    }

    CanonicalImage::from_vec(decoded.into_raw())
}
