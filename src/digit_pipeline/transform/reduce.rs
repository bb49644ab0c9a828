use tracing::debug;

use crate::digit_pipeline::canvas::RawCanvasBuffer;
use crate::digit_pipeline::transform::types::GrayscaleImage;

// BT.601 luma weights in 16.16 fixed point; they sum to 65536 so a grey
// input maps to itself.
const WEIGHT_R: u32 = 19_595;
const WEIGHT_G: u32 = 38_470;
const WEIGHT_B: u32 = 7_471;
const ROUNDING: u32 = 1 << 15;

#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    // Max is 255 * 65536 + 32768, which fits u32 and shifts back into u8 range.
    ((WEIGHT_R * u32::from(r) + WEIGHT_G * u32::from(g) + WEIGHT_B * u32::from(b) + ROUNDING) >> 16)
        as u8
}

/// Collapses the RGBA canvas to one luminance channel. Alpha is ignored.
pub fn reduce(buffer: &RawCanvasBuffer) -> GrayscaleImage {
    debug!("Reducing {}x{} canvas to grayscale", buffer.width(), buffer.height());

    let data: Vec<u8> = buffer
        .pixels()
        .map(|px| luma(px[0], px[1], px[2]))
        .collect();

    GrayscaleImage::from_parts(buffer.width(), buffer.height(), data)
}
