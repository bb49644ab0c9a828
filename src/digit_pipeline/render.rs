//! Display helpers
//!
//! Rasters for a display collaborator: nearest-neighbour previews of the
//! drawing and of the digit, and an enlarged pixel grid with red cell borders
//! for inspecting individual samples.

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::digit_pipeline::transform::{CANONICAL_SIZE, CanonicalImage, GrayscaleImage};

const GRID_LINE: Rgb<u8> = Rgb([255, 0, 0]);

/// Largest cell edge accepted by [`pixel_grid`]
pub const MAX_GRID_CELL: u32 = 1024;

/// Anything with a width, a height and an 8-bit sample per pixel.
pub trait GraySamples {
    fn dimensions(&self) -> (usize, usize);
    fn sample(&self, x: usize, y: usize) -> u8;
}

impl GraySamples for GrayscaleImage {
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn sample(&self, x: usize, y: usize) -> u8 {
        self.get(x, y)
    }
}

impl GraySamples for CanonicalImage {
    fn dimensions(&self) -> (usize, usize) {
        (CANONICAL_SIZE, CANONICAL_SIZE)
    }

    fn sample(&self, x: usize, y: usize) -> u8 {
        self.get(x, y)
    }
}

/// Nearest-neighbour rescale to `size` pixels on the longer side.
pub fn preview<I: GraySamples>(img: &I, size: u32) -> GrayImage {
    let (width, height) = img.dimensions();
    let longest = width.max(height).max(1) as f64;
    let scale = f64::from(size.max(1)) / longest;
    let out_w = ((width as f64 * scale).round() as u32).max(1);
    let out_h = ((height as f64 * scale).round() as u32).max(1);

    GrayImage::from_fn(out_w, out_h, |x, y| {
        let sx = ((f64::from(x) / scale) as usize).min(width - 1);
        let sy = ((f64::from(y) / scale) as usize).min(height - 1);
        Luma([img.sample(sx, sy)])
    })
}

/// Enlarges each digit sample to a `cell`×`cell` block separated by 1 px red
/// grid lines. Samples are drawn on a fixed 0..=255 gray scale.
///
/// `cell` is clamped to `1..=MAX_GRID_CELL`.
pub fn pixel_grid(img: &CanonicalImage, cell: u32) -> RgbImage {
    let pitch = grid_pitch(cell);
    let side = CANONICAL_SIZE as u32 * pitch + 1;

    RgbImage::from_fn(side, side, |x, y| {
        if x % pitch == 0 || y % pitch == 0 {
            return GRID_LINE;
        }
        let v = img.get((x / pitch) as usize, (y / pitch) as usize);
        Rgb([v, v, v])
    })
}

fn grid_pitch(cell: u32) -> u32 {
    cell.clamp(1, MAX_GRID_CELL) + 1
}
