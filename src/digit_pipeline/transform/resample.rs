//! Resampling of the grayscale drawing onto the canonical 28×28 grid.
//!
//! Every filter maps the full source extent onto the target; nothing is
//! cropped. A source that is already 28×28 is returned unchanged.

use image::GrayImage;
use image::imageops::{self, FilterType};
use tracing::debug;

use crate::digit_pipeline::common::config::ResampleFilter;
use crate::digit_pipeline::common::error::{ConversionError, Result};
use crate::digit_pipeline::transform::types::{CANONICAL_SIZE, CanonicalImage, GrayscaleImage};

pub fn resample(img: &GrayscaleImage, filter: ResampleFilter) -> Result<CanonicalImage> {
    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(ConversionError::InvalidDimension(width, height));
    }

    if width == CANONICAL_SIZE && height == CANONICAL_SIZE {
        debug!("Source already {0}x{0}, skipping resample", CANONICAL_SIZE);
        return CanonicalImage::from_vec(img.as_slice().to_vec());
    }

    debug!(
        "Resampling {}x{} -> {}x{} with {:?}",
        width, height, CANONICAL_SIZE, CANONICAL_SIZE, filter
    );

    match filter {
        ResampleFilter::Area => Ok(area(img)),
        ResampleFilter::Nearest => Ok(nearest(img)),
        ResampleFilter::Bilinear => triangle(img),
    }
}

/// Source pixels overlapping each target cell, with their share of the cell.
fn coverage(src_len: usize, dst_len: usize) -> Vec<Vec<(usize, f64)>> {
    let scale = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|i| {
            let start = i as f64 * scale;
            let end = start + scale;
            let first = start.floor() as usize;
            let last = (end.ceil() as usize).min(src_len);
            (first..last)
                .filter_map(|s| {
                    let overlap = end.min(s as f64 + 1.0) - start.max(s as f64);
                    (overlap > 0.0).then(|| (s, overlap / scale))
                })
                .collect()
        })
        .collect()
}

fn area(img: &GrayscaleImage) -> CanonicalImage {
    let cols = coverage(img.width(), CANONICAL_SIZE);
    let rows = coverage(img.height(), CANONICAL_SIZE);

    // Horizontal pass: height × 28
    let horizontal: Vec<[f64; CANONICAL_SIZE]> = (0..img.height())
        .map(|y| {
            let src = img.row(y);
            let mut out = [0.0; CANONICAL_SIZE];
            for (cell, weights) in out.iter_mut().zip(&cols) {
                *cell = weights.iter().map(|&(s, w)| f64::from(src[s]) * w).sum();
            }
            out
        })
        .collect();

    CanonicalImage::from_fn(|x, y| {
        let v: f64 = rows[y].iter().map(|&(s, w)| horizontal[s][x] * w).sum();
        v.round().clamp(0.0, 255.0) as u8
    })
}

fn nearest(img: &GrayscaleImage) -> CanonicalImage {
    let pick = |dst: usize, src_len: usize| {
        let scale = src_len as f64 / CANONICAL_SIZE as f64;
        (((dst as f64 + 0.5) * scale).floor() as usize).min(src_len - 1)
    };
    CanonicalImage::from_fn(|x, y| img.get(pick(x, img.width()), pick(y, img.height())))
}

fn triangle(img: &GrayscaleImage) -> Result<CanonicalImage> {
    let (width, height) = (img.width(), img.height());
    let invalid = || ConversionError::InvalidDimension(width, height);
    let src = GrayImage::from_raw(
        u32::try_from(width).map_err(|_| invalid())?,
        u32::try_from(height).map_err(|_| invalid())?,
        img.as_slice().to_vec(),
    )
    .ok_or_else(invalid)?;

    let size = CANONICAL_SIZE as u32;
    let resized = imageops::resize(&src, size, size, FilterType::Triangle);
    CanonicalImage::from_vec(resized.into_raw())
}
