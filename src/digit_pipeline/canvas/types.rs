//! Canvas buffer types

use crate::digit_pipeline::common::error::{ConversionError, Result};

/// Number of samples per canvas pixel (red, green, blue, alpha)
pub const CHANNELS: usize = 4;

/// RGBA pixels as delivered by the drawing surface
///
/// Row-major, origin top-left, four 8-bit samples per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCanvasBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RawCanvasBuffer {
    /// Wraps `data`, checking that it holds exactly `width * height` pixels.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimension(width, height));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or(ConversionError::InvalidDimension(width, height))?;
        if data.len() != expected {
            return Err(ConversionError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// A canvas where every pixel has the same RGBA value.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self> {
        Self::from_fn(width, height, |_, _| rgba)
    }

    /// Builds a canvas by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> [u8; 4],
    ) -> Result<Self> {
        let mut data = Vec::with_capacity(width.saturating_mul(height).saturating_mul(CHANNELS));
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self::new(width, height, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(CHANNELS)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
