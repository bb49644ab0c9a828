//! Image types produced by the transform stages

use std::fmt;

use crate::digit_pipeline::common::error::{ConversionError, Result};

/// Side length of the canonical digit raster
pub const CANONICAL_SIZE: usize = 28;

const CANONICAL_LEN: usize = CANONICAL_SIZE * CANONICAL_SIZE;

/// Single-channel 8-bit luminance, same size as the source canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayscaleImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayscaleImage {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimension(width, height));
        }
        let expected = width
            .checked_mul(height)
            .ok_or(ConversionError::InvalidDimension(width, height))?;
        if data.len() != expected {
            return Err(ConversionError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self { width, height, data }
    }

    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Result<Self> {
        let mut data = Vec::with_capacity(width.saturating_mul(height));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
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
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// The 28×28 integer-domain digit (0 = black, 255 = white unless inverted)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalImage {
    data: Vec<u8>,
}

impl CanonicalImage {
    pub fn from_vec(data: Vec<u8>) -> Result<Self> {
        if data.len() != CANONICAL_LEN {
            return Err(ConversionError::BufferSizeMismatch {
                expected: CANONICAL_LEN,
                actual: data.len(),
            });
        }
        Ok(Self { data })
    }

    pub fn from_fn(mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut data = Vec::with_capacity(CANONICAL_LEN);
        for y in 0..CANONICAL_SIZE {
            for x in 0..CANONICAL_SIZE {
                data.push(f(x, y));
            }
        }
        Self { data }
    }

    pub fn width(&self) -> usize {
        CANONICAL_SIZE
    }

    pub fn height(&self) -> usize {
        CANONICAL_SIZE
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * CANONICAL_SIZE + x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(CANONICAL_SIZE)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn map(&self, f: impl Fn(u8) -> u8) -> Self {
        Self {
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

/// The 28×28 digit rescaled to [0.0, 1.0]
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedImage {
    data: Vec<f64>,
}

impl NormalizedImage {
    pub(crate) fn from_samples(data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), CANONICAL_LEN);
        Self { data }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * CANONICAL_SIZE + x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(CANONICAL_SIZE)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// The matrix shown to the user, in whichever value domain is active
#[derive(Debug, Clone, PartialEq)]
pub enum PixelMatrix {
    Integer(CanonicalImage),
    Normalized(NormalizedImage),
}

impl PixelMatrix {
    pub fn is_normalized(&self) -> bool {
        matches!(self, Self::Normalized(_))
    }

    /// Sample at (x, y) widened to `f64` regardless of domain.
    pub fn value(&self, x: usize, y: usize) -> f64 {
        match self {
            Self::Integer(img) => f64::from(img.get(x, y)),
            Self::Normalized(img) => img.get(x, y),
        }
    }
}

impl fmt::Display for PixelMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(img) => {
                for row in img.rows() {
                    let cells: Vec<String> = row.iter().map(|v| format!("{v:>3}")).collect();
                    writeln!(f, "{}", cells.join(" "))?;
                }
            }
            Self::Normalized(img) => {
                for row in img.rows() {
                    let cells: Vec<String> = row.iter().map(|v| format!("{v:.3}")).collect();
                    writeln!(f, "{}", cells.join(" "))?;
                }
            }
        }
        Ok(())
    }
}
