//! Numeric transform stages
//!
//! Each stage is a pure function over an owned image type: colour reduction,
//! resampling to the canonical 28×28 grid, polarity inversion and range
//! normalization. The pipeline always applies inversion before normalization.

mod invert;
mod normalize;
mod reduce;
mod resample;
pub mod types;

pub use invert::invert;
pub use normalize::normalize;
pub use reduce::reduce;
pub use resample::resample;
pub use types::{CANONICAL_SIZE, CanonicalImage, GrayscaleImage, NormalizedImage, PixelMatrix};
