use crate::digit_pipeline::transform::types::{CanonicalImage, NormalizedImage};

const SCALE: f64 = 255.0;

/// Rescales integer samples to [0.0, 1.0] via `v / 255.0`.
///
/// Runs after inversion when both toggles are on, so inversion always sees
/// the 0..=255 integer domain.
pub fn normalize(img: &CanonicalImage) -> NormalizedImage {
    NormalizedImage::from_samples(img.as_slice().iter().map(|&v| f64::from(v) / SCALE).collect())
}
