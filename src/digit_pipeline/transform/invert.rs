use crate::digit_pipeline::transform::types::CanonicalImage;

/// Flips polarity in the integer domain: `v' = 255 - v`.
///
/// Returns a new image; the input is left untouched for other readers.
pub fn invert(img: &CanonicalImage) -> CanonicalImage {
    img.map(|v| u8::MAX - v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_extremes() {
        let img = CanonicalImage::from_fn(|x, _| if x < 14 { 0 } else { 255 });
        let out = invert(&img);

        assert_eq!(out.get(0, 0), 255);
        assert_eq!(out.get(27, 27), 0);
        assert_eq!(img.get(0, 0), 0);
    }

    #[test]
    fn every_value_maps_to_its_complement() {
        let img = CanonicalImage::from_fn(|x, y| ((y * 28 + x) % 256) as u8);
        let out = invert(&img);

        for (a, b) in img.as_slice().iter().zip(out.as_slice()) {
            assert_eq!(u16::from(*a) + u16::from(*b), 255);
        }
    }
}
