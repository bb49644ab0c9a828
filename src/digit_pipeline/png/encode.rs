use tracing::debug;

use crate::digit_pipeline::common::error::Result;
use crate::digit_pipeline::png::standard_png_writer::StandardPngWriter;
use crate::digit_pipeline::png::types::{EncodedArtifact, PngCompression};
use crate::digit_pipeline::png::writer::PngWriter;
use crate::digit_pipeline::transform::{CanonicalImage, NormalizedImage, PixelMatrix};

/// Produces the display matrix and the PNG artifact for one digit.
///
/// `image` is always the integer-domain raster; the artifact is encoded from
/// it even when a normalized matrix is supplied for display.
pub fn encode(
    image: &CanonicalImage,
    normalized: Option<NormalizedImage>,
    compression: PngCompression,
) -> Result<(PixelMatrix, EncodedArtifact)> {
    encode_with(&StandardPngWriter, image, normalized, compression)
}

pub fn encode_with<W: PngWriter + ?Sized>(
    writer: &W,
    image: &CanonicalImage,
    normalized: Option<NormalizedImage>,
    compression: PngCompression,
) -> Result<(PixelMatrix, EncodedArtifact)> {
    let mut bytes = Vec::new();
    writer.write_png(image, &mut bytes, compression)?;
    debug!("Artifact encoded, {} bytes", bytes.len());

    let matrix = match normalized {
        Some(values) => PixelMatrix::Normalized(values),
        None => PixelMatrix::Integer(image.clone()),
    };

    Ok((matrix, EncodedArtifact::png(bytes)))
}
