use std::io::Write;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;
use crate::digit_pipeline::common::error::{ConversionError, Result};
use crate::digit_pipeline::png::types::PngCompression;
use crate::digit_pipeline::png::writer::PngWriter;
use crate::digit_pipeline::transform::CanonicalImage;

pub struct StandardPngWriter;

impl PngWriter for StandardPngWriter {
    fn write_png(&self, image: &CanonicalImage, output: &mut dyn Write, compression: PngCompression) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width(), image.height());

        let mut buffer = Vec::new();

        let compression = match compression {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        };

        let encoder = PngEncoder::new_with_quality(&mut buffer, compression, FilterType::Adaptive);
        encoder
            .write_image(
                image.as_slice(),
                image.width() as u32,
                image.height() as u32,
                ExtendedColorType::L8,
            )
            .map_err(|e| ConversionError::EncodingFailure(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
