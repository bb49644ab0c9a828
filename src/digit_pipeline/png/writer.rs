use std::io::Write;
use crate::digit_pipeline::common::error::Result;
use crate::digit_pipeline::png::types::PngCompression;
use crate::digit_pipeline::transform::CanonicalImage;

pub trait PngWriter {
    fn write_png(&self, image: &CanonicalImage, output: &mut dyn Write, compression: PngCompression) -> Result<()>;
}
