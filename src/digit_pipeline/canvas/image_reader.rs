//! Canvas reader backed by the `image` crate.
//!
//! Lets the pipeline run on drawings saved to disk (PNG screenshots of the
//! drawing surface) instead of a live buffer.

use tracing::debug;

use crate::digit_pipeline::canvas::reader::CanvasReader;
use crate::digit_pipeline::canvas::types::RawCanvasBuffer;
use crate::digit_pipeline::common::error::{ConversionError, Result};

/// Decodes any raster format the `image` crate was built with into RGBA.
pub struct ImageCanvasReader;

impl CanvasReader for ImageCanvasReader {
    fn read_canvas(&self, data: &[u8]) -> Result<RawCanvasBuffer> {
        debug!("Decoding drawing, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;
        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();

        debug!("Decoded drawing: {}x{}", width, height);

        RawCanvasBuffer::new(width as usize, height as usize, rgba.into_raw())
    }
}
