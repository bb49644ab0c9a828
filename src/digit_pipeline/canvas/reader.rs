use crate::digit_pipeline::canvas::types::RawCanvasBuffer;
use crate::digit_pipeline::common::error::Result;

pub trait CanvasReader {
    fn read_canvas(&self, data: &[u8]) -> Result<RawCanvasBuffer>;
}
