//! Drawing-surface input module
//!
//! This module holds the RGBA buffer handed over by the drawing surface and
//! readers that produce one from encoded image bytes.

mod image_reader;
mod reader;
pub mod types;

pub use image_reader::ImageCanvasReader;
pub use reader::CanvasReader;
pub use types::RawCanvasBuffer;
