//! PNG export module
//!
//! This module serializes the canonical digit as an 8-bit grayscale PNG and
//! pairs it with the display matrix.

mod decode;
mod encode;
mod standard_png_writer;
pub mod types;
mod writer;

pub use decode::decode_png;
pub use encode::{encode, encode_with};
pub use standard_png_writer::StandardPngWriter;
pub use types::{ARTIFACT_FILE_NAME, ARTIFACT_MEDIA_TYPE, EncodedArtifact, PngCompression};
pub use writer::PngWriter;
