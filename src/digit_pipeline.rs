//! Digit normalization pipeline
//!
//! This module turns an RGBA drawing-surface buffer into the canonical 28×28
//! grayscale digit, with separate modules for canvas input, the numeric
//! transforms, PNG encoding, display helpers and pipeline orchestration.

pub mod canvas;
pub mod common;
pub mod conversions;
pub mod png;
pub mod render;
pub mod transform;

pub use common::{
    ConversionError,
    PipelineConfig,
    PipelineConfigBuilder,
    PipelineTimings,
    ResampleFilter,
    Result,
    StepTiming,
    Timer,
};

pub use canvas::{
    CanvasReader,
    ImageCanvasReader,
    RawCanvasBuffer,
};

pub use transform::{
    CANONICAL_SIZE,
    CanonicalImage,
    GrayscaleImage,
    NormalizedImage,
    PixelMatrix,
    invert,
    normalize,
    reduce,
    resample,
};

pub use png::{
    ARTIFACT_FILE_NAME,
    ARTIFACT_MEDIA_TYPE,
    EncodedArtifact,
    PngCompression,
    PngWriter,
    StandardPngWriter,
    decode_png,
    encode,
};

pub use conversions::{
    CanvasToDigitPipeline,
    PipelineOutput,
    ProcessOutcome,
    process,
};
