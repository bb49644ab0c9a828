use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimension(usize, usize),

    #[error("Decoded drawing is {width}x{height}, larger than the {max} px limit")]
    CanvasTooLarge { width: usize, height: usize, max: usize },

    #[error("Canvas buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Failed to decode drawing: {0}")]
    DecodeError(String),

    #[error("Failed to encode PNG image: {0}")]
    EncodingFailure(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
