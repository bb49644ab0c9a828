//! Turns free-hand canvas drawings into 28×28 grayscale digit images.

pub mod digit_pipeline;
pub mod logger;
