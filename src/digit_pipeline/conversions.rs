//! Pipeline conversions module
//!
//! This module contains the orchestration from drawing-surface buffer to
//! canonical digit, matrix and PNG artifact.

mod canvas_to_digit;

#[cfg(test)]
mod tests;

pub use canvas_to_digit::{CanvasToDigitPipeline, PipelineOutput, ProcessOutcome, process};
