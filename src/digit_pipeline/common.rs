//! Common utilities module
//!
//! This module contains the error type, configuration and stage timing shared
//! across the digit pipeline.

pub mod config;
pub mod error;
pub mod timing;

pub use config::{PipelineConfig, PipelineConfigBuilder, ResampleFilter};
pub use error::{ConversionError, Result};
pub use timing::{PipelineTimings, StepTiming, Timer};
