//! Pipeline configuration types

use crate::digit_pipeline::png::PngCompression;

/// Kernel used to bring the grayscale drawing down to 28×28
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleFilter {
    /// Area averaging with fractional pixel coverage (default)
    #[default]
    Area,
    /// Triangle filter from the `image` crate
    Bilinear,
    /// Nearest source pixel at each target centre
    Nearest,
}

/// Configuration for one canvas to digit conversion
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Flip polarity (`255 - v`) after resampling
    pub invert: bool,
    /// Rescale samples to [0, 1] for the display matrix
    pub normalize: bool,
    /// Resampling kernel
    pub filter: ResampleFilter,
    /// PNG compression level for the exported artifact
    pub compression: PngCompression,
    /// Reject decoded drawing files wider or taller than this
    pub max_dimension: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            invert: false,
            normalize: false,
            filter: ResampleFilter::Area,
            compression: PngCompression::Default,
            max_dimension: None,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    invert: Option<bool>,
    normalize: Option<bool>,
    filter: Option<ResampleFilter>,
    compression: Option<PngCompression>,
    max_dimension: Option<Option<usize>>,
}

impl PipelineConfigBuilder {
    pub fn invert(mut self, enable: bool) -> Self {
        self.invert = Some(enable);
        self
    }

    pub fn normalize(mut self, enable: bool) -> Self {
        self.normalize = Some(enable);
        self
    }

    pub fn filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            invert: self.invert.unwrap_or(default.invert),
            normalize: self.normalize.unwrap_or(default.normalize),
            filter: self.filter.unwrap_or(default.filter),
            compression: self.compression.unwrap_or(default.compression),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
