use std::path::Path;

use tracing::{info, instrument, warn};

use crate::digit_pipeline::{
    canvas::{CanvasReader, ImageCanvasReader, RawCanvasBuffer},
    common::{ConversionError, PipelineConfig, PipelineTimings, Result},
    png::{EncodedArtifact, PngWriter, StandardPngWriter, encode_with},
    transform::{self, CanonicalImage, GrayscaleImage, PixelMatrix},
};

/// Everything one pipeline pass produces
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Full-size grayscale drawing
    pub grayscale: GrayscaleImage,
    /// 28×28 integer raster after the optional inversion
    pub canonical: CanonicalImage,
    /// Matrix in the active value domain
    pub matrix: PixelMatrix,
    /// PNG of `canonical`
    pub artifact: EncodedArtifact,
}

/// Result of a pass: either nothing was drawn yet, or a full output
#[derive(Debug, Clone)]
pub enum ProcessOutcome {
    NothingToProcess,
    Processed(PipelineOutput),
}

impl ProcessOutcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, Self::Processed(_))
    }

    pub fn output(self) -> Option<PipelineOutput> {
        match self {
            Self::Processed(output) => Some(output),
            Self::NothingToProcess => None,
        }
    }
}

/// Runs one stateless pass with the default reader and PNG writer.
pub fn process(buffer: Option<&RawCanvasBuffer>, config: &PipelineConfig) -> Result<ProcessOutcome> {
    CanvasToDigitPipeline::new(config.clone()).process(buffer)
}

pub struct CanvasToDigitPipeline<R: CanvasReader, W: PngWriter> {
    reader: R,
    writer: W,
    config: PipelineConfig,
}

impl CanvasToDigitPipeline<ImageCanvasReader, StandardPngWriter> {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            reader: ImageCanvasReader,
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<R: CanvasReader, W: PngWriter> CanvasToDigitPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: PipelineConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimension(width, height));
        }
        Ok(())
    }

    /// Size cap for decoded drawings; in-memory canvases are never capped.
    fn check_size_limit(&self, canvas: &RawCanvasBuffer) -> Result<()> {
        let (width, height) = (canvas.width(), canvas.height());
        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Decoded drawing {}x{} exceeds maximum {}", width, height, max);
                return Err(ConversionError::CanvasTooLarge { width, height, max });
            }
        }
        Ok(())
    }

    /// Converts the current drawing, if there is one.
    pub fn process(&self, buffer: Option<&RawCanvasBuffer>) -> Result<ProcessOutcome> {
        self.process_with_timings(buffer).map(|(outcome, _)| outcome)
    }

    #[instrument(skip_all, fields(invert = self.config.invert, normalize = self.config.normalize))]
    pub fn process_with_timings(
        &self,
        buffer: Option<&RawCanvasBuffer>,
    ) -> Result<(ProcessOutcome, PipelineTimings)> {
        let mut timings = PipelineTimings::new();

        let Some(buffer) = buffer else {
            info!("No drawing yet, nothing to process");
            return Ok((ProcessOutcome::NothingToProcess, timings));
        };

        info!("Starting canvas to digit conversion");
        self.validate_dimensions(buffer.width(), buffer.height())?;

        let grayscale = {
            let _span = tracing::info_span!("reduce",
                width = buffer.width(),
                height = buffer.height()
            ).entered();
            timings.record("reduce", || transform::reduce(buffer))
        };

        let resampled = {
            let _span = tracing::info_span!("resample", filter = ?self.config.filter).entered();
            timings.record("resample", || transform::resample(&grayscale, self.config.filter))?
        };

        // Inversion works on 0..=255 integers, so it has to precede normalization.
        let canonical = if self.config.invert {
            let _span = tracing::info_span!("invert").entered();
            timings.record("invert", || transform::invert(&resampled))
        } else {
            resampled
        };

        let normalized = if self.config.normalize {
            let _span = tracing::info_span!("normalize").entered();
            Some(timings.record("normalize", || transform::normalize(&canonical)))
        } else {
            None
        };

        let (matrix, artifact) = {
            let _span = tracing::info_span!("encode").entered();
            timings.record("encode", || {
                encode_with(&self.writer, &canonical, normalized, self.config.compression)
            })?
        };

        info!(
            "Conversion complete: {}x{} -> {}x{} in {:.3}ms",
            grayscale.width(),
            grayscale.height(),
            canonical.width(),
            canonical.height(),
            timings.total_duration().as_secs_f64() * 1000.0
        );

        let output = PipelineOutput {
            grayscale,
            canonical,
            matrix,
            artifact,
        };
        Ok((ProcessOutcome::Processed(output), timings))
    }

    /// Decodes an encoded drawing with the reader and converts it.
    ///
    /// Empty input means no drawing yet.
    pub fn process_bytes(&self, data: &[u8]) -> Result<ProcessOutcome> {
        if data.is_empty() {
            return self.process(None);
        }
        let canvas = {
            let _span = tracing::info_span!("read_canvas", input_size = data.len()).entered();
            self.reader.read_canvas(data)?
        };
        self.check_size_limit(&canvas)?;
        self.process(Some(&canvas))
    }

    /// Converts a drawing on disk and writes the PNG artifact into `output_dir`.
    #[instrument(skip(self, input_path, output_dir))]
    pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_dir: Q,
    ) -> Result<ProcessOutcome> {
        let input_path = input_path.as_ref();
        let output_dir = output_dir.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_dir.display(),
            "Converting file"
        );

        let input_data = std::fs::read(input_path).map_err(|e| {
            ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
        })?;

        let outcome = self.process_bytes(&input_data)?;
        if let ProcessOutcome::Processed(output) = &outcome {
            let path = output.artifact.write_to(output_dir)?;
            info!(path = %path.display(), "Digit exported");
        }

        Ok(outcome)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }
}
