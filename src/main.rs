use std::path::PathBuf;

use anyhow::{Context, Result};
use digit_canvas::digit_pipeline::render::{pixel_grid, preview};
use digit_canvas::digit_pipeline::{CanvasToDigitPipeline, PipelineConfig, ProcessOutcome};
use digit_canvas::logger;
use tracing::{info, warn};

const GRID_CELL: u32 = 12;
const DIGIT_PREVIEW_SIZE: u32 = 200;
const MAX_DRAWING_SIDE: usize = 8192;

fn main() -> Result<()> {
    logger::init();

    let mut invert = false;
    let mut normalize = false;
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--invert" => invert = true,
            "--normalize" => normalize = true,
            other if other.starts_with("--") => warn!("Ignoring unknown flag {}", other),
            other => paths.push(PathBuf::from(other)),
        }
    }

    let config = PipelineConfig::builder()
        .invert(invert)
        .normalize(normalize)
        .max_dimension(Some(MAX_DRAWING_SIDE))
        .build();
    let pipeline = CanvasToDigitPipeline::new(config);

    info!("Invert colors: {}", pipeline.config().invert);
    info!("Normalize values: {}", pipeline.config().normalize);

    let Some(input) = paths.first() else {
        pipeline.process(None)?;
        info!("Usage: digit_canvas <drawing.png> [output_dir] [--invert] [--normalize]");
        return Ok(());
    };
    let output_dir = paths.get(1).cloned().unwrap_or_else(|| PathBuf::from("."));

    let outcome = pipeline
        .process_file(input, &output_dir)
        .with_context(|| format!("converting {}", input.display()))?;

    let ProcessOutcome::Processed(output) = outcome else {
        info!("Draw a digit first, the input was empty");
        return Ok(());
    };

    let grid_path = output_dir.join("digit_grid.png");
    pixel_grid(&output.canonical, GRID_CELL)
        .save(&grid_path)
        .with_context(|| format!("writing {}", grid_path.display()))?;

    let preview_path = output_dir.join("digit_preview.png");
    preview(&output.canonical, DIGIT_PREVIEW_SIZE)
        .save(&preview_path)
        .with_context(|| format!("writing {}", preview_path.display()))?;

    info!("Pixel grid written to {}", grid_path.display());
    print!("{}", output.matrix);

    Ok(())
}
