use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::digit_pipeline::canvas::{CanvasReader, RawCanvasBuffer};
use crate::digit_pipeline::common::{ConversionError, PipelineConfig, Result};
use crate::digit_pipeline::conversions::{CanvasToDigitPipeline, ProcessOutcome};
use crate::digit_pipeline::png::{PngCompression, PngWriter};
use crate::digit_pipeline::transform::{CANONICAL_SIZE, CanonicalImage, PixelMatrix};

struct MockReader {
    should_fail: bool,
    canvas: Option<RawCanvasBuffer>,
}

impl CanvasReader for MockReader {
    fn read_canvas(&self, _data: &[u8]) -> Result<RawCanvasBuffer> {
        if self.should_fail {
            return Err(ConversionError::DecodeError("Mock decode error".to_string()));
        }
        match &self.canvas {
            Some(canvas) => Ok(canvas.clone()),
            None => RawCanvasBuffer::filled(100, 100, [255, 255, 255, 255]),
        }
    }
}

struct MockWriter {
    should_fail: bool,
    written: Arc<Mutex<Vec<CanonicalImage>>>,
}

impl PngWriter for MockWriter {
    fn write_png(&self, image: &CanonicalImage, output: &mut dyn Write, _compression: PngCompression) -> Result<()> {
        if self.should_fail {
            return Err(ConversionError::EncodingFailure("Mock encode error".to_string()));
        }
        self.written.lock().unwrap().push(image.clone());
        output.write_all(b"mock")?;
        Ok(())
    }
}

fn pipeline(
    reader: MockReader,
    writer_fails: bool,
    config: PipelineConfig,
) -> (CanvasToDigitPipeline<MockReader, MockWriter>, Arc<Mutex<Vec<CanonicalImage>>>) {
    let written = Arc::new(Mutex::new(Vec::new()));
    let writer = MockWriter { should_fail: writer_fails, written: written.clone() };
    (CanvasToDigitPipeline::with_custom(reader, writer, config), written)
}

fn ok_reader() -> MockReader {
    MockReader { should_fail: false, canvas: None }
}

#[test]
fn test_successful_conversion() {
    let (pipeline, written) = pipeline(ok_reader(), false, PipelineConfig::default());

    let outcome = pipeline.process_bytes(b"fake drawing").unwrap();

    let output = outcome.output().unwrap();
    assert_eq!(written.lock().unwrap().len(), 1);
    assert_eq!(output.artifact.bytes, b"mock");
    assert_eq!(output.grayscale.width(), 100);
    assert!(output.canonical.as_slice().iter().all(|&v| v == 255));
}

#[test]
fn test_empty_input_is_nothing_to_process() {
    let (pipeline, written) = pipeline(ok_reader(), false, PipelineConfig::default());

    assert!(matches!(pipeline.process(None).unwrap(), ProcessOutcome::NothingToProcess));
    assert!(matches!(pipeline.process_bytes(&[]).unwrap(), ProcessOutcome::NothingToProcess));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_reader_failure() {
    let reader = MockReader { should_fail: true, canvas: None };
    let (pipeline, written) = pipeline(reader, false, PipelineConfig::default());

    let result = pipeline.process_bytes(b"fake drawing");

    assert!(matches!(result.unwrap_err(), ConversionError::DecodeError(_)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_writer_failure() {
    let (pipeline, _) = pipeline(ok_reader(), true, PipelineConfig::default());

    let result = pipeline.process_bytes(b"fake drawing");

    assert!(matches!(result.unwrap_err(), ConversionError::EncodingFailure(_)));
}

#[test]
fn test_size_limit_applies_to_decoded_drawings() {
    let canvas = RawCanvasBuffer::filled(600, 20, [0, 0, 0, 255]).unwrap();
    let reader = MockReader { should_fail: false, canvas: Some(canvas) };
    let config = PipelineConfig::builder().max_dimension(Some(512)).build();
    let (pipeline, written) = pipeline(reader, false, config);

    let result = pipeline.process_bytes(b"fake drawing");

    assert!(matches!(
        result.unwrap_err(),
        ConversionError::CanvasTooLarge { width: 600, height: 20, max: 512 }
    ));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_size_limit_ignores_in_memory_canvas() {
    let canvas = RawCanvasBuffer::filled(600, 20, [0, 0, 0, 255]).unwrap();
    let config = PipelineConfig::builder().max_dimension(Some(512)).build();
    let (pipeline, _) = pipeline(ok_reader(), false, config);

    assert!(pipeline.process(Some(&canvas)).unwrap().is_processed());
}

#[test]
fn test_wide_canvas_processed_by_default() {
    let canvas = RawCanvasBuffer::filled(5000, 2, [255, 255, 255, 255]).unwrap();
    let reader = MockReader { should_fail: false, canvas: Some(canvas.clone()) };
    let (pipeline, _) = pipeline(reader, false, PipelineConfig::default());

    let output = pipeline.process(Some(&canvas)).unwrap().output().unwrap();
    assert!(output.canonical.as_slice().iter().all(|&v| v == 255));
    assert!(pipeline.process_bytes(b"fake drawing").unwrap().is_processed());
}

#[test]
fn test_writer_receives_inverted_integer_raster() {
    let config = PipelineConfig::builder().invert(true).normalize(true).build();
    let (pipeline, written) = pipeline(ok_reader(), false, config);

    let output = pipeline.process_bytes(b"fake drawing").unwrap().output().unwrap();

    let written = written.lock().unwrap();
    assert!(written[0].as_slice().iter().all(|&v| v == 0));
    match output.matrix {
        PixelMatrix::Normalized(values) => assert!(values.as_slice().iter().all(|&v| v == 0.0)),
        PixelMatrix::Integer(_) => panic!("expected normalized matrix"),
    }
}

#[test]
fn test_timings_cover_enabled_stages() {
    let canvas = RawCanvasBuffer::filled(40, 40, [10, 10, 10, 255]).unwrap();
    let (pipeline, _) = pipeline(ok_reader(), false, PipelineConfig::default());

    let (outcome, timings) = pipeline.process_with_timings(Some(&canvas)).unwrap();

    assert!(outcome.is_processed());
    let names: Vec<_> = timings.steps().iter().map(|s| s.name).collect();
    assert_eq!(names, ["reduce", "resample", "encode"]);

    let mut pipeline = pipeline;
    pipeline.set_config(PipelineConfig::builder().invert(true).normalize(true).build());
    let (_, timings) = pipeline.process_with_timings(Some(&canvas)).unwrap();
    let names: Vec<_> = timings.steps().iter().map(|s| s.name).collect();
    assert_eq!(names, ["reduce", "resample", "invert", "normalize", "encode"]);
    assert!(pipeline.config().invert);
}

#[test]
fn test_output_shape_is_canonical() {
    let canvas = RawCanvasBuffer::filled(300, 7, [0, 0, 0, 255]).unwrap();
    let (pipeline, _) = pipeline(ok_reader(), false, PipelineConfig::default());

    let output = pipeline.process(Some(&canvas)).unwrap().output().unwrap();

    assert_eq!((output.grayscale.width(), output.grayscale.height()), (300, 7));
    assert_eq!(output.canonical.as_slice().len(), CANONICAL_SIZE * CANONICAL_SIZE);
}
