use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use digit_canvas::digit_pipeline::{
    CanvasToDigitPipeline, PipelineConfig, RawCanvasBuffer, ResampleFilter,
};

fn generate_mock_canvas(width: usize, height: usize) -> RawCanvasBuffer {
    let stroke = width / 10;
    RawCanvasBuffer::from_fn(width, height, |x, y| {
        let on_stroke = x.abs_diff(y) < stroke || x.abs_diff(width / 2) < stroke;
        if on_stroke { [0, 0, 0, 255] } else { [255, 255, 255, 255] }
    })
    .expect("mock canvas dimensions are non-zero")
}

fn benchmark_canvas_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (300, 300, "300x300"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let canvas = generate_mock_canvas(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &canvas, |b, canvas| {
            let pipeline = CanvasToDigitPipeline::new(PipelineConfig::default());

            b.iter(|| {
                let _ = pipeline.process(Some(black_box(canvas)));
            });
        });
    }

    group.finish();
}

fn benchmark_resample_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample_filters");
    let canvas = generate_mock_canvas(300, 300);

    let filters = vec![
        (ResampleFilter::Area, "area"),
        (ResampleFilter::Bilinear, "bilinear"),
        (ResampleFilter::Nearest, "nearest"),
    ];

    for (filter, label) in filters {
        group.bench_with_input(BenchmarkId::from_parameter(label), &canvas, |b, canvas| {
            let config = PipelineConfig::builder()
                .filter(filter)
                .invert(true)
                .normalize(true)
                .build();
            let pipeline = CanvasToDigitPipeline::new(config);

            b.iter(|| {
                let _ = pipeline.process(Some(black_box(canvas)));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_canvas_sizes, benchmark_resample_filters);
criterion_main!(benches);
