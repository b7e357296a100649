use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pagepet_sprites::image_pipeline::{
    CatPose, CatSprite, EncoderConfig, Pixel, PngCompression, PngWriter, Raster, RasterToPngPipeline,
    StandardPngWriter,
};
use std::hint::black_box;
use std::io::Cursor;

fn generate_mock_raster(width: usize, height: usize) -> Raster {
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                let value = ((x + y) % 256) as u8;
                Pixel::new(value, value, value, 255)
            })
        })
        .collect();
    Raster::new(width, height, pixels).expect("valid mock raster")
}

fn benchmark_encode_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_by_size");

    let sizes = vec![
        (32, 32, "32x32"),
        (256, 256, "256x256"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let raster = generate_mock_raster(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &raster, |b, raster| {
            let config = EncoderConfig::default();
            b.iter(|| StandardPngWriter.encode(black_box(raster), &config));
        });
    }

    group.finish();
}

fn benchmark_compression_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_levels");
    let raster = generate_mock_raster(500, 500);

    let compressions = vec![
        (PngCompression::Stored, "stored"),
        (PngCompression::Fast, "fast"),
        (PngCompression::Balanced, "balanced"),
        (PngCompression::Best, "best"),
    ];

    for (compression, label) in compressions {
        group.bench_with_input(BenchmarkId::from_parameter(label), &raster, |b, raster| {
            let config = EncoderConfig::builder().compression(compression).build();
            b.iter(|| StandardPngWriter.encode(black_box(raster), &config));
        });
    }

    group.finish();
}

fn benchmark_sprite_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprite_pipeline");
    let pipeline = RasterToPngPipeline::new(EncoderConfig::default());

    for pose in CatPose::ALL {
        let sprite = CatSprite::new(pose);
        group.bench_function(pose.name(), |b| {
            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                let _ = pipeline.convert(black_box(&sprite), &mut output);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_sizes,
    benchmark_compression_levels,
    benchmark_sprite_pipeline
);
criterion_main!(benches);
