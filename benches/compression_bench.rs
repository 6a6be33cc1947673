use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{DynamicImage, Rgb, RgbImage};
use std::path::PathBuf;
use webp_squeeze::{discover, encode_webp, WebpOptions};
use tempfile::TempDir;

fn create_test_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
    }))
}

fn bench_encode_webp(c: &mut Criterion) {
    let img = create_test_image(512, 512);
    let mut group = c.benchmark_group("encode_webp");
    group.sample_size(20);

    for quality in [50u8, 80, 95] {
        let options = WebpOptions::new(Some(quality)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(quality), &options, |b, options| {
            b.iter(|| encode_webp(black_box(&img), options).unwrap())
        });
    }

    group.finish();
}

fn bench_discover(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    for dir in 0..10 {
        let sub = temp_dir.path().join(format!("dir{}", dir));
        std::fs::create_dir(&sub).unwrap();
        for file in 0..50 {
            let ext = if file % 3 == 0 { "txt" } else { "jpg" };
            std::fs::File::create(sub.join(format!("f{}.{}", file, ext))).unwrap();
        }
    }
    let inputs: Vec<PathBuf> = vec![temp_dir.path().to_path_buf()];

    c.bench_function("discover_recursive", |b| {
        b.iter(|| discover(black_box(&inputs), true))
    });
}

criterion_group!(benches, bench_encode_webp, bench_discover);
criterion_main!(benches);
