use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use pixresample_image::{ImageSize, Rgb8Image};
use pixresample_imgproc::{
    interpolation::InterpolationMode,
    parallel::ExecutionStrategy,
    resize::{self, ResizeOptions},
};

fn gradient_image(size: ImageSize) -> Rgb8Image {
    Rgb8Image::from_fn(size, |x, y| {
        [
            (x * 255 / size.width) as u8,
            (y * 255 / size.height) as u8,
            ((x + y) % 256) as u8,
        ]
    })
    .unwrap()
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resize");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image = gradient_image([*width, *height].into());

        // output image at half size
        let new_size = ImageSize {
            width: width / 2,
            height: height / 2,
        };

        for mode in InterpolationMode::ALL {
            group.bench_with_input(
                BenchmarkId::new(mode.to_string(), &parameter_string),
                &image,
                |b, i| {
                    let mut dst = Rgb8Image::from_size_val(new_size, 0).unwrap();
                    b.iter(|| resize::resize(black_box(i), black_box(&mut dst), black_box(mode)))
                },
            );
        }
    }
    group.finish();
}

fn bench_strategy(c: &mut Criterion) {
    let mut group = c.benchmark_group("ResizeStrategy");

    let image = gradient_image([1024, 896].into());
    let new_size = ImageSize {
        width: 512,
        height: 448,
    };

    for strategy in [
        ExecutionStrategy::Serial,
        ExecutionStrategy::ParallelRows,
        ExecutionStrategy::Fixed(4),
    ] {
        let options = ResizeOptions::new(InterpolationMode::Bicubic).with_strategy(strategy);
        group.bench_with_input(
            BenchmarkId::new("bicubic", strategy.to_string()),
            &image,
            |b, i| {
                let mut dst = Rgb8Image::from_size_val(new_size, 0).unwrap();
                b.iter(|| resize::resize_with(black_box(i), black_box(&mut dst), &options))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_resize, bench_strategy);
criterion_main!(benches);
