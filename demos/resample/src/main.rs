use argh::FromArgs;
use std::time::Instant;

use pixresample::{
    image::{ImageSize, Rgb8Image},
    imgproc::{
        interpolation::InterpolationMode,
        parallel::ExecutionStrategy,
        quantize::QuantizePolicy,
        resize::{resize_with, ResizeOptions},
    },
};

/// Resample a synthetic RGB image and time each interpolation mode
#[derive(Debug, FromArgs)]
struct Args {
    /// width of the synthetic source image
    #[argh(option, default = "1920")]
    width: usize,

    /// height of the synthetic source image
    #[argh(option, default = "1080")]
    height: usize,

    /// width of the output image, half the source width by default
    #[argh(option)]
    new_width: Option<usize>,

    /// height of the output image, half the source height by default
    #[argh(option)]
    new_height: Option<usize>,

    /// interpolation mode: nearest, bilinear, bicubic or all
    #[argh(
        option,
        short = 'm',
        default = "vec![InterpolationMode::ALL.to_vec()]",
        from_str_fn(to_modes)
    )]
    mode: Vec<Vec<InterpolationMode>>,

    /// number of threads, the global rayon pool is used when omitted
    #[argh(option, short = 'n')]
    threads: Option<usize>,

    /// run on the current thread only
    #[argh(switch)]
    serial: bool,

    /// number of timed iterations per mode
    #[argh(option, short = 'i', default = "10")]
    iterations: usize,

    /// wrap out of range values instead of saturating them
    #[argh(switch)]
    wrap: bool,
}

fn to_modes(value: &str) -> Result<Vec<InterpolationMode>, String> {
    match value {
        "all" => Ok(InterpolationMode::ALL.to_vec()),
        other => Ok(vec![other.parse()?]),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let src_size = ImageSize {
        width: args.width,
        height: args.height,
    };
    let new_size = ImageSize {
        width: args.new_width.unwrap_or(args.width / 2),
        height: args.new_height.unwrap_or(args.height / 2),
    };

    // diagonal color gradient so every mode has something to interpolate
    let src = Rgb8Image::from_fn(src_size, |x, y| {
        [
            (x * 255 / src_size.width) as u8,
            (y * 255 / src_size.height) as u8,
            ((x ^ y) & 0xff) as u8,
        ]
    })?;

    let strategy = match (args.serial, args.threads) {
        (true, _) => ExecutionStrategy::Serial,
        (false, Some(n)) => ExecutionStrategy::Fixed(n),
        (false, None) => ExecutionStrategy::ParallelRows,
    };
    let quantize = if args.wrap {
        QuantizePolicy::Wrap
    } else {
        QuantizePolicy::Saturate
    };

    println!(
        "🚀 Resampling {}x{} -> {}x{} ({strategy}, {} iterations)",
        src_size.width, src_size.height, new_size.width, new_size.height, args.iterations
    );

    let mut dst = Rgb8Image::from_size_val(new_size, 0)?;

    for mode in args.mode.into_iter().flatten() {
        let options = ResizeOptions::new(mode)
            .with_quantize(quantize)
            .with_strategy(strategy);

        let start = Instant::now();
        for _ in 0..args.iterations.max(1) {
            resize_with(&src, &mut dst, &options)?;
        }
        let elapsed = start.elapsed();

        let checksum = dst
            .as_slice()
            .iter()
            .fold(0u64, |acc, &v| acc.wrapping_mul(31).wrapping_add(v as u64));

        log::info!("{mode}: total {elapsed:?}");
        println!(
            "{mode:>9}: {:.3} ms/iter, checksum {checksum:016x}",
            elapsed.as_secs_f64() * 1e3 / args.iterations.max(1) as f64
        );
    }

    Ok(())
}
