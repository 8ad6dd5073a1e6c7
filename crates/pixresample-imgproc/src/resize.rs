use crate::interpolation::{interpolate_pixel, InterpolationMode, PixelSource, ScaleRatio};
use crate::parallel::{self, ExecutionStrategy, ParallelError};
use crate::quantize::QuantizePolicy;
use pixresample_image::{Image, ImageError, ImageSize};

/// Errors returned by the resize operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResizeError {
    /// The source or destination image has an invalid size.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The execution strategy could not be applied.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}

/// Options for the resize operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeOptions {
    /// The interpolation mode to use.
    pub interpolation: InterpolationMode,
    /// How interpolated values are narrowed back to 8 bits.
    pub quantize: QuantizePolicy,
    /// How the destination rows are distributed across threads.
    pub strategy: ExecutionStrategy,
}

impl ResizeOptions {
    /// Create the default options for the given interpolation mode.
    pub fn new(interpolation: InterpolationMode) -> Self {
        Self {
            interpolation,
            ..Default::default()
        }
    }

    /// Set the quantization policy.
    pub fn with_quantize(mut self, quantize: QuantizePolicy) -> Self {
        self.quantize = quantize;
        self
    }

    /// Set the execution strategy.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

fn check_sizes(
    src: ImageSize,
    dst: ImageSize,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if dst.width == 0 || dst.height == 0 {
        return Err(ImageError::InvalidImageSize(dst.width, dst.height));
    }

    let min = interpolation.min_source_extent();
    if src.width < min || src.height < min {
        return Err(ImageError::ImageTooSmall(src.width, src.height, min, min));
    }

    Ok(())
}

/// Resize an image into a pre-allocated destination using the given options.
///
/// Every destination pixel `(x, y)` is mapped to the source coordinate
/// `(x * ratio.x, y * ratio.y)`, reconstructed with the selected interpolation
/// kernel and quantized with the selected policy. All source reads are clamped
/// to the image edge.
///
/// # Arguments
///
/// * `src` - The source pixels.
/// * `dst` - The output image, its size is the target size.
/// * `options` - The interpolation, quantization and execution options.
///
/// # Errors
///
/// * The source is smaller than the interpolation mode requires.
/// * The execution strategy is invalid.
pub fn resize_with<S, const C: usize>(
    src: &S,
    dst: &mut Image<u8, C>,
    options: &ResizeOptions,
) -> Result<(), ResizeError>
where
    S: PixelSource<C>,
{
    let src_size = src.size();
    check_sizes(src_size, dst.size(), options.interpolation)?;

    let ratio = ScaleRatio::new(src_size, dst.size(), options.interpolation);

    log::debug!(
        "resize {} -> {} mode: {} ratio: ({}, {}) strategy: {}",
        src_size,
        dst.size(),
        options.interpolation,
        ratio.x,
        ratio.y,
        options.strategy
    );

    let interpolation = options.interpolation;
    let quantize = options.quantize;

    parallel::par_iter_rows_resample(dst, options.strategy, |x, y, dst_pixel| {
        let (u, v) = ratio.map(x, y);
        let pixel = interpolate_pixel(src, u, v, interpolation);
        quantize.quantize_pixel(&pixel, dst_pixel);
    })?;

    Ok(())
}

/// Resize an image to the size of `dst`.
///
/// Uses the default quantization policy (saturate) and the default execution strategy.
///
/// # Example
///
/// ```
/// use pixresample_image::{Image, ImageSize};
/// use pixresample_imgproc::resize::resize;
/// use pixresample_imgproc::interpolation::InterpolationMode;
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0u8).unwrap();
///
/// resize(&image, &mut image_resized, InterpolationMode::Bicubic).unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    interpolation: InterpolationMode,
) -> Result<(), ResizeError> {
    resize_with(src, dst, &ResizeOptions::new(interpolation))
}

/// Resample an image to `new_size`, returning a newly allocated image.
///
/// # Errors
///
/// * `new_size` has a zero width or height.
/// * The source is smaller than the interpolation mode requires.
pub fn resample<const C: usize>(
    src: &Image<u8, C>,
    new_size: ImageSize,
    interpolation: InterpolationMode,
) -> Result<Image<u8, C>, ResizeError> {
    check_sizes(src.size(), new_size, interpolation)?;
    let mut dst = Image::from_size_val(new_size, 0u8)?;
    resize(src, &mut dst, interpolation)?;
    Ok(dst)
}
