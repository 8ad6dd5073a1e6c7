//! Pixel interpolation methods for image resampling.
//!
//! This module provides the interpolation kernels used when resampling images
//! to a different resolution, together with the coordinate mapping that takes
//! a destination pixel back to the source image.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, copies the nearest pixel value (no interpolation)
//! - **Bilinear**: Smooth linear interpolation between the 2x2 neighborhood
//! - **Bicubic**: Separable cubic convolution over the 4x4 neighborhood
//!
//! Every kernel reads the source through [`PixelSource`] and clamps each index
//! to the image edge, so no mode can read outside the source image.

mod bicubic;
mod bilinear;

/// Coordinate mapping from destination pixels to source space.
pub mod grid;

pub(crate) mod interpolate;
mod nearest;

pub use grid::{split_coordinate, ScaleRatio};
pub use interpolate::{interpolate_pixel, InterpolationMode};

use pixresample_image::{Image, ImageSize};

/// Read access to the pixels of a source image.
///
/// The interpolation kernels only ever read through this trait, which allows
/// wrapping an image to observe every access.
pub trait PixelSource<const C: usize>: Sync {
    /// The size of the source in pixels.
    fn size(&self) -> ImageSize;

    /// The channel values of the pixel at column `x` and row `y`.
    ///
    /// Callers guarantee `x < width` and `y < height`.
    fn pixel_at(&self, x: usize, y: usize) -> [f64; C];
}

impl<const C: usize> PixelSource<C> for Image<u8, C> {
    fn size(&self) -> ImageSize {
        Image::size(self)
    }

    #[inline]
    fn pixel_at(&self, x: usize, y: usize) -> [f64; C] {
        debug_assert!(x < self.width() && y < self.height());
        let base = (y * self.width() + x) * C;
        let px = &self.as_slice()[base..base + C];
        std::array::from_fn(|k| px[k] as f64)
    }
}

/// Pin a possibly out of range index to the nearest valid index in `[0, extent - 1]`.
///
/// # Examples
///
/// ```
/// use pixresample_imgproc::interpolation::clamp_to_edge;
///
/// assert_eq!(clamp_to_edge(-1, 4), 0);
/// assert_eq!(clamp_to_edge(2, 4), 2);
/// assert_eq!(clamp_to_edge(7, 4), 3);
/// ```
#[inline]
pub fn clamp_to_edge(index: isize, extent: usize) -> usize {
    index.clamp(0, extent as isize - 1) as usize
}
