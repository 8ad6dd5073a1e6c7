use pixresample_image::ImageSize;

use super::InterpolationMode;

/// Ratio between the source and destination extents along each axis.
///
/// A destination pixel `(x, y)` maps to the fractional source coordinate
/// `(x * ratio.x, y * ratio.y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRatio {
    /// Horizontal ratio.
    pub x: f64,
    /// Vertical ratio.
    pub y: f64,
}

impl ScaleRatio {
    /// Compute the scale ratio used by `mode` to resample `src` into `dst`.
    ///
    /// Nearest uses `src / dst`. Bilinear and bicubic use `(src - 1) / dst` so the last
    /// reachable sample still has a forward neighbor inside the source.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixresample_image::ImageSize;
    /// use pixresample_imgproc::interpolation::{InterpolationMode, ScaleRatio};
    ///
    /// let src = ImageSize { width: 5, height: 9 };
    /// let dst = ImageSize { width: 2, height: 4 };
    ///
    /// let nearest = ScaleRatio::new(src, dst, InterpolationMode::Nearest);
    /// assert_eq!((nearest.x, nearest.y), (2.5, 2.25));
    ///
    /// let bilinear = ScaleRatio::new(src, dst, InterpolationMode::Bilinear);
    /// assert_eq!((bilinear.x, bilinear.y), (2.0, 2.0));
    /// ```
    pub fn new(src: ImageSize, dst: ImageSize, mode: InterpolationMode) -> Self {
        let (src_w, src_h) = match mode {
            InterpolationMode::Nearest => (src.width as f64, src.height as f64),
            InterpolationMode::Bilinear | InterpolationMode::Bicubic => (
                src.width.saturating_sub(1) as f64,
                src.height.saturating_sub(1) as f64,
            ),
        };
        Self {
            x: src_w / dst.width as f64,
            y: src_h / dst.height as f64,
        }
    }

    /// Map the destination pixel `(x, y)` to its fractional source coordinate `(gx, gy)`.
    #[inline]
    pub fn map(&self, x: usize, y: usize) -> (f64, f64) {
        (x as f64 * self.x, y as f64 * self.y)
    }
}

/// Split a non-negative fractional coordinate into its integer base and offset in `[0, 1)`.
#[inline]
pub fn split_coordinate(g: f64) -> (isize, f64) {
    let base = g.floor();
    (base as isize, g - base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn scale_ratio_nearest() {
        let ratio = ScaleRatio::new([4, 4].into(), [2, 2].into(), InterpolationMode::Nearest);
        assert_eq!(ratio, ScaleRatio { x: 2.0, y: 2.0 });
        assert_eq!(ratio.map(1, 1), (2.0, 2.0));
    }

    #[test]
    fn scale_ratio_bicubic() {
        let ratio = ScaleRatio::new([10, 7].into(), [4, 3].into(), InterpolationMode::Bicubic);
        assert_relative_eq!(ratio.x, 2.25);
        assert_relative_eq!(ratio.y, 2.0);
        let (gx, gy) = ratio.map(3, 2);
        assert_relative_eq!(gx, 6.75);
        assert_relative_eq!(gy, 4.0);
    }

    #[test]
    fn split() {
        let (base, frac) = split_coordinate(6.75);
        assert_eq!(base, 6);
        assert_relative_eq!(frac, 0.75);

        let (base, frac) = split_coordinate(0.0);
        assert_eq!(base, 0);
        assert_relative_eq!(frac, 0.0);
    }
}
