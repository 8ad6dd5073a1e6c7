use super::bicubic::bicubic_interpolation;
use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use super::PixelSource;

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation
    Nearest,
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Bicubic interpolation
    Bicubic,
}

impl InterpolationMode {
    /// All the supported interpolation modes.
    pub const ALL: [InterpolationMode; 3] = [
        InterpolationMode::Nearest,
        InterpolationMode::Bilinear,
        InterpolationMode::Bicubic,
    ];

    /// Minimum source width and height the mode can sample from.
    pub fn min_source_extent(&self) -> usize {
        match self {
            InterpolationMode::Nearest => 1,
            InterpolationMode::Bilinear | InterpolationMode::Bicubic => 2,
        }
    }
}

impl std::fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            InterpolationMode::Nearest => "nearest",
            InterpolationMode::Bilinear => "bilinear",
            InterpolationMode::Bicubic => "bicubic",
        };
        f.pad(name)
    }
}

impl std::str::FromStr for InterpolationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" => Ok(InterpolationMode::Nearest),
            "bilinear" | "linear" => Ok(InterpolationMode::Bilinear),
            "bicubic" | "cubic" => Ok(InterpolationMode::Bicubic),
            other => Err(format!("unknown interpolation mode: {other}")),
        }
    }
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The source image.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The reconstructed channel values, before quantization.
///
/// # Examples
///
/// ```
/// use pixresample_image::Image;
/// use pixresample_imgproc::interpolation::{interpolate_pixel, InterpolationMode};
///
/// let image = Image::<u8, 3>::new([2, 1].into(), vec![0, 0, 0, 100, 50, 10]).unwrap();
///
/// let px = interpolate_pixel(&image, 0.5, 0.0, InterpolationMode::Bilinear);
/// assert_eq!(px, [50.0, 25.0, 5.0]);
/// ```
pub fn interpolate_pixel<const C: usize, S: PixelSource<C>>(
    image: &S,
    u: f64,
    v: f64,
    interpolation: InterpolationMode,
) -> [f64; C] {
    match interpolation {
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v),
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v),
        InterpolationMode::Bicubic => bicubic_interpolation(image, u, v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_str() {
        assert_eq!("nearest".parse(), Ok(InterpolationMode::Nearest));
        assert_eq!("Bilinear".parse(), Ok(InterpolationMode::Bilinear));
        assert_eq!("cubic".parse(), Ok(InterpolationMode::Bicubic));
        assert!("lanczos".parse::<InterpolationMode>().is_err());
    }

    #[test]
    fn mode_display_roundtrip() {
        for mode in InterpolationMode::ALL {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }

    #[test]
    fn min_source_extent() {
        assert_eq!(InterpolationMode::Nearest.min_source_extent(), 1);
        assert_eq!(InterpolationMode::Bilinear.min_source_extent(), 2);
        assert_eq!(InterpolationMode::Bicubic.min_source_extent(), 2);
    }
}
