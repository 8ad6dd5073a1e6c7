use super::{clamp_to_edge, split_coordinate, PixelSource};

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `image` - The source image.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values, a convex combination of the 2x2 neighborhood.
///
/// The blend is evaluated as two nested lerps rather than the four-weight sum
/// `(1-u)(1-v)p00 + u(1-v)p01 + (1-u)v p10 + uv p11`. Both are equal algebraically,
/// but rounding differs in the last bits, so after truncation a channel can be one
/// above the four-weight result. The lerp form never falls below the smallest corner.
pub(crate) fn bilinear_interpolation<const C: usize, S: PixelSource<C>>(
    image: &S,
    u: f64,
    v: f64,
) -> [f64; C] {
    let size = image.size();

    let (iu, frac_u) = split_coordinate(u);
    let (iv, frac_v) = split_coordinate(v);

    let iu0 = clamp_to_edge(iu, size.width);
    let iv0 = clamp_to_edge(iv, size.height);
    let iu1 = clamp_to_edge(iu + 1, size.width);
    let iv1 = clamp_to_edge(iv + 1, size.height);

    let p00 = image.pixel_at(iu0, iv0);
    let p01 = image.pixel_at(iu1, iv0);
    let p10 = image.pixel_at(iu0, iv1);
    let p11 = image.pixel_at(iu1, iv1);

    // (1-u)(1-v)p00 + u(1-v)p01 + (1-u)v p10 + uv p11, evaluated as nested lerps
    // so the result never leaves [min, max] of the corners
    let mut pixel = [0.0; C];
    for k in 0..C {
        let top = p00[k] + (p01[k] - p00[k]) * frac_u;
        let bottom = p10[k] + (p11[k] - p10[k]) * frac_u;
        pixel[k] = top + (bottom - top) * frac_v;
    }

    pixel
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pixresample_image::{Image, ImageError};

    #[test]
    fn bilinear_blend() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new([2, 2].into(), vec![0, 0, 0, 100, 0, 0, 100, 0, 0, 200, 0, 0])?;

        assert_relative_eq!(bilinear_interpolation(&image, 0.0, 0.0)[0], 0.0);
        assert_relative_eq!(bilinear_interpolation(&image, 0.5, 0.0)[0], 50.0);
        assert_relative_eq!(bilinear_interpolation(&image, 0.5, 0.5)[0], 100.0);
        assert_relative_eq!(bilinear_interpolation(&image, 0.25, 0.75)[0], 100.0);
        Ok(())
    }

    #[test]
    fn bilinear_forward_neighbor_clamped() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new([2, 2].into(), vec![0, 0, 0, 100, 0, 0, 100, 0, 0, 200, 0, 0])?;
        assert_relative_eq!(bilinear_interpolation(&image, 1.0, 1.0)[0], 200.0);
        Ok(())
    }
}
