use super::{clamp_to_edge, PixelSource};

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The source image.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The channel values of the source pixel at `(floor(u), floor(v))`.
pub(crate) fn nearest_neighbor_interpolation<const C: usize, S: PixelSource<C>>(
    image: &S,
    u: f64,
    v: f64,
) -> [f64; C] {
    let size = image.size();

    let iu = clamp_to_edge(u.floor() as isize, size.width);
    let iv = clamp_to_edge(v.floor() as isize, size.height);

    image.pixel_at(iu, iv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixresample_image::{Image, ImageError};

    #[test]
    fn nearest_floors_coordinate() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_fn([3, 3].into(), |x, y| [(y * 3 + x) as u8, 0, 0])?;
        assert_eq!(nearest_neighbor_interpolation(&image, 1.9, 0.2)[0], 1.0);
        assert_eq!(nearest_neighbor_interpolation(&image, 2.0, 2.99)[0], 8.0);
        Ok(())
    }

    #[test]
    fn nearest_clamps_to_edge() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_fn([3, 3].into(), |x, y| [(y * 3 + x) as u8, 0, 0])?;
        assert_eq!(nearest_neighbor_interpolation(&image, 3.0, 3.0)[0], 8.0);
        assert_eq!(nearest_neighbor_interpolation(&image, -0.5, 1.0)[0], 3.0);
        Ok(())
    }
}
