use super::{clamp_to_edge, split_coordinate, PixelSource};

/// One dimensional cubic convolution of the samples at positions `-1, 0, 1, 2`
/// evaluated at offset `x` in `[0, 1)` from position `0`.
#[inline]
pub(crate) fn cubic_interpolate(p: [f64; 4], x: f64) -> f64 {
    p[1] + 0.5
        * x
        * (p[2] - p[0]
            + x * (2.0 * p[0] - 5.0 * p[1] + 4.0 * p[2] - p[3]
                + x * (3.0 * (p[1] - p[2]) + p[3] - p[0])))
}

/// Kernel for bicubic interpolation
///
/// The 4x4 neighborhood starts at the integer base `(floor(u), floor(v))`, which is
/// clamped to `[0, extent - 2]`, and every sample index is clamped to the image edge.
/// The kernel origin is the second sample of each row and column.
///
/// # Arguments
///
/// * `image` - The source image.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values. They may lie outside the range of the input samples.
pub(crate) fn bicubic_interpolation<const C: usize, S: PixelSource<C>>(
    image: &S,
    u: f64,
    v: f64,
) -> [f64; C] {
    let size = image.size();

    let (iu, _) = split_coordinate(u);
    let (iv, _) = split_coordinate(v);

    let iu = iu.clamp(0, size.width.saturating_sub(2) as isize);
    let iv = iv.clamp(0, size.height.saturating_sub(2) as isize);

    let frac_u = u - iu as f64;
    let frac_v = v - iv as f64;

    // gather the neighborhood once, rows then columns
    let mut window = [[[0.0; C]; 4]; 4];
    for (j, row) in window.iter_mut().enumerate() {
        let yl = clamp_to_edge(iv + j as isize, size.height);
        for (i, sample) in row.iter_mut().enumerate() {
            let xl = clamp_to_edge(iu + i as isize, size.width);
            *sample = image.pixel_at(xl, yl);
        }
    }

    let mut pixel = [0.0; C];
    for (k, out) in pixel.iter_mut().enumerate() {
        let mut col = [0.0; 4];
        for (j, row) in window.iter().enumerate() {
            col[j] = cubic_interpolate([row[0][k], row[1][k], row[2][k], row[3][k]], frac_u);
        }
        *out = cubic_interpolate(col, frac_v);
    }

    pixel
}
