/// How an interpolated value is narrowed to an 8-bit channel.
///
/// Both policies first truncate toward zero. They only differ for values outside
/// `[0, 255]`, which bicubic interpolation can produce near sharp edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantizePolicy {
    /// Clip out of range values to `0` or `255`.
    #[default]
    Saturate,
    /// Reduce out of range values modulo 256, as a plain narrowing cast of the
    /// integer part would.
    Wrap,
}

impl QuantizePolicy {
    /// Narrow `value` to a `u8` channel. Non-finite values map to `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixresample_imgproc::quantize::QuantizePolicy;
    ///
    /// assert_eq!(QuantizePolicy::Saturate.quantize(127.9), 127);
    /// assert_eq!(QuantizePolicy::Saturate.quantize(286.875), 255);
    /// assert_eq!(QuantizePolicy::Wrap.quantize(286.875), 30);
    /// ```
    #[inline]
    pub fn quantize(&self, value: f64) -> u8 {
        let value = value.trunc();
        match self {
            QuantizePolicy::Saturate => {
                num_traits::cast::<f64, u8>(value.clamp(0.0, 255.0)).unwrap_or(0)
            }
            QuantizePolicy::Wrap => num_traits::cast::<f64, i64>(value)
                .map(|v| v.rem_euclid(256) as u8)
                .unwrap_or(0),
        }
    }

    /// Narrow every channel of an interpolated pixel into `dst`.
    #[inline]
    pub fn quantize_pixel<const C: usize>(&self, pixel: &[f64; C], dst: &mut [u8]) {
        dst.iter_mut()
            .zip(pixel.iter())
            .for_each(|(d, &p)| *d = self.quantize(p));
    }
}
