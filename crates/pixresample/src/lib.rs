#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use pixresample_image as image;

#[doc(inline)]
pub use pixresample_imgproc as imgproc;
