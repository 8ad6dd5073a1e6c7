#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// conversion of interpolated values back to 8-bit channels.
pub mod quantize;

/// utility functions for resizing images.
pub mod resize;
