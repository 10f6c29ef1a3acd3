//! 256-entry lookup tables applied to the color bands of an image.

use instafx_core::{Error, Image, Result};
#[allow(unused_imports)]
use tracing::trace;

/// Maps every color band value `v` to `lut[v]`; alpha is kept.
///
/// # Errors
///
/// [`Error::InvalidParameter`] unless `lut.len() == 256`.
///
/// # Example
///
/// ```rust
/// use instafx_core::{Image, PixelMode};
/// use instafx_ops::lut::apply_lut;
///
/// let negative: Vec<u8> = (0..=255u8).rev().collect();
/// let img = Image::filled(1, 1, PixelMode::Rgb, &[0, 10, 255]).unwrap();
/// assert_eq!(apply_lut(&img, &negative).unwrap().pixel(0, 0), &[255, 245, 0]);
/// ```
pub fn apply_lut(image: &Image, lut: &[u8]) -> Result<Image> {
    let table: &[u8; 256] = lut.try_into().map_err(|_| {
        Error::invalid_parameter("lut", lut.len() as f64, "a LUT must have 256 entries")
    })?;
    trace!(width = image.width(), height = image.height(), "lut::apply_lut");

    let color_bands = image.mode().without_alpha().bands();
    Ok(image.map_pixels(image.mode(), move |src, dst| {
        for (i, (d, &s)) in dst.iter_mut().zip(src).enumerate() {
            *d = if i < color_bands { table[s as usize] } else { s };
        }
    }))
}

/// Builds a table from `f`, clamping and rounding each entry.
pub fn lut_from_fn<F: Fn(f64) -> f64>(f: F) -> [u8; 256] {
    std::array::from_fn(|i| f(i as f64).clamp(0.0, 255.0).round() as u8)
}
