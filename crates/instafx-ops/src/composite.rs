//! Mask compositing and simple per-band arithmetic.
//!
//! - [`composite`] - select between two images through a mask
//! - [`mix`] - constant-opacity interpolation
//! - [`invert`], [`add`], [`subtract`] - saturating per-band arithmetic
//!
//! All binary operations require operands of the same mode and size. Alpha
//! bands of RGBA/LA inputs take part in `composite`, `mix`, `add` and
//! `subtract` like any other band; `invert` leaves alpha untouched.

use instafx_core::{Channel, Error, Image, Result, ensure_same_size};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// `a` where `mask` is 255, `b` where it is 0, linear in between.
///
/// Per band: `b + (a - b) * m / 255`, rounded.
///
/// # Errors
///
/// - [`Error::UnsupportedMode`] if `a` and `b` differ in mode
/// - [`Error::ShapeMismatch`] if any of the three differ in size
///
/// # Example
///
/// ```rust
/// use instafx_core::{Channel, Image, PixelMode};
/// use instafx_ops::composite::composite;
///
/// let white = Image::filled(2, 1, PixelMode::Rgb, &[255, 255, 255]).unwrap();
/// let black = Image::new(2, 1, PixelMode::Rgb);
/// let mask = Channel::from_raw(2, 1, vec![255, 0]).unwrap();
///
/// let out = composite(&white, &black, &mask).unwrap();
/// assert_eq!(out.data(), &[255, 255, 255, 0, 0, 0]);
/// ```
pub fn composite(a: &Image, b: &Image, mask: &Channel) -> Result<Image> {
    ensure_same_mode(a, b, "composite")?;
    ensure_same_size(a.dimensions(), b.dimensions())?;
    ensure_same_size(a.dimensions(), mask.dimensions())?;
    trace!(width = a.width(), height = a.height(), mode = %a.mode(), "composite::composite");

    let (width, height) = a.dimensions();
    let bands = a.bands();
    let row_len = width as usize * bands;
    let (ad, bd, md) = (a.data(), b.data(), mask.data());
    let mut out = vec![0u8; ad.len()];

    crate::parallel::for_each_row(&mut out, row_len, |y, row| {
        let base = y * row_len;
        for (i, v) in row.iter_mut().enumerate() {
            let j = base + i;
            let m = md[j / bands] as f64 / 255.0;
            let (av, bv) = (ad[j] as f64, bd[j] as f64);
            *v = (bv + (av - bv) * m).round() as u8;
        }
    });

    Image::from_raw(width, height, a.mode(), out)
}

/// `a + (b - a) * alpha`, per band.
///
/// # Errors
///
/// - [`Error::InvalidParameter`] unless `alpha` is in `[0, 1]`
/// - [`Error::UnsupportedMode`] / [`Error::ShapeMismatch`] for mismatched operands
pub fn mix(a: &Image, b: &Image, alpha: f64) -> Result<Image> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(Error::invalid_parameter("alpha", alpha, "must be in [0, 1]"));
    }
    ensure_same_mode(a, b, "mix")?;
    trace!(width = a.width(), height = a.height(), alpha, "composite::mix");

    a.zip_map_pixels(b, a.mode(), move |pa, pb, dst| {
        for ((d, &x), &y) in dst.iter_mut().zip(pa).zip(pb) {
            let (x, y) = (x as f64, y as f64);
            *d = (x + (y - x) * alpha).clamp(0.0, 255.0).round() as u8;
        }
    })
}

/// `255 - v` on every color band; alpha is kept.
pub fn invert(image: &Image) -> Image {
    let color_bands = image.mode().without_alpha().bands();
    image.map_pixels(image.mode(), move |src, dst| {
        for (i, (d, &s)) in dst.iter_mut().zip(src).enumerate() {
            *d = if i < color_bands { 255 - s } else { s };
        }
    })
}

/// Saturating per-band `a + b`.
///
/// # Errors
///
/// [`Error::UnsupportedMode`] / [`Error::ShapeMismatch`] for mismatched operands.
pub fn add(a: &Image, b: &Image) -> Result<Image> {
    ensure_same_mode(a, b, "add")?;
    a.zip_map_pixels(b, a.mode(), |pa, pb, dst| {
        for ((d, &x), &y) in dst.iter_mut().zip(pa).zip(pb) {
            *d = x.saturating_add(y);
        }
    })
}

/// Saturating per-band `a - b`.
///
/// # Errors
///
/// [`Error::UnsupportedMode`] / [`Error::ShapeMismatch`] for mismatched operands.
pub fn subtract(a: &Image, b: &Image) -> Result<Image> {
    ensure_same_mode(a, b, "subtract")?;
    a.zip_map_pixels(b, a.mode(), |pa, pb, dst| {
        for ((d, &x), &y) in dst.iter_mut().zip(pa).zip(pb) {
            *d = x.saturating_sub(y);
        }
    })
}

fn ensure_same_mode(a: &Image, b: &Image, op: &'static str) -> Result<()> {
    if a.mode() != b.mode() {
        return Err(Error::unsupported_mode(b.mode(), op));
    }
    Ok(())
}
