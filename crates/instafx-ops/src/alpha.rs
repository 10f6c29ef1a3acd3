//! Alpha-aware wrapper around RGB blend functions.
//!
//! [`alpha_blend`] splits the alpha band off both operands, runs the blend
//! function on the RGB parts, then recombines with the simple
//! alpha-compositing formula, substituting the blended color for the
//! source term:
//!
//! ```text
//! result = ab*as*B(Cb, Cs) + as*(1 - ab)*Cs + ab*(1 - as)*Cb
//! ```
//!
//! An operand without alpha counts as fully opaque, which reduces the
//! formula to `ab*B + (1 - ab)*Cs` or `as*B + (1 - as)*Cb`. When neither
//! operand has alpha the blended image is returned as is.
//!
//! The result never carries alpha.

use instafx_core::{Error, Image, PixelMode, Result, buffer::split_alpha, ensure_same_size};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Blends `source` onto `backdrop` with the RGB blend function `f`.
///
/// `f` receives the RGB parts of both operands and must return an RGB
/// image of the same size.
///
/// # Errors
///
/// - [`Error::UnsupportedMode`] unless both images are RGB or RGBA
/// - [`Error::ShapeMismatch`] if their sizes differ
/// - anything `f` returns
///
/// # Example
///
/// ```rust
/// use instafx_core::{Image, PixelMode};
/// use instafx_ops::alpha::alpha_blend;
/// use instafx_ops::blend::{blend_rgb, BlendMode};
///
/// let backdrop = Image::filled(1, 1, PixelMode::Rgb, &[200, 100, 0]).unwrap();
/// let clear = Image::filled(1, 1, PixelMode::Rgba, &[0, 0, 255, 0]).unwrap();
///
/// let out = alpha_blend(&backdrop, &clear, |b, s| blend_rgb(BlendMode::Multiply, b, s)).unwrap();
/// assert_eq!(out, backdrop);
/// ```
pub fn alpha_blend<F>(backdrop: &Image, source: &Image, f: F) -> Result<Image>
where
    F: FnOnce(&Image, &Image) -> Result<Image>,
{
    for image in [backdrop, source] {
        if !image.mode().is_color() {
            return Err(Error::unsupported_mode(image.mode(), "alpha_blend"));
        }
    }
    ensure_same_size(backdrop.dimensions(), source.dimensions())?;

    let (rgb_b, alpha_b) = split_alpha(backdrop)?;
    let (rgb_s, alpha_s) = split_alpha(source)?;
    trace!(
        width = backdrop.width(),
        height = backdrop.height(),
        backdrop_alpha = alpha_b.is_some(),
        source_alpha = alpha_s.is_some(),
        "alpha::alpha_blend"
    );

    let blended = f(&rgb_b, &rgb_s)?;
    if blended.mode() != PixelMode::Rgb {
        return Err(Error::unsupported_mode(blended.mode(), "alpha_blend result"));
    }
    ensure_same_size(blended.dimensions(), backdrop.dimensions())?;

    if alpha_b.is_none() && alpha_s.is_none() {
        return Ok(blended);
    }

    let (width, height) = backdrop.dimensions();
    let w = width as usize;
    let mut out = vec![0u8; w * height as usize * 3];

    let ab = alpha_b.as_ref().map(|c| c.data());
    let as_ = alpha_s.as_ref().map(|c| c.data());
    let (cb, cs, bl) = (rgb_b.data(), rgb_s.data(), blended.data());

    crate::parallel::for_each_row(&mut out, w * 3, |y, row| {
        for (x, px) in row.chunks_exact_mut(3).enumerate() {
            let i = y * w + x;
            let a_b = ab.map_or(1.0, |a| a[i] as f64 / 255.0);
            let a_s = as_.map_or(1.0, |a| a[i] as f64 / 255.0);
            let k_blend = a_b * a_s;
            let k_src = a_s * (1.0 - a_b);
            let k_back = a_b * (1.0 - a_s);
            for c in 0..3 {
                let j = i * 3 + c;
                let v = k_blend * bl[j] as f64 + k_src * cs[j] as f64 + k_back * cb[j] as f64;
                px[c] = v.clamp(0.0, 255.0).round() as u8;
            }
        }
    });

    debug!(width, height, "Alpha composited");
    Image::from_raw(width, height, PixelMode::Rgb, out)
}
