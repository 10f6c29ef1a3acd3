//! Operand sources: flat fills, linear and radial gradients.
//!
//! Gradients are built from single-band masks composited between flat
//! fills with [`composite`](crate::composite::composite): a mask value of
//! 255 selects the first color, 0 the second.
//!
//! # Linear masks
//!
//! [`linear_gradient_mask`] has two regimes, selected by `end`:
//!
//! - `end >= 1`: a falling ramp sampled at pixel centers,
//!   `255 * (1 - (start + t * (1/end - start)))`, so the left (or top)
//!   edge is bright
//! - `end < 1`: a rising ramp from `start * 255` to `end * 255`, endpoints
//!   included, truncated to 8 bits
//!
//! # Radial masks
//!
//! [`radial_gradient_mask`] measures the distance of each sample from
//! `center`, normalized by the distance to the farthest corner, and maps
//! `[length, scale]` onto `[255, 0]`. The sample grid spans both image
//! edges inclusively.
//!
//! # Example
//!
//! ```rust
//! use instafx_core::Color;
//! use instafx_ops::gradient::radial_gradient;
//!
//! let stops = [Color::rgb(255, 255, 255), Color::rgb(0, 0, 0)];
//! let vignette = radial_gradient((64, 64), &stops, None, (0.5, 0.5)).unwrap();
//! assert!(vignette.pixel(32, 32)[0] > 240);
//! assert_eq!(vignette.pixel(0, 0)[0], 0);
//! ```

use instafx_core::{Channel, Color, Error, Image, PixelMode, Result};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::composite::composite;

/// Guards the radial falloff when `scale == length`.
const MIN_FALLOFF: f64 = 0.001;

/// Image of `size` filled with `color`; RGBA when the color has alpha.
pub fn fill(size: (u32, u32), color: Color) -> Image {
    let pixel = color.to_pixel();
    Image::from_fn(size.0, size.1, color.mode(), |_, _, px| px.copy_from_slice(&pixel))
}

/// Linear ramp mask along x (`horizontal`) or y.
///
/// # Errors
///
/// [`Error::InvalidParameter`] if `start` is not finite or `end` is not a
/// positive finite number.
pub fn linear_gradient_mask(size: (u32, u32), start: f64, end: f64, horizontal: bool) -> Result<Channel> {
    if !start.is_finite() {
        return Err(Error::invalid_parameter("start", start, "must be finite"));
    }
    if !end.is_finite() || end <= 0.0 {
        return Err(Error::invalid_parameter("end", end, "must be > 0"));
    }
    let (w, h) = size;
    let n = if horizontal { w } else { h };
    trace!(w, h, start, end, horizontal, "gradient::linear_gradient_mask");

    let ramp: Vec<u8> = if end >= 1.0 {
        let span = 1.0 / end - start;
        (0..n)
            .map(|i| {
                let t = (i as f64 + 0.5) / n as f64;
                (255.0 * (1.0 - (start + t * span))).clamp(0.0, 255.0).round() as u8
            })
            .collect()
    } else {
        linspace(start * 255.0, end * 255.0, n as usize)
            .map(|v| v.clamp(0.0, 255.0) as u8)
            .collect()
    };

    Ok(Channel::from_fn(w, h, |x, y| {
        let i = if horizontal { x } else { y };
        ramp[i as usize]
    }))
}

/// Two-color linear gradient, `start` at the left (or top) edge.
///
/// # Errors
///
/// Propagates mask and compositing errors.
pub fn linear_gradient(size: (u32, u32), start: Color, end: Color, horizontal: bool) -> Result<Image> {
    let mode = common_mode(&[start, end]);
    let mask = linear_gradient_mask(size, 0.0, 1.0, horizontal)?;
    composite(&fill_as(size, start, mode), &fill_as(size, end, mode), &mask)
}

/// Shape of a radial mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialMask {
    /// Normalized distance where the falloff starts (inner color stop).
    pub length: f64,
    /// Normalized distance where the falloff reaches 0 (ending shape).
    pub scale: f64,
    /// Center as a fraction of width and height.
    pub center: (f64, f64),
}

impl RadialMask {
    /// Full falloff from the image center to its corners.
    pub const CENTER: Self = Self {
        length: 0.0,
        scale: 1.0,
        center: (0.5, 0.5),
    };

    /// Mask with the given stops, centered.
    pub const fn new(length: f64, scale: f64) -> Self {
        Self {
            length,
            scale,
            center: (0.5, 0.5),
        }
    }

    /// Same stops around another center.
    pub const fn with_center(self, cx: f64, cy: f64) -> Self {
        Self {
            center: (cx, cy),
            ..self
        }
    }

    fn validate(&self) -> Result<()> {
        for (name, v) in [
            ("length", self.length),
            ("scale", self.scale),
            ("center.x", self.center.0),
            ("center.y", self.center.1),
        ] {
            if !v.is_finite() {
                return Err(Error::invalid_parameter(name, v, "must be finite"));
            }
        }
        Ok(())
    }
}

impl Default for RadialMask {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Radial falloff mask: 255 inside `length`, 0 beyond `scale`.
///
/// # Errors
///
/// [`Error::InvalidParameter`] for non-finite shape parameters.
pub fn radial_gradient_mask(size: (u32, u32), shape: RadialMask) -> Result<Channel> {
    shape.validate()?;
    let (w, h) = size;
    trace!(w, h, length = shape.length, scale = shape.scale, "gradient::radial_gradient_mask");

    if shape.length >= 1.0 {
        return Ok(Channel::filled(w, h, 255));
    }
    if shape.scale <= 0.0 {
        return Ok(Channel::filled(w, h, 0));
    }

    let (cx, cy) = shape.center;
    let (left, right) = (w as f64 * cx, w as f64 * (1.0 - cx));
    let (top, bottom) = (h as f64 * cy, h as f64 * (1.0 - cy));
    let xs: Vec<f64> = linspace(-left, right, w as usize).collect();
    let ys: Vec<f64> = linspace(-top, bottom, h as usize).collect();

    // farthest corner
    let r = left.max(right).hypot(top.max(bottom));
    let falloff = (shape.scale - shape.length).max(MIN_FALLOFF);

    Ok(Channel::from_fn(w, h, |x, y| {
        let d = xs[x as usize].hypot(ys[y as usize]) / r;
        let v = (1.0 - (d - shape.length) / falloff) * 255.0;
        v.clamp(0.0, 255.0).round() as u8
    }))
}

/// Radial gradient through `colors`, innermost first.
///
/// Stops sit at `positions` (normalized distances), or are evenly spaced
/// over `[0, 1]` when omitted. Adjacent stops are joined with
/// [`radial_gradient_mask`]s around `center`, given as fractions of width
/// and height. Any stop with alpha makes the result RGBA.
///
/// # Errors
///
/// [`Error::InvalidParameter`] for fewer than two stops or a `positions`
/// slice whose length differs from `colors`.
pub fn radial_gradient(
    size: (u32, u32),
    colors: &[Color],
    positions: Option<&[f64]>,
    center: (f64, f64),
) -> Result<Image> {
    if colors.len() < 2 {
        return Err(Error::invalid_parameter(
            "colors",
            colors.len() as f64,
            "a radial gradient needs at least two color stops",
        ));
    }
    let positions: Vec<f64> = match positions {
        Some(p) if p.len() != colors.len() => {
            return Err(Error::invalid_parameter(
                "positions",
                p.len() as f64,
                format!("expected {} positions, one per color", colors.len()),
            ));
        }
        Some(p) => p.to_vec(),
        None => linspace(0.0, 1.0, colors.len()).collect(),
    };
    debug!(w = size.0, h = size.1, stops = colors.len(), "Building radial gradient");

    let mode = common_mode(colors);
    let (cx, cy) = center;
    let mut acc = fill_as(size, colors[0], mode);
    for (i, &color) in colors.iter().enumerate().skip(1) {
        let shape = RadialMask::new(positions[i - 1], positions[i]).with_center(cx, cy);
        let mask = radial_gradient_mask(size, shape)?;
        acc = composite(&acc, &fill_as(size, color, mode), &mask)?;
    }
    Ok(acc)
}

fn common_mode(colors: &[Color]) -> PixelMode {
    if colors.iter().any(|c| c.alpha.is_some()) {
        PixelMode::Rgba
    } else {
        PixelMode::Rgb
    }
}

fn fill_as(size: (u32, u32), color: Color, mode: PixelMode) -> Image {
    let rgba = color.to_rgba();
    let bands = mode.bands();
    Image::from_fn(size.0, size.1, mode, |_, _, px| px.copy_from_slice(&rgba[..bands]))
}

/// `n` evenly spaced samples from `a` to `b` inclusive; `[a]` when `n == 1`.
fn linspace(a: f64, b: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { (b - a) / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| if i + 1 == n && n > 1 { b } else { a + step * i as f64 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_modes() {
        let rgb = fill((2, 3), Color::rgb(1, 2, 3));
        assert_eq!(rgb.mode(), PixelMode::Rgb);
        assert!(rgb.pixels().all(|px| px == [1, 2, 3]));

        let rgba = fill((2, 2), Color::rgba(0, 128, 255, 0.5).unwrap());
        assert_eq!(rgba.mode(), PixelMode::Rgba);
        assert_eq!(rgba.pixel(1, 1), &[0, 128, 255, 128]);
    }

    #[test]
    fn test_linear_mask_start_end() {
        let mask = linear_gradient_mask((4, 4), 100.0 / 255.0, 200.0 / 255.0, true).unwrap();
        for y in 0..4 {
            let row: Vec<u8> = (0..4).map(|x| mask.get(x, y).unwrap()).collect();
            assert_eq!(row, [100, 133, 166, 200]);
        }

        let vertical = linear_gradient_mask((4, 4), 100.0 / 255.0, 200.0 / 255.0, false).unwrap();
        let col: Vec<u8> = (0..4).map(|y| vertical.get(2, y).unwrap()).collect();
        assert_eq!(col, [100, 133, 166, 200]);
    }

    #[test]
    fn test_linear_mask_full_range_falls() {
        let mask = linear_gradient_mask((4, 1), 0.0, 1.0, true).unwrap();
        assert_eq!(mask.data(), &[223, 159, 96, 32]);
    }

    #[test]
    fn test_linear_mask_invalid_end() {
        assert!(linear_gradient_mask((4, 4), 0.0, 0.0, true).unwrap_err().is_invalid_parameter());
        assert!(linear_gradient_mask((4, 4), f64::NAN, 1.0, true).is_err());
    }

    #[test]
    fn test_linear_gradient_white_to_black() {
        let g = linear_gradient((4, 2), Color::rgb(255, 255, 255), Color::rgb(0, 0, 0), true).unwrap();
        let row: Vec<u8> = (0..4).map(|x| g.pixel(x, 1)[0]).collect();
        assert_eq!(row, [223, 159, 96, 32]);
        assert!(g.pixels().all(|px| px[0] == px[1] && px[1] == px[2]));
    }

    #[test]
    fn test_radial_mask_length() {
        let mask = radial_gradient_mask((5, 5), RadialMask::new(0.5, 1.0)).unwrap();
        #[rustfmt::skip]
        let expected = [
              0, 107, 149, 107,   0,
            107, 255, 255, 255, 107,
            149, 255, 255, 255, 149,
            107, 255, 255, 255, 107,
              0, 107, 149, 107,   0,
        ];
        assert_eq!(mask.data(), &expected);
    }

    #[test]
    fn test_radial_mask_corner_center() {
        let mask = radial_gradient_mask((5, 5), RadialMask::CENTER.with_center(0.0, 0.0)).unwrap();
        #[rustfmt::skip]
        let expected = [
            255, 210, 165, 120,  75,
            210, 191, 154, 112,  69,
            165, 154, 128,  92,  53,
            120, 112,  92,  64,  30,
             75,  69,  53,  30,   0,
        ];
        assert_eq!(mask.data(), &expected);
    }

    #[test]
    fn test_radial_mask_length_eq_scale() {
        let mask = radial_gradient_mask((5, 5), RadialMask::new(0.5, 0.5)).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                let inner = (1..4).contains(&x) && (1..4).contains(&y);
                assert_eq!(mask.get(x, y), Some(if inner { 255 } else { 0 }));
            }
        }
    }

    #[test]
    fn test_radial_mask_degenerate_stops() {
        let full = radial_gradient_mask((3, 4), RadialMask::new(1.0, 1.0)).unwrap();
        assert!(full.data().iter().all(|&v| v == 255));
        let empty = radial_gradient_mask((3, 4), RadialMask::new(0.0, 0.0)).unwrap();
        assert!(empty.data().iter().all(|&v| v == 0));
        assert!(radial_gradient_mask((3, 4), RadialMask::new(f64::NAN, 1.0)).is_err());
    }

    #[test]
    fn test_radial_gradient_two_stops_is_mask() {
        let g = radial_gradient((5, 5), &[Color::rgb(255, 255, 255), Color::rgb(0, 0, 0)], None, (0.5, 0.5))
            .unwrap();
        let mask = radial_gradient_mask((5, 5), RadialMask::CENTER).unwrap();
        for (px, &m) in g.pixels().zip(mask.data()) {
            assert_eq!(px, [m, m, m]);
        }
    }

    #[test]
    fn test_radial_gradient_three_stops() {
        let colors = [Color::rgb(255, 0, 0), Color::rgb(0, 255, 0), Color::rgb(0, 0, 255)];
        let g = radial_gradient((9, 9), &colors, Some(&[0.0, 0.2, 0.6][..]), (0.5, 0.5)).unwrap();
        assert_eq!(g.pixel(4, 4), &[255, 0, 0]);
        assert_eq!(g.pixel(0, 0), &[0, 0, 255]);
    }

    #[test]
    fn test_radial_gradient_alpha_stops() {
        let colors = [Color::rgba(255, 0, 0, 1.0).unwrap(), Color::rgb(0, 0, 0)];
        let g = radial_gradient((4, 4), &colors, None, (0.5, 0.5)).unwrap();
        assert_eq!(g.mode(), PixelMode::Rgba);
        assert_eq!(g.pixel(0, 0)[3], 255);
    }

    #[test]
    fn test_radial_gradient_stop_validation() {
        let one = [Color::rgb(0, 0, 0)];
        assert!(radial_gradient((2, 2), &one, None, (0.5, 0.5)).is_err());
        let two = [Color::rgb(0, 0, 0), Color::rgb(1, 1, 1)];
        assert!(radial_gradient((2, 2), &two, Some(&[0.0][..]), (0.5, 0.5)).is_err());
    }
}
