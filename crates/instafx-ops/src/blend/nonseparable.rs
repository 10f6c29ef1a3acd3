//! Blend modes that combine all three channels jointly.
//!
//! Built on the `Lum` / `Sat` / `ClipColor` / `SetLum` / `SetSat` primitives
//! of W3C Compositing and Blending Level 1. Colors are `[f64; 3]` in
//! `[0, 1]`; luminance uses the 0.3 / 0.59 / 0.11 weights everywhere.
//!
//! ```rust
//! use instafx_ops::blend::nonseparable::{color, lum};
//!
//! let out = color([0.5, 0.5, 0.5], [0.0, 0.5, 1.0]);
//! assert!((lum(out) - 0.5).abs() < 1e-9);
//! ```

/// Red luminance weight.
pub const LUM_R: f64 = 0.3;
/// Green luminance weight.
pub const LUM_G: f64 = 0.59;
/// Blue luminance weight.
pub const LUM_B: f64 = 0.11;

/// Weighted sum of the channels.
#[inline]
pub fn lum(c: [f64; 3]) -> f64 {
    LUM_R * c[0] + LUM_G * c[1] + LUM_B * c[2]
}

/// `max(C) - min(C)`.
#[inline]
pub fn sat(c: [f64; 3]) -> f64 {
    max3(c) - min3(c)
}

/// Pulls out-of-gamut colors back into `[0, 1]` while keeping their luminance.
///
/// `L`, `min` and `max` are taken from the input. The low clip runs first
/// and the high clip scales its result. A zero denominator skips that clip.
pub fn clip_color(c: [f64; 3]) -> [f64; 3] {
    let l = lum(c);
    let (n, x) = (min3(c), max3(c));
    let mut c = c;

    if n < 0.0 && l - n > 0.0 {
        let k = l / (l - n);
        c = c.map(|v| l + (v - l) * k);
    }

    if x > 1.0 && x - l > 0.0 {
        let k = (1.0 - l) / (x - l);
        c = c.map(|v| l + (v - l) * k);
    }
    c
}

/// Shifts `c` to luminance `l`, then clips.
#[inline]
pub fn set_lum(c: [f64; 3], l: f64) -> [f64; 3] {
    let d = l - lum(c);
    clip_color(c.map(|v| v + d))
}

/// Rescales `c` to saturation `s`.
///
/// Channels equal to the maximum become `s`, channels equal to the minimum
/// become 0, and the middle channel is scaled linearly. A flat color
/// (`max == min`) becomes black.
pub fn set_sat(c: [f64; 3], s: f64) -> [f64; 3] {
    let (min, max) = (min3(c), max3(c));
    if max <= min {
        return [0.0; 3];
    }
    c.map(|v| {
        if v == max {
            s
        } else if v == min {
            0.0
        } else {
            (v - min) * s / (max - min)
        }
    })
}

/// Source hue with backdrop saturation and luminosity.
#[inline]
pub fn hue(cb: [f64; 3], cs: [f64; 3]) -> [f64; 3] {
    set_lum(set_sat(cs, sat(cb)), lum(cb))
}

/// Source saturation with backdrop hue and luminosity.
#[inline]
pub fn saturation(cb: [f64; 3], cs: [f64; 3]) -> [f64; 3] {
    set_lum(set_sat(cb, sat(cs)), lum(cb))
}

/// Source hue and saturation with backdrop luminosity.
#[inline]
pub fn color(cb: [f64; 3], cs: [f64; 3]) -> [f64; 3] {
    set_lum(cs, lum(cb))
}

/// Source luminosity with backdrop hue and saturation.
#[inline]
pub fn luminosity(cb: [f64; 3], cs: [f64; 3]) -> [f64; 3] {
    set_lum(cb, lum(cs))
}

#[inline]
fn min3(c: [f64; 3]) -> f64 {
    c[0].min(c[1]).min(c[2])
}

#[inline]
fn max3(c: [f64; 3]) -> f64 {
    c[0].max(c[1]).max(c[2])
}
