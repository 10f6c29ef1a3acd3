//! Per-channel blend formulas.
//!
//! Each function takes the backdrop `cb` and source `cs` channel values
//! normalized to `[0, 1]` and returns the blended value in `[0, 1]`. The
//! same formula is applied independently to R, G and B.
//!
//! Color-dodge and color-burn special-case the boundary values exactly
//! instead of using an epsilon, so 0 and 255 inputs map to 0 and 255
//! outputs.

use std::sync::OnceLock;

/// `Cs`.
#[inline]
pub fn normal(_cb: f64, cs: f64) -> f64 {
    cs
}

/// `Cb * Cs`.
#[inline]
pub fn multiply(cb: f64, cs: f64) -> f64 {
    cb * cs
}

/// `Cb + Cs - Cb * Cs`.
#[inline]
pub fn screen(cb: f64, cs: f64) -> f64 {
    cb + cs - cb * cs
}

/// Hard-light with the operands swapped.
#[inline]
pub fn overlay(cb: f64, cs: f64) -> f64 {
    hard_light(cs, cb)
}

/// `min(Cb, Cs)`.
#[inline]
pub fn darken(cb: f64, cs: f64) -> f64 {
    cb.min(cs)
}

/// `max(Cb, Cs)`.
#[inline]
pub fn lighten(cb: f64, cs: f64) -> f64 {
    cb.max(cs)
}

/// Brightens the backdrop to reflect the source.
#[inline]
pub fn color_dodge(cb: f64, cs: f64) -> f64 {
    if cb == 0.0 {
        0.0
    } else if cs == 1.0 {
        1.0
    } else {
        (cb / (1.0 - cs)).min(1.0)
    }
}

/// Darkens the backdrop to reflect the source.
#[inline]
pub fn color_burn(cb: f64, cs: f64) -> f64 {
    if cb == 1.0 {
        1.0
    } else if cs == 0.0 {
        0.0
    } else {
        1.0 - ((1.0 - cb) / cs).min(1.0)
    }
}

/// Multiply or screen depending on the source.
#[inline]
pub fn hard_light(cb: f64, cs: f64) -> f64 {
    if cs <= 0.5 {
        multiply(cb, 2.0 * cs)
    } else {
        screen(cb, 2.0 * cs - 1.0)
    }
}

/// Darkens or lightens depending on the source.
#[inline]
pub fn soft_light(cb: f64, cs: f64) -> f64 {
    soft_light_with(cb, cs, soft_light_d(cb))
}

/// `|Cb - Cs|`.
#[inline]
pub fn difference(cb: f64, cs: f64) -> f64 {
    (cb - cs).abs()
}

/// `Cb + Cs - 2 * Cb * Cs`.
#[inline]
pub fn exclusion(cb: f64, cs: f64) -> f64 {
    cb + cs - 2.0 * cb * cs
}

/// The soft-light `D(x)` curve.
#[inline]
pub fn soft_light_d(x: f64) -> f64 {
    if x <= 0.25 {
        ((16.0 * x - 12.0) * x + 4.0) * x
    } else {
        x.sqrt()
    }
}

/// `D(x)` for every 8-bit backdrop value, built once per process.
pub fn soft_light_table() -> &'static [f64; 256] {
    static TABLE: OnceLock<[f64; 256]> = OnceLock::new();
    TABLE.get_or_init(|| std::array::from_fn(|i| soft_light_d(i as f64 / 255.0)))
}

/// Soft-light on 8-bit values, reading `D(Cb)` from [`soft_light_table`].
#[inline]
pub(crate) fn soft_light_u8(cb: u8, cs: u8) -> u8 {
    let d = soft_light_table()[cb as usize];
    super::quantize(soft_light_with(super::unit(cb), super::unit(cs), d))
}

#[inline]
fn soft_light_with(cb: f64, cs: f64, d: f64) -> f64 {
    if cs <= 0.5 {
        cb - (1.0 - 2.0 * cs) * cb * (1.0 - cb)
    } else {
        cb + (2.0 * cs - 1.0) * (d - cb)
    }
}
