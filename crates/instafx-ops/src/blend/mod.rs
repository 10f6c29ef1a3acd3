//! Named CSS blend modes.
//!
//! A blend mode maps a backdrop `Cb` and a source `Cs` to a new color. The
//! twelve separable modes apply one formula per channel
//! ([`separable`]); hue, saturation, color and luminosity mix the channels
//! jointly ([`nonseparable`]).
//!
//! - [`blend_rgb`] is the bare blend function over two RGB images
//! - [`blend`] wraps it in [`alpha_blend`](crate::alpha::alpha_blend), so
//!   either operand may carry alpha
//!
//! # Example
//!
//! ```rust
//! use instafx_core::{Image, PixelMode};
//! use instafx_ops::blend::{blend, BlendMode};
//!
//! let backdrop = Image::filled(2, 2, PixelMode::Rgb, &[0, 128, 255]).unwrap();
//! let source = Image::filled(2, 2, PixelMode::Rgb, &[128, 128, 128]).unwrap();
//!
//! let out = blend(BlendMode::ColorBurn, &backdrop, &source).unwrap();
//! assert_eq!(out.pixel(0, 0), &[0, 2, 255]);
//! ```

pub mod nonseparable;
pub mod separable;

use std::fmt;
use std::str::FromStr;

use instafx_core::{Error, Image, PixelMode, Result};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::alpha::alpha_blend;

/// Blend mode, named by its CSS `mix-blend-mode` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Source replaces backdrop.
    #[default]
    Normal,
    /// Darken by multiplication.
    Multiply,
    /// Lighten (inverse multiply).
    Screen,
    /// Hard-light with swapped operands.
    Overlay,
    /// Per-channel minimum.
    Darken,
    /// Per-channel maximum.
    Lighten,
    /// Brighten backdrop toward source.
    ColorDodge,
    /// Darken backdrop toward source.
    ColorBurn,
    /// Multiply or screen by source.
    HardLight,
    /// Soft darken or lighten by source.
    SoftLight,
    /// Absolute difference.
    Difference,
    /// Low-contrast difference.
    Exclusion,
    /// Source hue.
    Hue,
    /// Source saturation.
    Saturation,
    /// Source hue and saturation.
    Color,
    /// Source luminosity.
    Luminosity,
}

impl BlendMode {
    /// All modes in CSS order.
    pub const ALL: [BlendMode; 16] = [
        Self::Normal,
        Self::Multiply,
        Self::Screen,
        Self::Overlay,
        Self::Darken,
        Self::Lighten,
        Self::ColorDodge,
        Self::ColorBurn,
        Self::HardLight,
        Self::SoftLight,
        Self::Difference,
        Self::Exclusion,
        Self::Hue,
        Self::Saturation,
        Self::Color,
        Self::Luminosity,
    ];

    /// CSS keyword.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::ColorDodge => "color-dodge",
            Self::ColorBurn => "color-burn",
            Self::HardLight => "hard-light",
            Self::SoftLight => "soft-light",
            Self::Difference => "difference",
            Self::Exclusion => "exclusion",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Color => "color",
            Self::Luminosity => "luminosity",
        }
    }

    /// Returns `true` if the mode works on each channel independently.
    pub const fn is_separable(self) -> bool {
        !matches!(
            self,
            Self::Hue | Self::Saturation | Self::Color | Self::Luminosity
        )
    }

    /// Blends a single RGB pixel.
    pub fn blend_pixel(self, cb: [u8; 3], cs: [u8; 3]) -> [u8; 3] {
        match self.kernel() {
            Kernel::Separable(f) => [f(cb[0], cs[0]), f(cb[1], cs[1]), f(cb[2], cs[2])],
            Kernel::Nonseparable(f) => f(cb.map(unit), cs.map(unit)).map(quantize),
        }
    }

    fn kernel(self) -> Kernel {
        use separable as s;

        macro_rules! channel {
            ($f:path) => {
                Kernel::Separable(|b, c| quantize($f(unit(b), unit(c))))
            };
        }

        match self {
            Self::Normal => Kernel::Separable(|_, c| c),
            Self::Multiply => channel!(s::multiply),
            Self::Screen => channel!(s::screen),
            Self::Overlay => channel!(s::overlay),
            Self::Darken => Kernel::Separable(|b, c| b.min(c)),
            Self::Lighten => Kernel::Separable(|b, c| b.max(c)),
            Self::ColorDodge => channel!(s::color_dodge),
            Self::ColorBurn => channel!(s::color_burn),
            Self::HardLight => channel!(s::hard_light),
            Self::SoftLight => Kernel::Separable(s::soft_light_u8),
            Self::Difference => Kernel::Separable(|b, c| b.abs_diff(c)),
            Self::Exclusion => channel!(s::exclusion),
            Self::Hue => Kernel::Nonseparable(nonseparable::hue),
            Self::Saturation => Kernel::Nonseparable(nonseparable::saturation),
            Self::Color => Kernel::Nonseparable(nonseparable::color),
            Self::Luminosity => Kernel::Nonseparable(nonseparable::luminosity),
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = Error;

    /// Accepts CSS keywords; `_` and missing hyphens are tolerated
    /// (`"soft_light"`, `"softlight"`).
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|m| m.name().replace('-', "") == key)
            .ok_or_else(|| Error::unknown_name("blend mode", s))
    }
}

/// Per-pixel implementation of a mode.
#[derive(Clone, Copy)]
enum Kernel {
    Separable(fn(u8, u8) -> u8),
    Nonseparable(fn([f64; 3], [f64; 3]) -> [f64; 3]),
}

/// Blends two RGB images with no alpha handling.
///
/// # Errors
///
/// - [`Error::UnsupportedMode`] unless both images are RGB
/// - [`Error::ShapeMismatch`] if their sizes differ
pub fn blend_rgb(mode: BlendMode, backdrop: &Image, source: &Image) -> Result<Image> {
    for image in [backdrop, source] {
        if image.mode() != PixelMode::Rgb {
            return Err(Error::unsupported_mode(image.mode(), "blend_rgb"));
        }
    }
    trace!(mode = %mode, width = backdrop.width(), height = backdrop.height(), "blend::blend_rgb");

    match mode.kernel() {
        Kernel::Separable(f) => backdrop.zip_map_pixels(source, PixelMode::Rgb, move |b, s, d| {
            for i in 0..3 {
                d[i] = f(b[i], s[i]);
            }
        }),
        Kernel::Nonseparable(f) => {
            backdrop.zip_map_pixels(source, PixelMode::Rgb, move |b, s, d| {
                let out = f(
                    [unit(b[0]), unit(b[1]), unit(b[2])],
                    [unit(s[0]), unit(s[1]), unit(s[2])],
                );
                d.copy_from_slice(&out.map(quantize));
            })
        }
    }
}

/// Blends `source` onto `backdrop` with `mode`, honoring either operand's alpha.
///
/// The result is always RGB.
///
/// # Errors
///
/// - [`Error::UnsupportedMode`] unless both images are RGB or RGBA
/// - [`Error::ShapeMismatch`] if their sizes differ
pub fn blend(mode: BlendMode, backdrop: &Image, source: &Image) -> Result<Image> {
    debug!(
        mode = %mode,
        backdrop = %backdrop.mode(),
        source = %source.mode(),
        width = backdrop.width(),
        height = backdrop.height(),
        "Blending"
    );
    alpha_blend(backdrop, source, |b, s| blend_rgb(mode, b, s))
}

/// 8-bit value to `[0, 1]`.
#[inline]
pub(crate) fn unit(v: u8) -> f64 {
    v as f64 / 255.0
}

/// `[0, 1]` back to 8 bits, clamped and rounded.
#[inline]
pub(crate) fn quantize(v: f64) -> u8 {
    (v * 255.0).clamp(0.0, 255.0).round() as u8
}
