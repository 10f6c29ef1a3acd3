//! CSS filter effects as 3x4 color matrices.
//!
//! Every effect maps `(R, G, B, 1)` to `(R, G, B)` on the 0..255 scale:
//!
//! ```text
//! out[c] = M[c][0]*R + M[c][1]*G + M[c][2]*B + M[c][3]
//! ```
//!
//! computed in `f64`, clamped to `[0, 255]` and rounded half away from zero.
//! The coefficients follow the feColorMatrix definitions of the
//! W3C Filter Effects module (luminance weights 0.213 / 0.715 / 0.072).
//!
//! # Supported effects
//!
//! | Effect       | Identity at | Notes                               |
//! |--------------|-------------|-------------------------------------|
//! | `brightness` | 1           | 0 yields black                      |
//! | `contrast`   | 1           | 0 yields (128, 128, 128)            |
//! | `saturate`   | 1           | 0 is full grayscale, > 1 boosts     |
//! | `grayscale`  | 0           | clamped to 1                        |
//! | `sepia`      | 0           | clamped to 1                        |
//! | `hue-rotate` | 0 (mod 360) | degrees, any finite value           |
//!
//! # Alpha and gray inputs
//!
//! RGBA alpha passes through byte-for-byte. L and LA images are expanded
//! to color, transformed, and reduced back to their original mode.
//!
//! # Example
//!
//! ```rust
//! use instafx_core::{Image, PixelMode};
//! use instafx_ops::color_matrix::{apply_color_matrix, FilterEffect};
//!
//! let img = Image::filled(2, 2, PixelMode::Rgb, &[10, 200, 30]).unwrap();
//! let flat = apply_color_matrix(FilterEffect::Contrast, &img, 0.0).unwrap();
//! assert_eq!(flat.pixel(0, 0), &[128, 128, 128]);
//! ```

use std::fmt;
use std::str::FromStr;

use instafx_core::{Error, Image, PixelMode, Result};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Row-major 3x4 affine color transform, constant column on the 0..255 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub [[f64; 4]; 3]);

impl ColorMatrix {
    /// Matrix that leaves every pixel unchanged.
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
    ]);

    /// Transforms one RGB triple.
    #[inline]
    pub fn apply(&self, rgb: [u8; 3]) -> [u8; 3] {
        let [r, g, b] = rgb.map(f64::from);
        self.0
            .map(|row| to_u8(row[0] * r + row[1] * g + row[2] * b + row[3]))
    }

    /// Matrix for `effect` at `amount`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when `amount` is not finite, or negative
    /// for any effect other than hue-rotate.
    pub fn for_effect(effect: FilterEffect, amount: f64) -> Result<Self> {
        effect.validate(amount)?;
        Ok(match effect {
            FilterEffect::Brightness => scale_matrix(amount, 0.0),
            FilterEffect::Contrast => scale_matrix(amount, 0.5 * (1.0 - amount) * 255.0),
            FilterEffect::Saturate => saturate_matrix(amount),
            FilterEffect::Grayscale => saturate_matrix(1.0 - amount.min(1.0)),
            FilterEffect::Sepia => sepia_matrix(1.0 - amount.min(1.0)),
            FilterEffect::HueRotate => hue_rotate_matrix(amount),
        })
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Named CSS filter effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterEffect {
    /// Linear scale of every channel.
    Brightness,
    /// Scale around mid-gray.
    Contrast,
    /// Luminance-preserving saturation.
    Saturate,
    /// Desaturation toward luminance.
    Grayscale,
    /// Sepia toning.
    Sepia,
    /// Rotation in the hue plane, in degrees.
    HueRotate,
}

impl FilterEffect {
    /// All effects, in CSS documentation order.
    pub const ALL: [FilterEffect; 6] = [
        Self::Brightness,
        Self::Contrast,
        Self::Saturate,
        Self::Grayscale,
        Self::Sepia,
        Self::HueRotate,
    ];

    /// CSS keyword.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Saturate => "saturate",
            Self::Grayscale => "grayscale",
            Self::Sepia => "sepia",
            Self::HueRotate => "hue-rotate",
        }
    }

    /// Whether `amount` produces the identity transform for this effect.
    pub fn is_identity(self, amount: f64) -> bool {
        match self {
            Self::Brightness | Self::Contrast | Self::Saturate => amount == 1.0,
            Self::Grayscale | Self::Sepia => amount == 0.0,
            Self::HueRotate => amount % 360.0 == 0.0,
        }
    }

    fn validate(self, amount: f64) -> Result<()> {
        match self {
            Self::HueRotate if !amount.is_finite() => {
                Err(Error::invalid_parameter("degrees", amount, "must be finite"))
            }
            Self::HueRotate => Ok(()),
            _ => instafx_core::ensure_non_negative("amount", amount),
        }
    }
}

impl fmt::Display for FilterEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterEffect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|e| e.name() == key || (key == "huerotate" && *e == Self::HueRotate))
            .ok_or_else(|| Error::unknown_name("filter effect", s))
    }
}

/// Applies `effect` with its scalar parameter (`amount`, or degrees for hue-rotate).
///
/// # Errors
///
/// [`Error::InvalidParameter`] for negative or non-finite parameters.
pub fn apply_color_matrix(effect: FilterEffect, image: &Image, amount: f64) -> Result<Image> {
    trace!(effect = %effect, amount, "color_matrix::apply_color_matrix");
    let matrix = ColorMatrix::for_effect(effect, amount)?;
    if effect.is_identity(amount) {
        return Ok(image.clone());
    }
    debug!(
        width = image.width(),
        height = image.height(),
        mode = %image.mode(),
        effect = %effect,
        amount,
        "Applying color matrix"
    );
    Ok(apply_matrix(image, &matrix))
}

/// Applies an arbitrary matrix, preserving the image's mode and alpha.
pub fn apply_matrix(image: &Image, matrix: &ColorMatrix) -> Image {
    match image.mode() {
        PixelMode::Rgb | PixelMode::Rgba => {
            let has_alpha = image.mode().has_alpha();
            image.map_pixels(image.mode(), |src, dst| {
                let out = matrix.apply([src[0], src[1], src[2]]);
                dst[..3].copy_from_slice(&out);
                if has_alpha {
                    dst[3] = src[3];
                }
            })
        }
        PixelMode::L => apply_matrix(&image.convert(PixelMode::Rgb), matrix).convert(PixelMode::L),
        PixelMode::La => {
            apply_matrix(&image.convert(PixelMode::Rgba), matrix).convert(PixelMode::La)
        }
    }
}

/// `out = in * amount`.
pub fn brightness(image: &Image, amount: f64) -> Result<Image> {
    apply_color_matrix(FilterEffect::Brightness, image, amount)
}

/// `out = amount * in + 0.5 * (1 - amount) * 255`.
pub fn contrast(image: &Image, amount: f64) -> Result<Image> {
    apply_color_matrix(FilterEffect::Contrast, image, amount)
}

/// Saturation; 0 is grayscale, 1 identity.
pub fn saturate(image: &Image, amount: f64) -> Result<Image> {
    apply_color_matrix(FilterEffect::Saturate, image, amount)
}

/// Grayscale; 1 fully desaturates.
pub fn grayscale(image: &Image, amount: f64) -> Result<Image> {
    apply_color_matrix(FilterEffect::Grayscale, image, amount)
}

/// Sepia toning; 1 is full sepia.
pub fn sepia(image: &Image, amount: f64) -> Result<Image> {
    apply_color_matrix(FilterEffect::Sepia, image, amount)
}

/// Hue rotation by `degrees`.
pub fn hue_rotate(image: &Image, degrees: f64) -> Result<Image> {
    apply_color_matrix(FilterEffect::HueRotate, image, degrees)
}

#[inline]
fn to_u8(v: f64) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}

fn scale_matrix(k: f64, offset: f64) -> ColorMatrix {
    ColorMatrix([
        [k, 0.0, 0.0, offset],
        [0.0, k, 0.0, offset],
        [0.0, 0.0, k, offset],
    ])
}

fn saturate_matrix(s: f64) -> ColorMatrix {
    ColorMatrix([
        [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s, 0.0],
        [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s, 0.0],
        [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s, 0.0],
    ])
}

/// Sepia tone mixed with identity by `a` (1 = identity).
fn sepia_matrix(a: f64) -> ColorMatrix {
    ColorMatrix([
        [0.393 + 0.607 * a, 0.769 - 0.769 * a, 0.189 - 0.189 * a, 0.0],
        [0.349 - 0.349 * a, 0.686 + 0.314 * a, 0.168 - 0.168 * a, 0.0],
        [0.272 - 0.272 * a, 0.534 - 0.534 * a, 0.131 + 0.869 * a, 0.0],
    ])
}

fn hue_rotate_matrix(degrees: f64) -> ColorMatrix {
    let (s, c) = degrees.to_radians().sin_cos();
    ColorMatrix([
        [
            0.213 + c * 0.787 - s * 0.213,
            0.715 - c * 0.715 - s * 0.715,
            0.072 - c * 0.072 + s * 0.928,
            0.0,
        ],
        [
            0.213 - c * 0.213 + s * 0.143,
            0.715 + c * 0.285 + s * 0.140,
            0.072 - c * 0.072 - s * 0.283,
            0.0,
        ],
        [
            0.213 - c * 0.213 - s * 0.787,
            0.715 - c * 0.715 + s * 0.715,
            0.072 + c * 0.928 + s * 0.072,
            0.0,
        ],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn gradient(mode: PixelMode) -> Image {
        Image::from_fn(16, 4, mode, |x, y, px| {
            let n = px.len();
            for (i, v) in px.iter_mut().enumerate() {
                *v = ((x * 17 + y * 61 + i as u32 * 89) % 256) as u8;
            }
            if mode.has_alpha() {
                px[n - 1] = (x * 16) as u8;
            }
        })
    }

    #[test]
    fn test_identity_laws() {
        let im = gradient(PixelMode::Rgb);
        assert_eq!(brightness(&im, 1.0).unwrap(), im);
        assert_eq!(contrast(&im, 1.0).unwrap(), im);
        assert_eq!(saturate(&im, 1.0).unwrap(), im);
        assert_eq!(sepia(&im, 0.0).unwrap(), im);
        assert_eq!(grayscale(&im, 0.0).unwrap(), im);
        assert_eq!(hue_rotate(&im, 0.0).unwrap(), im);
        assert_eq!(hue_rotate(&im, 360.0).unwrap(), im);
    }

    #[test]
    fn test_identity_matrices_without_shortcut() {
        // the same laws hold through the arithmetic path
        let im = gradient(PixelMode::Rgb);
        for (effect, amount) in [
            (FilterEffect::Saturate, 1.0),
            (FilterEffect::Sepia, 0.0),
            (FilterEffect::HueRotate, 360.0),
            (FilterEffect::HueRotate, -720.0),
        ] {
            let m = ColorMatrix::for_effect(effect, amount).unwrap();
            assert_eq!(apply_matrix(&im, &m), im, "{effect} {amount}");
        }
    }

    #[test]
    fn test_extremes() {
        let im = gradient(PixelMode::Rgb);
        let black = brightness(&im, 0.0).unwrap();
        assert!(black.data().iter().all(|&v| v == 0));
        assert_eq!(black.dimensions(), im.dimensions());

        let gray = contrast(&im, 0.0).unwrap();
        assert!(gray.pixels().all(|px| px == [128, 128, 128]));

        assert_eq!(saturate(&im, 0.0).unwrap(), grayscale(&im, 1.0).unwrap());
    }

    #[test]
    fn test_brightness_rounds() {
        let im = Image::filled(1, 1, PixelMode::Rgb, &[3, 100, 200]).unwrap();
        assert_eq!(brightness(&im, 0.5).unwrap().pixel(0, 0), &[2, 50, 100]);
        assert_eq!(brightness(&im, 2.0).unwrap().pixel(0, 0), &[6, 200, 255]);
    }

    #[test]
    fn test_contrast_half() {
        let im = Image::filled(1, 1, PixelMode::Rgb, &[0, 128, 255]).unwrap();
        // 0.5 * in + 63.75
        assert_eq!(contrast(&im, 0.5).unwrap().pixel(0, 0), &[64, 128, 191]);
    }

    #[test]
    fn test_grayscale_clamps_amount() {
        let im = gradient(PixelMode::Rgb);
        assert_eq!(grayscale(&im, 3.0).unwrap(), grayscale(&im, 1.0).unwrap());
        assert_eq!(sepia(&im, 2.0).unwrap(), sepia(&im, 1.0).unwrap());
    }

    #[test]
    fn test_full_grayscale_is_gray() {
        let im = gradient(PixelMode::Rgb);
        for px in grayscale(&im, 1.0).unwrap().pixels() {
            assert!(px[0].abs_diff(px[1]) <= 1 && px[1].abs_diff(px[2]) <= 1);
        }
    }

    #[test]
    fn test_sepia_white() {
        let im = Image::filled(1, 1, PixelMode::Rgb, &[255, 255, 255]).unwrap();
        // row sums 1.351, 1.203, 0.937
        assert_eq!(sepia(&im, 1.0).unwrap().pixel(0, 0), &[255, 255, 239]);
    }

    #[test]
    fn test_hue_rotate_keeps_gray() {
        let im = Image::filled(2, 2, PixelMode::Rgb, &[90, 90, 90]).unwrap();
        let out = hue_rotate(&im, 137.0).unwrap();
        assert_eq!(out, im);
    }

    #[test]
    fn test_hue_rotate_rows_sum_to_one() {
        let m = ColorMatrix::for_effect(FilterEffect::HueRotate, 73.0).unwrap();
        for row in m.0 {
            assert_abs_diff_eq!(row[0] + row[1] + row[2], 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_alpha_preserved() {
        let im = gradient(PixelMode::Rgba);
        let out = sepia(&im, 0.7).unwrap();
        assert_eq!(out.mode(), PixelMode::Rgba);
        for (a, b) in im.pixels().zip(out.pixels()) {
            assert_eq!(a[3], b[3]);
        }
    }

    #[test]
    fn test_gray_modes_roundtrip_mode() {
        let l = gradient(PixelMode::L);
        assert_eq!(brightness(&l, 0.5).unwrap().mode(), PixelMode::L);
        let la = gradient(PixelMode::La);
        let out = contrast(&la, 0.5).unwrap();
        assert_eq!(out.mode(), PixelMode::La);
        for (a, b) in la.pixels().zip(out.pixels()) {
            assert_eq!(a[1], b[1]);
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let im = gradient(PixelMode::Rgb);
        for effect in [
            FilterEffect::Brightness,
            FilterEffect::Contrast,
            FilterEffect::Saturate,
            FilterEffect::Grayscale,
            FilterEffect::Sepia,
        ] {
            let err = apply_color_matrix(effect, &im, -0.5).unwrap_err();
            assert!(err.is_invalid_parameter(), "{effect}");
        }
        assert!(hue_rotate(&im, -90.0).is_ok());
        assert!(hue_rotate(&im, f64::NAN).unwrap_err().is_invalid_parameter());
        assert!(brightness(&im, f64::INFINITY).is_err());
    }

    #[test]
    fn test_effect_names() {
        for effect in FilterEffect::ALL {
            assert_eq!(effect.to_string().parse::<FilterEffect>().unwrap(), effect);
        }
        assert_eq!("hue_rotate".parse::<FilterEffect>().unwrap(), FilterEffect::HueRotate);
        assert!("blur".parse::<FilterEffect>().is_err());
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        let im = Image::filled(1, 1, PixelMode::Rgb, &[5, 7, 255]).unwrap();
        assert_eq!(brightness(&im, 0.5).unwrap().pixel(0, 0), &[3, 4, 128]);
    }
}
