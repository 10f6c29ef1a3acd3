//! Presets built from flat color fills.

use instafx_core::{Color, Image, Result};
use instafx_ops::composite::mix;
use instafx_ops::{BlendMode, FilterEffect::*, blend};

use crate::{effects, fill_like, tint_like};

pub(crate) fn nineteen77(cb: &Image) -> Result<Image> {
    let cs = tint_like(cb, 243, 106, 188, 0.3)?;
    let cr = blend(BlendMode::Screen, cb, &cs)?;
    effects(cr, &[(Contrast, 1.1), (Brightness, 1.1), (Saturate, 1.3)])
}

pub(crate) fn amaro(cb: &Image) -> Result<Image> {
    let cr = blend(BlendMode::Overlay, cb, &tint_like(cb, 125, 105, 24, 0.2)?)?;
    effects(cr, &[(Sepia, 0.35), (Contrast, 1.1), (Brightness, 1.2), (Saturate, 1.3)])
}

pub(crate) fn ashby(cb: &Image) -> Result<Image> {
    let cr = blend(BlendMode::Lighten, cb, &tint_like(cb, 125, 105, 24, 0.35)?)?;
    effects(cr, &[(Sepia, 0.5), (Contrast, 1.2), (Saturate, 1.8)])
}

pub(crate) fn brannan(cb: &Image) -> Result<Image> {
    let cs = tint_like(cb, 161, 44, 199, 0.31)?;
    let cr = blend(BlendMode::Lighten, cb, &cs)?;
    effects(cr, &[(Sepia, 0.5), (Contrast, 1.4)])
}

pub(crate) fn charmes(cb: &Image) -> Result<Image> {
    let cr = blend(BlendMode::Darken, cb, &tint_like(cb, 125, 105, 24, 0.25)?)?;
    effects(
        cr,
        &[(Sepia, 0.25), (Contrast, 1.25), (Brightness, 1.25), (Saturate, 1.35), (HueRotate, -5.0)],
    )
}

pub(crate) fn clarendon(cb: &Image) -> Result<Image> {
    let cs = blend(BlendMode::Overlay, cb, &fill_like(cb, Color::rgb(127, 187, 227)))?;
    let cr = mix(cb, &cs, 0.2)?;
    effects(cr, &[(Contrast, 1.2), (Saturate, 1.35)])
}

pub(crate) fn crema(cb: &Image) -> Result<Image> {
    let cr = blend(BlendMode::Multiply, cb, &tint_like(cb, 125, 105, 24, 0.2)?)?;
    effects(
        cr,
        &[(Sepia, 0.5), (Contrast, 1.25), (Brightness, 1.15), (Saturate, 0.9), (HueRotate, -2.0)],
    )
}

pub(crate) fn gingham(cb: &Image) -> Result<Image> {
    let cr = blend(BlendMode::SoftLight, cb, &fill_like(cb, Color::rgb(230, 230, 250)))?;
    effects(cr, &[(Brightness, 1.05), (HueRotate, -10.0)])
}

pub(crate) fn ginza(cb: &Image) -> Result<Image> {
    let cr = blend(BlendMode::Darken, cb, &tint_like(cb, 125, 105, 24, 0.15)?)?;
    effects(
        cr,
        &[(Sepia, 0.25), (Contrast, 1.15), (Brightness, 1.2), (Saturate, 1.35), (HueRotate, -5.0)],
    )
}

pub(crate) fn helena(cb: &Image) -> Result<Image> {
    let cs = tint_like(cb, 158, 175, 30, 0.25)?;
    let cr = blend(BlendMode::Overlay, cb, &cs)?;
    effects(cr, &[(Sepia, 0.5), (Contrast, 1.05), (Brightness, 1.05), (Saturate, 1.35)])
}

pub(crate) fn juno(cb: &Image) -> Result<Image> {
    let cs = tint_like(cb, 127, 187, 227, 0.2)?;
    let cr = blend(BlendMode::Overlay, cb, &cs)?;
    effects(cr, &[(Sepia, 0.35), (Contrast, 1.15), (Brightness, 1.15), (Saturate, 1.8)])
}

pub(crate) fn kelvin(cb: &Image) -> Result<Image> {
    let cs = blend(BlendMode::ColorDodge, cb, &fill_like(cb, Color::rgb(56, 44, 52)))?;
    blend(BlendMode::Overlay, &cs, &fill_like(cb, Color::rgb(183, 125, 33)))
}

pub(crate) fn lark(cb: &Image) -> Result<Image> {
    let cs = blend(BlendMode::ColorDodge, cb, &fill_like(cb, Color::rgb(34, 37, 63)))?;
    let cs = blend(BlendMode::Darken, &cs, &fill_like(cb, Color::rgb(242, 242, 242)))?;
    mix(cb, &cs, 0.8)
}

pub(crate) fn ludwig(cb: &Image) -> Result<Image> {
    let cs = tint_like(cb, 125, 105, 24, 0.1)?;
    let cr = blend(BlendMode::Overlay, cb, &cs)?;
    effects(cr, &[(Sepia, 0.25), (Contrast, 1.05), (Brightness, 1.05), (Saturate, 2.0)])
}

pub(crate) fn maven(cb: &Image) -> Result<Image> {
    let cs = tint_like(cb, 3, 230, 26, 0.2)?;
    let cr = blend(BlendMode::Hue, cb, &cs)?;
    effects(cr, &[(Sepia, 0.25), (Brightness, 0.95), (Contrast, 0.95), (Saturate, 1.5)])
}

pub(crate) fn moon(cb: &Image) -> Result<Image> {
    let cs = blend(BlendMode::SoftLight, cb, &fill_like(cb, Color::rgb(160, 160, 160)))?;
    let cr = blend(BlendMode::Lighten, &cs, &fill_like(cb, Color::rgb(56, 56, 56)))?;
    effects(cr, &[(Grayscale, 1.0), (Contrast, 1.1), (Brightness, 1.1)])
}

pub(crate) fn nashville(cb: &Image) -> Result<Image> {
    let cm1 = blend(BlendMode::Darken, cb, &fill_like(cb, Color::rgb(247, 176, 153)))?;
    let cm1 = mix(cb, &cm1, 0.56)?;
    let cm2 = blend(BlendMode::Lighten, &cm1, &fill_like(cb, Color::rgb(0, 70, 150)))?;
    let cr = mix(&cm1, &cm2, 0.4)?;
    effects(cr, &[(Sepia, 0.2), (Contrast, 1.2), (Brightness, 1.05), (Saturate, 1.2)])
}

pub(crate) fn reyes(cb: &Image) -> Result<Image> {
    let cs = blend(BlendMode::SoftLight, cb, &fill_like(cb, Color::rgb(239, 205, 173)))?;
    let cr = mix(cb, &cs, 0.5)?;
    effects(cr, &[(Sepia, 0.22), (Brightness, 1.1), (Contrast, 0.85), (Saturate, 0.75)])
}

pub(crate) fn slumber(cb: &Image) -> Result<Image> {
    let cs = blend(BlendMode::Lighten, cb, &fill_like(cb, Color::rgb(69, 41, 12)))?;
    let cs = mix(cb, &cs, 0.4)?;
    let soft = blend(BlendMode::SoftLight, &cs, &fill_like(cb, Color::rgb(125, 105, 24)))?;
    let cr = mix(&cs, &soft, 0.5)?;
    effects(cr, &[(Saturate, 0.66), (Brightness, 1.05)])
}

pub(crate) fn stinson(cb: &Image) -> Result<Image> {
    let cs = blend(BlendMode::SoftLight, cb, &fill_like(cb, Color::rgb(240, 149, 128)))?;
    let cr = mix(cb, &cs, 0.2)?;
    effects(cr, &[(Contrast, 0.75), (Saturate, 0.85), (Brightness, 1.15)])
}

pub(crate) fn valencia(cb: &Image) -> Result<Image> {
    let cs = blend(BlendMode::Exclusion, cb, &fill_like(cb, Color::rgb(58, 3, 57)))?;
    let cr = mix(cb, &cs, 0.5)?;
    effects(cr, &[(Contrast, 1.08), (Brightness, 1.08), (Sepia, 0.08)])
}

pub(crate) fn walden(cb: &Image) -> Result<Image> {
    let cs = blend(BlendMode::Screen, cb, &fill_like(cb, Color::rgb(0, 68, 204)))?;
    let cr = mix(cb, &cs, 0.3)?;
    effects(cr, &[(Brightness, 1.1), (HueRotate, -10.0), (Sepia, 0.3), (Saturate, 1.6)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use instafx_core::PixelMode;

    #[test]
    fn test_kelvin_on_black() {
        // dodge keeps black, overlay onto black backdrop is black
        let black = Image::new(4, 4, PixelMode::Rgb);
        assert!(kelvin(&black).unwrap().data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_moon_is_gray() {
        let im = Image::filled(3, 3, PixelMode::Rgb, &[200, 40, 90]).unwrap();
        for px in moon(&im).unwrap().pixels() {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
    }

    #[test]
    fn test_darken_tints_never_brighten() {
        // before the effect chain, a darken tint can only lower each channel
        let im = Image::from_fn(6, 6, PixelMode::Rgb, |x, y, px| {
            px.copy_from_slice(&[(x * 40) as u8, (y * 40) as u8, 200]);
        });
        let tint = tint_like(&im, 125, 105, 24, 0.25).unwrap();
        let shaded = blend(BlendMode::Darken, &im, &tint).unwrap();
        for (a, b) in shaded.data().iter().zip(im.data()) {
            assert!(a <= b);
        }
        assert_eq!(charmes(&im).unwrap().dimensions(), (6, 6));
    }
}
