//! Presets that shape the image with linear or radial gradients.

use instafx_core::{Color, Image, Result};
use instafx_ops::composite::{composite, mix};
use instafx_ops::gradient::{RadialMask, linear_gradient, linear_gradient_mask, radial_gradient, radial_gradient_mask};
use instafx_ops::{BlendMode, FilterEffect::*, blend};

use crate::{effects, fill_like, tint_like};

const CENTER: (f64, f64) = (0.5, 0.5);

pub(crate) fn aden(cb: &Image) -> Result<Image> {
    let cs = blend(BlendMode::Darken, cb, &fill_like(cb, Color::rgb(66, 10, 14)))?;
    let mask = linear_gradient_mask(cb.dimensions(), 0.8, 1.0, true)?;
    let cr = composite(&cs, cb, &mask)?;
    effects(cr, &[(HueRotate, -20.0), (Contrast, 0.9), (Saturate, 0.85), (Brightness, 1.2)])
}

pub(crate) fn brooklyn(cb: &Image) -> Result<Image> {
    let cm1 = blend(BlendMode::Overlay, cb, &tint_like(cb, 168, 223, 193, 0.4)?)?;
    let cm2 = blend(BlendMode::Overlay, cb, &fill_like(cb, Color::rgb(196, 183, 200)))?;
    let mask = radial_gradient_mask(cb.dimensions(), RadialMask::new(0.7, 1.0))?;
    let cr = composite(&cm1, &cm2, &mask)?;
    effects(cr, &[(Contrast, 0.9), (Brightness, 1.1)])
}

pub(crate) fn earlybird(cb: &Image) -> Result<Image> {
    let stops = [
        Color::rgb(208, 186, 142),
        Color::rgb(54, 3, 9),
        Color::rgb(29, 2, 16),
    ];
    let cs = radial_gradient(cb.dimensions(), &stops, Some(&[0.2, 0.85, 1.0][..]), CENTER)?;
    let cr = blend(BlendMode::Overlay, cb, &cs)?;
    effects(cr, &[(Contrast, 0.9), (Sepia, 0.2)])
}

pub(crate) fn hefe(cb: &Image) -> Result<Image> {
    let stops = [Color::rgba(0, 0, 0, 0.0)?, Color::rgba(0, 0, 0, 0.25)?];
    let cs = radial_gradient(cb.dimensions(), &stops, None, CENTER)?;
    let cr = blend(BlendMode::Multiply, cb, &cs)?;
    effects(
        cr,
        &[(Sepia, 0.4), (Contrast, 1.5), (Brightness, 1.2), (Saturate, 1.4), (HueRotate, -10.0)],
    )
}

pub(crate) fn hudson(cb: &Image) -> Result<Image> {
    let stops = [Color::rgb(166, 177, 255), Color::rgb(52, 33, 52)];
    let cs = radial_gradient(cb.dimensions(), &stops, Some(&[0.5, 1.0][..]), CENTER)?;
    let cs = blend(BlendMode::Multiply, cb, &cs)?;
    let cr = mix(cb, &cs, 0.5)?;
    effects(cr, &[(Brightness, 1.2), (Contrast, 0.9), (Saturate, 1.1)])
}

pub(crate) fn lofi(cb: &Image) -> Result<Image> {
    let cs = blend(BlendMode::Multiply, cb, &fill_like(cb, Color::rgb(34, 34, 34)))?;
    let mask = radial_gradient_mask(cb.dimensions(), RadialMask::new(0.7, 1.5))?;
    let cr = composite(cb, &cs, &mask)?;
    effects(cr, &[(Saturate, 1.1), (Contrast, 1.5)])
}

pub(crate) fn mayfair(cb: &Image) -> Result<Image> {
    let (cx, cy) = (0.4, 0.4);
    let size = cb.dimensions();
    let cm1 = blend(BlendMode::Overlay, cb, &tint_like(cb, 255, 255, 255, 0.8)?)?;
    let cm2 = blend(BlendMode::Overlay, cb, &tint_like(cb, 255, 200, 200, 0.6)?)?;
    let cm3 = blend(BlendMode::Overlay, cb, &fill_like(cb, Color::rgb(17, 17, 17)))?;

    let inner = radial_gradient_mask(size, RadialMask::new(0.0, 0.3).with_center(cx, cy))?;
    let cs = composite(&cm1, &cm2, &inner)?;
    let outer = radial_gradient_mask(size, RadialMask::new(0.3, 0.6).with_center(cx, cy))?;
    let cs = composite(&cs, &cm3, &outer)?;

    let cr = mix(cb, &cs, 0.4)?;
    effects(cr, &[(Contrast, 1.1), (Saturate, 1.1)])
}

pub(crate) fn perpetua(cb: &Image) -> Result<Image> {
    let cs = linear_gradient(cb.dimensions(), Color::rgb(0, 91, 154), Color::rgb(230, 193, 61), false)?;
    let cs = blend(BlendMode::SoftLight, cb, &cs)?;
    mix(cb, &cs, 0.5)
}

pub(crate) fn poprocket(cb: &Image) -> Result<Image> {
    let stops = [Color::rgba(206, 39, 70, 0.75)?, Color::rgb(0, 0, 0)];
    let cs = radial_gradient(cb.dimensions(), &stops, Some(&[0.4, 0.8][..]), CENTER)?;
    let cr = blend(BlendMode::Screen, cb, &cs)?;
    effects(cr, &[(Sepia, 0.15), (Brightness, 1.2)])
}

pub(crate) fn rise(cb: &Image) -> Result<Image> {
    let size = cb.dimensions();
    let cm1 = blend(BlendMode::Multiply, cb, &tint_like(cb, 236, 205, 169, 0.15)?)?;
    let cm2 = blend(BlendMode::Multiply, cb, &tint_like(cb, 50, 30, 7, 0.4)?)?;
    let cm = composite(&cm1, &cm2, &radial_gradient_mask(size, RadialMask::new(0.55, 1.0))?)?;

    let cm3 = blend(BlendMode::Overlay, &cm, &tint_like(cb, 232, 197, 152, 0.8)?)?;
    let glow = composite(&cm3, &cm, &radial_gradient_mask(size, RadialMask::new(0.0, 0.9))?)?;

    let cr = mix(&cm, &glow, 0.6)?;
    effects(cr, &[(Brightness, 1.05), (Sepia, 0.2), (Contrast, 0.9), (Saturate, 0.9)])
}

pub(crate) fn sierra(cb: &Image) -> Result<Image> {
    let stops = [Color::rgba(128, 78, 15, 0.5)?, Color::rgba(0, 0, 0, 0.65)?];
    let cs = radial_gradient(cb.dimensions(), &stops, None, CENTER)?;
    let cr = blend(BlendMode::Screen, cb, &cs)?;
    effects(cr, &[(Sepia, 0.25), (Contrast, 1.5), (Brightness, 0.9), (HueRotate, -15.0)])
}

pub(crate) fn sutro(cb: &Image) -> Result<Image> {
    let stops = [Color::rgba(0, 0, 0, 0.0)?, Color::rgba(0, 0, 0, 0.5)?];
    let cs = radial_gradient(cb.dimensions(), &stops, Some(&[0.5, 0.9][..]), CENTER)?;
    let cr = blend(BlendMode::Darken, cb, &cs)?;
    effects(
        cr,
        &[(Sepia, 0.4), (Contrast, 1.2), (Brightness, 0.9), (Saturate, 1.4), (HueRotate, -10.0)],
    )
}

pub(crate) fn toaster(cb: &Image) -> Result<Image> {
    let stops = [Color::rgb(128, 78, 15), Color::rgb(59, 0, 59)];
    let cs = radial_gradient(cb.dimensions(), &stops, None, CENTER)?;
    let cr = blend(BlendMode::Screen, cb, &cs)?;
    effects(cr, &[(Contrast, 1.5), (Brightness, 0.9)])
}

pub(crate) fn willow(cb: &Image) -> Result<Image> {
    let stops = [Color::rgb(212, 169, 175), Color::rgb(0, 0, 0)];
    let cs = radial_gradient(cb.dimensions(), &stops, Some(&[0.55, 1.5][..]), CENTER)?;
    let cm = blend(BlendMode::Overlay, cb, &cs)?;
    let cr = blend(BlendMode::Color, &cm, &fill_like(cb, Color::rgb(216, 205, 203)))?;
    effects(cr, &[(Grayscale, 0.5), (Contrast, 0.95), (Brightness, 0.9)])
}

pub(crate) fn xpro2(cb: &Image) -> Result<Image> {
    let mask = radial_gradient_mask(cb.dimensions(), RadialMask::new(0.4, 1.1))?;
    let cs1 = fill_like(cb, Color::rgb(230, 231, 224));
    let cs2 = mix(cb, &fill_like(cb, Color::rgb(43, 42, 161)), 0.6)?;
    let cs = composite(&cs1, &cs2, &mask)?;

    let cm1 = blend(BlendMode::ColorBurn, cb, &cs)?;
    let cm2 = mix(cb, &cm1, 0.6)?;
    let cr = composite(&cm1, &cm2, &mask)?;
    effects(cr, &[(Sepia, 0.3)])
}
