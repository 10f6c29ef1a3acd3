//! # instafx-presets
//!
//! Named photographic filters in the style of the Instagram / CSSgram
//! presets. Each preset is a fixed pipeline over the compositing engine in
//! [`instafx_ops`]: flat or gradient operands, a blend mode, then a chain of
//! CSS filter effects.
//!
//! # Example
//!
//! ```rust
//! use instafx_core::{Image, PixelMode};
//! use instafx_presets::Preset;
//!
//! let photo = Image::filled(16, 16, PixelMode::Rgb, &[180, 120, 90]).unwrap();
//!
//! let preset: Preset = "nashville".parse().unwrap();
//! let out = preset.apply(&photo).unwrap();
//! assert_eq!(out.dimensions(), photo.dimensions());
//! ```
//!
//! Every preset accepts any [`PixelMode`](instafx_core::PixelMode): the input
//! is converted to RGB first (dropping alpha) and the result is RGB.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod flat;
mod tone;
mod vignette;

use std::fmt;
use std::str::FromStr;

use instafx_core::{Color, Error, Image, PixelMode, Result};
use instafx_ops::FilterEffect;
use instafx_ops::apply_color_matrix;
use tracing::debug;

/// A named filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Preset {
    Nineteen77,
    Aden,
    Amaro,
    Ashby,
    Brannan,
    Brooklyn,
    Charmes,
    Clarendon,
    Crema,
    Dogpatch,
    Earlybird,
    Gingham,
    Ginza,
    Hefe,
    Helena,
    Hudson,
    Inkwell,
    Juno,
    Kelvin,
    Lark,
    Lofi,
    Ludwig,
    Maven,
    Mayfair,
    Moon,
    Nashville,
    Perpetua,
    Poprocket,
    Reyes,
    Rise,
    Sierra,
    Skyline,
    Slumber,
    Stinson,
    Sutro,
    Toaster,
    Valencia,
    Walden,
    Willow,
    Xpro2,
}

impl Preset {
    /// All presets, alphabetical by name.
    pub const ALL: [Preset; 40] = [
        Self::Nineteen77,
        Self::Aden,
        Self::Amaro,
        Self::Ashby,
        Self::Brannan,
        Self::Brooklyn,
        Self::Charmes,
        Self::Clarendon,
        Self::Crema,
        Self::Dogpatch,
        Self::Earlybird,
        Self::Gingham,
        Self::Ginza,
        Self::Hefe,
        Self::Helena,
        Self::Hudson,
        Self::Inkwell,
        Self::Juno,
        Self::Kelvin,
        Self::Lark,
        Self::Lofi,
        Self::Ludwig,
        Self::Maven,
        Self::Mayfair,
        Self::Moon,
        Self::Nashville,
        Self::Perpetua,
        Self::Poprocket,
        Self::Reyes,
        Self::Rise,
        Self::Sierra,
        Self::Skyline,
        Self::Slumber,
        Self::Stinson,
        Self::Sutro,
        Self::Toaster,
        Self::Valencia,
        Self::Walden,
        Self::Willow,
        Self::Xpro2,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nineteen77 => "1977",
            Self::Aden => "aden",
            Self::Amaro => "amaro",
            Self::Ashby => "ashby",
            Self::Brannan => "brannan",
            Self::Brooklyn => "brooklyn",
            Self::Charmes => "charmes",
            Self::Clarendon => "clarendon",
            Self::Crema => "crema",
            Self::Dogpatch => "dogpatch",
            Self::Earlybird => "earlybird",
            Self::Gingham => "gingham",
            Self::Ginza => "ginza",
            Self::Hefe => "hefe",
            Self::Helena => "helena",
            Self::Hudson => "hudson",
            Self::Inkwell => "inkwell",
            Self::Juno => "juno",
            Self::Kelvin => "kelvin",
            Self::Lark => "lark",
            Self::Lofi => "lofi",
            Self::Ludwig => "ludwig",
            Self::Maven => "maven",
            Self::Mayfair => "mayfair",
            Self::Moon => "moon",
            Self::Nashville => "nashville",
            Self::Perpetua => "perpetua",
            Self::Poprocket => "poprocket",
            Self::Reyes => "reyes",
            Self::Rise => "rise",
            Self::Sierra => "sierra",
            Self::Skyline => "skyline",
            Self::Slumber => "slumber",
            Self::Stinson => "stinson",
            Self::Sutro => "sutro",
            Self::Toaster => "toaster",
            Self::Valencia => "valencia",
            Self::Walden => "walden",
            Self::Willow => "willow",
            Self::Xpro2 => "xpro2",
        }
    }

    /// Runs the filter. The result is always RGB and the size of `image`.
    ///
    /// # Errors
    ///
    /// Only if an engine operation fails, which for well-formed images
    /// does not happen.
    pub fn apply(self, image: &Image) -> Result<Image> {
        debug!(
            preset = self.name(),
            width = image.width(),
            height = image.height(),
            mode = %image.mode(),
            "Applying preset"
        );
        let cb = image.convert(PixelMode::Rgb);
        match self {
            Self::Nineteen77 => flat::nineteen77(&cb),
            Self::Aden => vignette::aden(&cb),
            Self::Amaro => flat::amaro(&cb),
            Self::Ashby => flat::ashby(&cb),
            Self::Brannan => flat::brannan(&cb),
            Self::Brooklyn => vignette::brooklyn(&cb),
            Self::Charmes => flat::charmes(&cb),
            Self::Clarendon => flat::clarendon(&cb),
            Self::Crema => flat::crema(&cb),
            Self::Dogpatch => tone::dogpatch(&cb),
            Self::Earlybird => vignette::earlybird(&cb),
            Self::Gingham => flat::gingham(&cb),
            Self::Ginza => flat::ginza(&cb),
            Self::Hefe => vignette::hefe(&cb),
            Self::Helena => flat::helena(&cb),
            Self::Hudson => vignette::hudson(&cb),
            Self::Inkwell => tone::inkwell(&cb),
            Self::Juno => flat::juno(&cb),
            Self::Kelvin => flat::kelvin(&cb),
            Self::Lark => flat::lark(&cb),
            Self::Lofi => vignette::lofi(&cb),
            Self::Ludwig => flat::ludwig(&cb),
            Self::Maven => flat::maven(&cb),
            Self::Mayfair => vignette::mayfair(&cb),
            Self::Moon => flat::moon(&cb),
            Self::Nashville => flat::nashville(&cb),
            Self::Perpetua => vignette::perpetua(&cb),
            Self::Poprocket => vignette::poprocket(&cb),
            Self::Reyes => flat::reyes(&cb),
            Self::Rise => vignette::rise(&cb),
            Self::Sierra => vignette::sierra(&cb),
            Self::Skyline => tone::skyline(&cb),
            Self::Slumber => flat::slumber(&cb),
            Self::Stinson => flat::stinson(&cb),
            Self::Sutro => vignette::sutro(&cb),
            Self::Toaster => vignette::toaster(&cb),
            Self::Valencia => flat::valencia(&cb),
            Self::Walden => flat::walden(&cb),
            Self::Willow => vignette::willow(&cb),
            Self::Xpro2 => vignette::xpro2(&cb),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    /// Case-insensitive; `"_1977"` is accepted for `1977`.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().trim_start_matches('_').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == key)
            .ok_or_else(|| Error::unknown_name("preset", s))
    }
}

/// `(effect, amount)` steps applied in order.
pub(crate) fn effects(image: Image, steps: &[(FilterEffect, f64)]) -> Result<Image> {
    steps
        .iter()
        .try_fold(image, |im, &(effect, amount)| apply_color_matrix(effect, &im, amount))
}

/// Flat fill the size of `like`.
#[inline]
pub(crate) fn fill_like(like: &Image, color: Color) -> Image {
    instafx_ops::fill(like.dimensions(), color)
}

/// Flat fill with alpha the size of `like`.
#[inline]
pub(crate) fn tint_like(like: &Image, r: u8, g: u8, b: u8, alpha: f64) -> Result<Image> {
    Ok(fill_like(like, Color::rgba(r, g, b, alpha)?))
}
