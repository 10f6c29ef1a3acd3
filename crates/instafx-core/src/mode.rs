//! Pixel modes (band layouts) of an [`Image`](crate::Image).

use std::fmt;

/// Band layout of an image. Every band is an 8-bit sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelMode {
    /// Single band (luminance or mask).
    L,
    /// Luminance plus alpha.
    La,
    /// Red, green, blue.
    #[default]
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl PixelMode {
    /// Number of bands per pixel.
    #[inline]
    pub const fn bands(self) -> usize {
        match self {
            Self::L => 1,
            Self::La => 2,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Returns `true` if the last band is alpha.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::La | Self::Rgba)
    }

    /// Returns `true` for the color modes the compositing engine operates on.
    #[inline]
    pub const fn is_color(self) -> bool {
        matches!(self, Self::Rgb | Self::Rgba)
    }

    /// Mode for a given band count, if one exists.
    pub const fn from_bands(bands: usize) -> Option<Self> {
        match bands {
            1 => Some(Self::L),
            2 => Some(Self::La),
            3 => Some(Self::Rgb),
            4 => Some(Self::Rgba),
            _ => None,
        }
    }

    /// The same layout without its alpha band.
    #[inline]
    pub const fn without_alpha(self) -> Self {
        match self {
            Self::L | Self::La => Self::L,
            Self::Rgb | Self::Rgba => Self::Rgb,
        }
    }
}

impl fmt::Display for PixelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::L => "L",
            Self::La => "LA",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
        };
        f.write_str(name)
    }
}
