//! Flat colors used to parameterize fills and gradients.

use crate::{Error, PixelMode, Result};

/// An sRGB 8-bit color with optional normalized alpha.
///
/// Without alpha the color produces RGB pixels; with alpha it produces
/// RGBA pixels whose alpha byte is `round(alpha * 255)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha in `[0, 1]`, if any.
    pub alpha: Option<f64>,
}

impl Color {
    /// Opaque color without an alpha band.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: None }
    }

    /// Color with alpha.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `alpha` is outside `[0, 1]` or not finite.
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(Error::invalid_parameter("alpha", alpha, "must be in [0, 1]"));
        }
        Ok(Self {
            r,
            g,
            b,
            alpha: Some(alpha),
        })
    }

    /// Pixel mode a fill of this color produces.
    #[inline]
    pub fn mode(&self) -> PixelMode {
        if self.alpha.is_some() {
            PixelMode::Rgba
        } else {
            PixelMode::Rgb
        }
    }

    /// Alpha as a byte; 255 when absent.
    #[inline]
    pub fn alpha_u8(&self) -> u8 {
        self.alpha
            .map_or(255, |a| (a * 255.0).round().clamp(0.0, 255.0) as u8)
    }

    /// Color without its alpha.
    #[inline]
    pub fn opaque(&self) -> Self {
        Self::rgb(self.r, self.g, self.b)
    }

    /// Pixel bytes in [`Color::mode`] layout (3 or 4 bytes).
    pub fn to_pixel(&self) -> Vec<u8> {
        match self.alpha {
            Some(_) => vec![self.r, self.g, self.b, self.alpha_u8()],
            None => vec![self.r, self.g, self.b],
        }
    }

    /// Pixel bytes with alpha forced to four bands.
    #[inline]
    pub fn to_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.alpha_u8()]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}
