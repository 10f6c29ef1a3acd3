//! CLI command implementations

pub mod adjust;
pub mod apply;
pub mod blend;
pub mod list;

use anyhow::{Context, Result, bail};
use image::{DynamicImage, ExtendedColorType};
use instafx_core::{Image, PixelMode};
use std::path::Path;

/// Load image from path.
///
/// 8-bit gray, gray+alpha, RGB and RGBA map onto the matching
/// [`PixelMode`]; anything else (16-bit, float) is converted to RGBA8.
pub fn load_image(path: &Path) -> Result<Image> {
    let decoded = image::open(path).with_context(|| format!("Failed to load: {}", path.display()))?;
    let (width, height) = (decoded.width(), decoded.height());
    let (mode, data) = match decoded {
        DynamicImage::ImageLuma8(buf) => (PixelMode::L, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => (PixelMode::La, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (PixelMode::Rgb, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (PixelMode::Rgba, buf.into_raw()),
        other => (PixelMode::Rgba, other.into_rgba8().into_raw()),
    };
    Image::from_raw(width, height, mode, data)
        .with_context(|| format!("Invalid pixel data in {}", path.display()))
}

/// Save image to path. The format follows the file extension.
pub fn save_image(path: &Path, image: &Image) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        bail!("Refusing to write empty image to {}", path.display());
    }
    let color = match image.mode() {
        PixelMode::L => ExtendedColorType::L8,
        PixelMode::La => ExtendedColorType::La8,
        PixelMode::Rgb => ExtendedColorType::Rgb8,
        PixelMode::Rgba => ExtendedColorType::Rgba8,
    };
    image::save_buffer(path, image.data(), image.width(), image.height(), color)
        .with_context(|| format!("Failed to save: {}", path.display()))
}
