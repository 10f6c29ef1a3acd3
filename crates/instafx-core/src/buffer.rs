//! Band split, merge and alpha extraction.
//!
//! These are the pixel-buffer primitives the compositor is built on:
//!
//! - [`split_alpha`] separates the color bands of an RGB/RGBA image from its
//!   optional alpha band
//! - [`split`] / [`merge`] convert between interleaved images and planar
//!   [`Channel`]s
//! - [`channel_to_rgb`] / [`alpha_to_rgb`] replicate a single band into three
//!   so a mask can be blended as if it were a color image
//!
//! ```rust
//! use instafx_core::{Image, PixelMode, buffer};
//!
//! let img = Image::filled(2, 2, PixelMode::Rgba, &[10, 20, 30, 40]).unwrap();
//! let (rgb, alpha) = buffer::split_alpha(&img).unwrap();
//! assert_eq!(rgb.mode(), PixelMode::Rgb);
//! assert_eq!(alpha.unwrap().get(0, 0), Some(40));
//!
//! let back = buffer::merge(&buffer::split(&img)).unwrap();
//! assert_eq!(back, img);
//! ```

use crate::{Channel, Error, Image, PixelMode, Result};

/// Splits an RGB or RGBA image into its RGB part and optional alpha channel.
///
/// # Errors
///
/// [`Error::UnsupportedMode`] for L and LA images.
pub fn split_alpha(image: &Image) -> Result<(Image, Option<Channel>)> {
    match image.mode() {
        PixelMode::Rgb => Ok((image.clone(), None)),
        PixelMode::Rgba => {
            let rgb = image.convert(PixelMode::Rgb);
            let alpha = band(image, 3);
            Ok((rgb, Some(alpha)))
        }
        mode => Err(Error::unsupported_mode(mode, "split_alpha")),
    }
}

/// One [`Channel`] per band, in band order.
pub fn split(image: &Image) -> Vec<Channel> {
    (0..image.bands()).map(|i| band(image, i)).collect()
}

/// Interleaves 1 to 4 channels into an L, LA, RGB or RGBA image.
///
/// # Errors
///
/// - [`Error::ChannelCount`] for an empty slice or more than four channels
/// - [`Error::ShapeMismatch`] if the channels differ in size
pub fn merge(channels: &[Channel]) -> Result<Image> {
    let mode = PixelMode::from_bands(channels.len()).ok_or(Error::ChannelCount {
        got: channels.len(),
    })?;
    let (width, height) = channels[0].dimensions();
    for ch in &channels[1..] {
        crate::ensure_same_size((width, height), ch.dimensions())?;
    }

    let bands = channels.len();
    let mut data = vec![0u8; width as usize * height as usize * bands];
    for (b, ch) in channels.iter().enumerate() {
        for (px, &v) in data.chunks_exact_mut(bands).zip(ch.data()) {
            px[b] = v;
        }
    }
    Image::from_raw(width, height, mode, data)
}

/// A gray RGB image with `channel` in all three bands.
pub fn channel_to_rgb(channel: &Channel) -> Image {
    let (width, height) = channel.dimensions();
    let data = channel.data().iter().flat_map(|&v| [v, v, v]).collect();
    // length is width * height * 3 by construction
    Image::from_raw(width, height, PixelMode::Rgb, data)
        .unwrap_or_else(|_| Image::new(width, height, PixelMode::Rgb))
}

/// Converts a single-band (L) alpha image into RGB.
///
/// # Errors
///
/// [`Error::UnsupportedMode`] unless the image is L.
pub fn alpha_to_rgb(image: &Image) -> Result<Image> {
    if image.mode() != PixelMode::L {
        return Err(Error::unsupported_mode(image.mode(), "alpha_to_rgb"));
    }
    Ok(image.convert(PixelMode::Rgb))
}

fn band(image: &Image, index: usize) -> Channel {
    let (width, height) = image.dimensions();
    let data = image.pixels().map(|px| px[index]).collect();
    Channel::from_raw(width, height, data).unwrap_or_else(|_| Channel::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(mode: PixelMode) -> Image {
        Image::from_fn(3, 2, mode, |x, y, px| {
            for (i, v) in px.iter_mut().enumerate() {
                *v = (x * 40 + y * 7 + i as u32 * 50) as u8;
            }
        })
    }

    #[test]
    fn test_split_alpha_rgb() {
        let img = sample(PixelMode::Rgb);
        let (rgb, alpha) = split_alpha(&img).unwrap();
        assert_eq!(rgb, img);
        assert!(alpha.is_none());
    }

    #[test]
    fn test_split_alpha_rgba() {
        let img = Image::filled(2, 1, PixelMode::Rgba, &[0, 128, 255, 128]).unwrap();
        let (rgb, alpha) = split_alpha(&img).unwrap();
        assert_eq!(rgb.pixel(1, 0), &[0, 128, 255]);
        assert_eq!(alpha.unwrap().data(), &[128, 128]);
    }

    #[test]
    fn test_split_alpha_rejects_gray() {
        let err = split_alpha(&Image::new(1, 1, PixelMode::L)).unwrap_err();
        assert!(err.is_unsupported_mode());
        assert!(split_alpha(&Image::new(1, 1, PixelMode::La)).is_err());
    }

    #[test]
    fn test_merge_split_roundtrip() {
        for mode in [PixelMode::L, PixelMode::La, PixelMode::Rgb, PixelMode::Rgba] {
            let img = sample(mode);
            assert_eq!(merge(&split(&img)).unwrap(), img);
        }
    }

    #[test]
    fn test_merge_errors() {
        assert!(matches!(merge(&[]), Err(Error::ChannelCount { got: 0 })));
        let five = vec![Channel::new(1, 1); 5];
        assert!(matches!(merge(&five), Err(Error::ChannelCount { got: 5 })));
        let mixed = [Channel::new(2, 2), Channel::new(2, 3), Channel::new(2, 2)];
        assert!(merge(&mixed).unwrap_err().is_shape_mismatch());
    }

    #[test]
    fn test_alpha_to_rgb() {
        let mask = Image::filled(2, 2, PixelMode::L, &[77]).unwrap();
        let rgb = alpha_to_rgb(&mask).unwrap();
        assert_eq!(rgb.pixel(1, 1), &[77, 77, 77]);
        assert_eq!(rgb, channel_to_rgb(&split(&mask)[0]));
        assert!(alpha_to_rgb(&rgb).unwrap_err().is_unsupported_mode());
    }
}
