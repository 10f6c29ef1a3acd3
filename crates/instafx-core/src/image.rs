//! Owned 8-bit image buffers.
//!
//! [`Image`] is the operand and result type of every engine operation. It is
//! value-like: operations borrow their inputs and allocate a new image for
//! the result, so no buffer is ever shared mutably between stages.
//!
//! # Memory Layout
//!
//! Pixels are stored **row-major**, top-to-bottom, bands interleaved:
//!
//! ```text
//! RGB:  [R G B R G B ...]  <- row 0
//! RGBA: [R G B A R G B A ...]
//! ```
//!
//! # Usage
//!
//! ```rust
//! use instafx_core::{Image, PixelMode};
//!
//! let img = Image::filled(4, 2, PixelMode::Rgb, &[0, 128, 255]).unwrap();
//! assert_eq!(img.pixel(3, 1), &[0, 128, 255]);
//!
//! let gray = img.convert(PixelMode::L);
//! assert_eq!(gray.pixel(0, 0), &[104]);
//! ```
//!
//! # Per-pixel kernels
//!
//! [`Image::map_pixels`] and [`Image::zip_map_pixels`] run a kernel over
//! every pixel. With the `parallel` feature (default) rows are processed
//! with rayon; results are identical to the sequential path since no
//! kernel reads neighbouring pixels.

use crate::{Error, PixelMode, Result, ensure_same_size};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Owned image with an explicit [`PixelMode`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Image {
    width: u32,
    height: u32,
    mode: PixelMode,
    data: Vec<u8>,
}

impl Image {
    /// Creates an image filled with zeros.
    ///
    /// ```rust
    /// use instafx_core::{Image, PixelMode};
    ///
    /// let img = Image::new(16, 8, PixelMode::Rgba);
    /// assert_eq!(img.data().len(), 16 * 8 * 4);
    /// ```
    pub fn new(width: u32, height: u32, mode: PixelMode) -> Self {
        Self {
            width,
            height,
            mode,
            data: vec![0; pixel_count(width, height) * mode.bands()],
        }
    }

    /// Creates an image where every pixel equals `pixel`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if `pixel.len()` differs from the mode's band count.
    pub fn filled(width: u32, height: u32, mode: PixelMode, pixel: &[u8]) -> Result<Self> {
        if pixel.len() != mode.bands() {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("{} pixel needs {} bands, got {}", mode, mode.bands(), pixel.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            mode,
            data: pixel.repeat(pixel_count(width, height)),
        })
    }

    /// Wraps existing interleaved pixel data.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if `data.len() != width * height * bands`.
    pub fn from_raw(width: u32, height: u32, mode: PixelMode, data: Vec<u8>) -> Result<Self> {
        let expected = pixel_count(width, height) * mode.bands();
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            mode,
            data,
        })
    }

    /// Builds an image by calling `f(x, y, pixel)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mode: PixelMode, mut f: F) -> Self
    where
        F: FnMut(u32, u32, &mut [u8]),
    {
        let mut img = Self::new(width, height, mode);
        let bands = mode.bands();
        for (i, px) in img.data.chunks_exact_mut(bands).enumerate() {
            let x = (i % width as usize) as u32;
            let y = (i / width as usize) as u32;
            f(x, y, px);
        }
        img
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixel mode.
    #[inline]
    pub fn mode(&self) -> PixelMode {
        self.mode
    }

    /// Bands per pixel.
    #[inline]
    pub fn bands(&self) -> usize {
        self.mode.bands()
    }

    /// Raw interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image and returns its samples.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Bands of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let bands = self.bands();
        let idx = (y as usize * self.width as usize + x as usize) * bands;
        &self.data[idx..idx + bands]
    }

    /// Iterator over pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.bands())
    }

    /// Converts to another pixel mode.
    ///
    /// Gray to color replicates the band; color to gray uses the ITU-R 601
    /// weights (299/587/114) with rounding. A missing alpha band becomes 255
    /// and a dropped one is discarded.
    pub fn convert(&self, mode: PixelMode) -> Image {
        if mode == self.mode {
            return self.clone();
        }
        let src_mode = self.mode;
        self.map_pixels(mode, move |src, dst| {
            let (r, g, b, a) = match src_mode {
                PixelMode::L => (src[0], src[0], src[0], 255),
                PixelMode::La => (src[0], src[0], src[0], src[1]),
                PixelMode::Rgb => (src[0], src[1], src[2], 255),
                PixelMode::Rgba => (src[0], src[1], src[2], src[3]),
            };
            match mode {
                PixelMode::L => dst[0] = gray_of(src_mode, src),
                PixelMode::La => {
                    dst[0] = gray_of(src_mode, src);
                    dst[1] = a;
                }
                PixelMode::Rgb => dst.copy_from_slice(&[r, g, b]),
                PixelMode::Rgba => dst.copy_from_slice(&[r, g, b, a]),
            }
        })
    }

    /// Runs `f(src_pixel, dst_pixel)` over every pixel into a new image of `mode`.
    pub fn map_pixels<F>(&self, mode: PixelMode, f: F) -> Image
    where
        F: Fn(&[u8], &mut [u8]) + Send + Sync,
    {
        let mut out = Image::new(self.width, self.height, mode);
        if out.data.is_empty() {
            return out;
        }
        let (ib, ob) = (self.bands(), mode.bands());
        let row_in = self.width as usize * ib;
        let row_out = self.width as usize * ob;

        let kernel = |(dst_row, src_row): (&mut [u8], &[u8])| {
            for (dst, src) in dst_row.chunks_exact_mut(ob).zip(src_row.chunks_exact(ib)) {
                f(src, dst);
            }
        };

        #[cfg(feature = "parallel")]
        out.data
            .par_chunks_exact_mut(row_out)
            .zip(self.data.par_chunks_exact(row_in))
            .for_each(kernel);

        #[cfg(not(feature = "parallel"))]
        out.data
            .chunks_exact_mut(row_out)
            .zip(self.data.chunks_exact(row_in))
            .for_each(kernel);

        out
    }

    /// Runs `f(a_pixel, b_pixel, dst_pixel)` over two same-size images.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the sizes differ.
    pub fn zip_map_pixels<F>(&self, other: &Image, mode: PixelMode, f: F) -> Result<Image>
    where
        F: Fn(&[u8], &[u8], &mut [u8]) + Send + Sync,
    {
        ensure_same_size(self.dimensions(), other.dimensions())?;
        let mut out = Image::new(self.width, self.height, mode);
        if out.data.is_empty() {
            return Ok(out);
        }
        let (ab, bb, ob) = (self.bands(), other.bands(), mode.bands());
        let w = self.width as usize;

        let kernel = |((dst_row, a_row), b_row): ((&mut [u8], &[u8]), &[u8])| {
            for ((dst, a), b) in dst_row
                .chunks_exact_mut(ob)
                .zip(a_row.chunks_exact(ab))
                .zip(b_row.chunks_exact(bb))
            {
                f(a, b, dst);
            }
        };

        #[cfg(feature = "parallel")]
        out.data
            .par_chunks_exact_mut(w * ob)
            .zip(self.data.par_chunks_exact(w * ab))
            .zip(other.data.par_chunks_exact(w * bb))
            .for_each(kernel);

        #[cfg(not(feature = "parallel"))]
        out.data
            .chunks_exact_mut(w * ob)
            .zip(self.data.chunks_exact(w * ab))
            .zip(other.data.chunks_exact(w * bb))
            .for_each(kernel);

        Ok(out)
    }
}

#[inline]
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// ITU-R 601 luma in 16.16 fixed point, rounded.
#[inline]
pub(crate) fn luma601(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

#[inline]
fn gray_of(mode: PixelMode, src: &[u8]) -> u8 {
    match mode {
        PixelMode::L | PixelMode::La => src[0],
        PixelMode::Rgb | PixelMode::Rgba => luma601(src[0], src[1], src[2]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_and_pixel() {
        let img = Image::filled(3, 2, PixelMode::Rgba, &[1, 2, 3, 4]).unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.pixel(2, 1), &[1, 2, 3, 4]);
        assert_eq!(img.pixels().count(), 6);
    }

    #[test]
    fn test_filled_wrong_band_count() {
        let err = Image::filled(2, 2, PixelMode::Rgb, &[1, 2]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_from_raw_length_check() {
        assert!(Image::from_raw(2, 2, PixelMode::L, vec![0; 4]).is_ok());
        assert!(Image::from_raw(2, 2, PixelMode::L, vec![0; 5]).is_err());
    }

    #[test]
    fn test_from_fn_coordinates() {
        let img = Image::from_fn(3, 2, PixelMode::L, |x, y, px| px[0] = (y * 10 + x) as u8);
        assert_eq!(img.data(), &[0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_convert_rgb_to_gray() {
        let img = Image::filled(1, 1, PixelMode::Rgb, &[0, 128, 255]).unwrap();
        // (128 * 587 + 255 * 114) / 1000 = 104.2
        assert_eq!(img.convert(PixelMode::L).pixel(0, 0), &[104]);
    }

    #[test]
    fn test_convert_alpha_handling() {
        let img = Image::filled(1, 1, PixelMode::Rgb, &[10, 20, 30]).unwrap();
        let rgba = img.convert(PixelMode::Rgba);
        assert_eq!(rgba.pixel(0, 0), &[10, 20, 30, 255]);
        assert_eq!(rgba.convert(PixelMode::Rgb), img);

        let la = Image::filled(1, 1, PixelMode::La, &[77, 9]).unwrap();
        assert_eq!(la.convert(PixelMode::Rgba).pixel(0, 0), &[77, 77, 77, 9]);
    }

    #[test]
    fn test_zip_map_shape_mismatch() {
        let a = Image::new(2, 2, PixelMode::Rgb);
        let b = Image::new(2, 3, PixelMode::Rgb);
        let err = a.zip_map_pixels(&b, PixelMode::Rgb, |_, _, _| {}).unwrap_err();
        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn test_empty_image_kernels() {
        let a = Image::new(0, 5, PixelMode::Rgb);
        let out = a.map_pixels(PixelMode::L, |_, d| d[0] = 1);
        assert_eq!(out.dimensions(), (0, 5));
        assert!(out.data().is_empty());
    }
}
