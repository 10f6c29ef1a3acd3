//! Integration tests for instafx crates.
//!
//! End-to-end checks across `instafx-core`, `instafx-ops` and
//! `instafx-presets`, plus PNG round trips through the `image` crate the
//! way the CLI loads and saves files.

#[cfg(test)]
mod tests {
    use instafx_core::buffer::{merge, split, split_alpha};
    use instafx_core::{Color, Image, PixelMode};
    use instafx_ops::color_matrix::{brightness, contrast, grayscale, hue_rotate, saturate, sepia};
    use instafx_ops::composite::composite;
    use instafx_ops::gradient::{RadialMask, radial_gradient_mask};
    use instafx_ops::{BlendMode, alpha_blend, blend, blend_rgb, fill};
    use instafx_presets::Preset;
    use tempfile::tempdir;

    /// Deterministic test card with some variety in every band.
    fn card(width: u32, height: u32, mode: PixelMode) -> Image {
        Image::from_fn(width, height, mode, |x, y, px| {
            for (i, v) in px.iter_mut().enumerate() {
                *v = ((x * 37 + y * 23 + i as u32 * 89 + x * y) % 256) as u8;
            }
        })
    }

    fn with_alpha(image: &Image, alpha: u8) -> Image {
        let rgb = image.convert(PixelMode::Rgb);
        let mut channels = split(&rgb);
        channels.push(instafx_core::Channel::filled(image.width(), image.height(), alpha));
        merge(&channels).unwrap()
    }

    #[test]
    fn test_identity_laws() {
        let im = card(17, 11, PixelMode::Rgb);
        assert_eq!(brightness(&im, 1.0).unwrap(), im);
        assert_eq!(contrast(&im, 1.0).unwrap(), im);
        assert_eq!(saturate(&im, 1.0).unwrap(), im);
        assert_eq!(sepia(&im, 0.0).unwrap(), im);
        assert_eq!(grayscale(&im, 0.0).unwrap(), im);
        assert_eq!(hue_rotate(&im, 0.0).unwrap(), im);
        assert_eq!(hue_rotate(&im, 360.0).unwrap(), im);
    }

    #[test]
    fn test_effect_extremes() {
        let im = card(9, 7, PixelMode::Rgb);
        assert_eq!(brightness(&im, 0.0).unwrap(), Image::new(9, 7, PixelMode::Rgb));
        assert_eq!(
            contrast(&im, 0.0).unwrap(),
            Image::filled(9, 7, PixelMode::Rgb, &[128, 128, 128]).unwrap()
        );
        assert_eq!(saturate(&im, 0.0).unwrap(), grayscale(&im, 1.0).unwrap());
    }

    #[test]
    fn test_effects_keep_alpha() {
        let im = with_alpha(&card(5, 5, PixelMode::Rgb), 77);
        let out = sepia(&im, 0.8).unwrap();
        assert_eq!(out.mode(), PixelMode::Rgba);
        assert!(out.pixels().all(|px| px[3] == 77));
    }

    #[test]
    fn test_blend_alpha_pass_through() {
        let backdrop = card(8, 6, PixelMode::Rgb);
        let source = card(6, 8, PixelMode::Rgb);
        let source = Image::from_raw(8, 6, PixelMode::Rgb, source.into_raw()).unwrap();

        for mode in BlendMode::ALL {
            let hidden = with_alpha(&source, 0);
            assert_eq!(blend(mode, &backdrop, &hidden).unwrap(), backdrop, "{mode}");

            let absent = with_alpha(&backdrop, 0);
            assert_eq!(blend(mode, &absent, &source).unwrap(), source, "{mode}");
        }
    }

    #[test]
    fn test_normal_selects_source() {
        let backdrop = card(10, 4, PixelMode::Rgb);
        let source = Image::filled(10, 4, PixelMode::Rgb, &[3, 141, 59]).unwrap();
        assert_eq!(blend(BlendMode::Normal, &backdrop, &source).unwrap(), source);
    }

    #[test]
    fn test_overlay_hard_light_duality() {
        let a = card(12, 12, PixelMode::Rgb);
        let b = Image::from_fn(12, 12, PixelMode::Rgb, |x, y, px| {
            px.copy_from_slice(&[(x * 21) as u8, (y * 19) as u8, ((x + y) * 10) as u8]);
        });
        assert_eq!(
            blend(BlendMode::Overlay, &a, &b).unwrap(),
            blend(BlendMode::HardLight, &b, &a).unwrap()
        );
    }

    #[test]
    fn test_dodge_and_burn_boundaries() {
        for v in [0u8, 1, 64, 128, 200, 254, 255] {
            assert_eq!(BlendMode::ColorDodge.blend_pixel([0; 3], [v; 3]), [0; 3]);
            assert_eq!(BlendMode::ColorBurn.blend_pixel([255; 3], [v; 3]), [255; 3]);
            if v < 255 {
                assert_eq!(BlendMode::ColorBurn.blend_pixel([v; 3], [0; 3]), [0; 3]);
            }
            if v > 0 {
                assert_eq!(BlendMode::ColorDodge.blend_pixel([v; 3], [255; 3]), [255; 3]);
            }
        }
    }

    #[test]
    fn test_color_burn_fixture() {
        let backdrop = Image::filled(2, 2, PixelMode::Rgb, &[0, 128, 255]).unwrap();
        let source = Image::from_raw(
            2,
            2,
            PixelMode::Rgb,
            vec![0, 0, 0, 127, 127, 127, 128, 128, 128, 255, 255, 255],
        )
        .unwrap();
        let out = blend_rgb(BlendMode::ColorBurn, &backdrop, &source).unwrap();
        let expected: [[u8; 3]; 4] = [[0, 0, 255], [0, 0, 255], [0, 2, 255], [0, 128, 255]];
        for (px, want) in out.pixels().zip(expected) {
            for (got, want) in px.iter().zip(want) {
                assert!(got.abs_diff(want) <= 1, "{px:?} vs {want:?}");
            }
        }
    }

    #[test]
    fn test_split_merge_roundtrip() {
        for mode in [PixelMode::Rgb, PixelMode::Rgba] {
            let im = card(13, 5, mode);
            assert_eq!(merge(&split(&im)).unwrap(), im);
        }
    }

    #[test]
    fn test_alpha_blend_with_custom_function() {
        // any RGB function slots into the compositor
        let backdrop = with_alpha(&card(4, 4, PixelMode::Rgb), 255);
        let source = card(4, 4, PixelMode::Rgb);
        let out = alpha_blend(&backdrop, &source, |b, _| Ok(b.clone())).unwrap();
        assert_eq!(out, split_alpha(&backdrop).unwrap().0);
    }

    #[test]
    fn test_vignette_pipeline() {
        // darken the corners through a radial mask, as the vignette presets do
        let im = Image::filled(15, 15, PixelMode::Rgb, &[200, 180, 160]).unwrap();
        let shade = blend(BlendMode::Multiply, &im, &fill((15, 15), Color::rgb(40, 40, 40))).unwrap();
        let mask = radial_gradient_mask((15, 15), RadialMask::new(0.3, 1.0)).unwrap();
        let out = composite(&im, &shade, &mask).unwrap();
        assert_eq!(out.pixel(7, 7), im.pixel(7, 7));
        assert_eq!(out.pixel(0, 0), shade.pixel(0, 0));
    }

    #[test]
    fn test_preset_png_roundtrip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.png");

        let im = card(32, 24, PixelMode::Rgba);
        image::save_buffer(&input, im.data(), 32, 24, image::ExtendedColorType::Rgba8).unwrap();

        let loaded = image::open(&input).unwrap().into_rgba8();
        let loaded = Image::from_raw(32, 24, PixelMode::Rgba, loaded.into_raw()).unwrap();
        assert_eq!(loaded, im);

        let filtered = Preset::Clarendon.apply(&loaded).unwrap();
        image::save_buffer(&output, filtered.data(), 32, 24, image::ExtendedColorType::Rgb8).unwrap();

        let back = image::open(&output).unwrap().into_rgb8();
        assert_eq!(back.dimensions(), (32, 24));
        assert_eq!(back.into_raw(), filtered.into_raw());
    }

    #[test]
    fn test_presets_on_gray_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gray.png");

        let im = card(16, 16, PixelMode::L);
        image::save_buffer(&path, im.data(), 16, 16, image::ExtendedColorType::L8).unwrap();
        let loaded = image::open(&path).unwrap().into_luma8();
        let loaded = Image::from_raw(16, 16, PixelMode::L, loaded.into_raw()).unwrap();

        for preset in [Preset::Inkwell, Preset::Moon] {
            let out = preset.apply(&loaded).unwrap();
            assert_eq!(out.mode(), PixelMode::Rgb);
            for px in out.pixels() {
                assert_eq!(px[0], px[1], "{preset}");
                assert_eq!(px[1], px[2], "{preset}");
            }
        }
    }
}
