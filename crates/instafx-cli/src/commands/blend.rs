//! Blend command

use crate::BlendArgs;
use anyhow::{Result, bail};
use instafx_core::PixelMode;
use instafx_ops::{BlendMode, blend};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: BlendArgs, verbose: u8) -> Result<()> {
    let mode: BlendMode = args.mode.parse()?;
    let backdrop = super::load_image(&args.backdrop)?;
    let source = super::load_image(&args.source)?;

    if backdrop.dimensions() != source.dimensions() {
        bail!(
            "Image dimensions don't match: {}x{} vs {}x{}",
            backdrop.width(),
            backdrop.height(),
            source.width(),
            source.height()
        );
    }

    if verbose > 0 {
        println!(
            "Blending {} over {} with mode '{}'",
            args.source.display(),
            args.backdrop.display(),
            mode
        );
    }

    // Gray inputs are promoted so the blend sees color operands.
    let backdrop = promote(backdrop);
    let source = promote(source);
    debug!(backdrop = %backdrop.mode(), source = %source.mode(), "operands");

    let result = blend(mode, &backdrop, &source)?;
    super::save_image(&args.output, &result)?;

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}

fn promote(image: instafx_core::Image) -> instafx_core::Image {
    match image.mode() {
        PixelMode::L => image.convert(PixelMode::Rgb),
        PixelMode::La => image.convert(PixelMode::Rgba),
        _ => image,
    }
}
