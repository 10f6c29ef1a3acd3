//! Preset command

use crate::ApplyArgs;
use anyhow::{Context, Result};
use instafx_presets::Preset;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: ApplyArgs, verbose: u8) -> Result<()> {
    let preset: Preset = args.preset.parse()?;
    let image = super::load_image(&args.input)?;

    if verbose > 0 {
        println!("Applying '{}' to {}", preset, args.input.display());
    }
    info!(preset = %preset, width = image.width(), height = image.height(), "apply");

    let result = preset
        .apply(&image)
        .with_context(|| format!("Preset '{preset}' failed"))?;
    super::save_image(&args.output, &result)?;

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}
