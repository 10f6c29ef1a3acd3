//! Filter effect command

use crate::AdjustArgs;
use anyhow::{Context, Result};
use instafx_ops::{FilterEffect, apply_color_matrix};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: AdjustArgs, verbose: u8) -> Result<()> {
    let effect: FilterEffect = args.effect.parse()?;
    let image = super::load_image(&args.input)?;

    if verbose > 0 {
        println!("Applying {}({}) to {}", effect, args.amount, args.input.display());
    }

    let result = apply_color_matrix(effect, &image, args.amount)
        .with_context(|| format!("{effect}({}) failed", args.amount))?;
    super::save_image(&args.output, &result)?;

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}
