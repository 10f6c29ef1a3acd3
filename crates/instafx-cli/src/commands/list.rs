//! List command

use anyhow::Result;
use instafx_ops::{BlendMode, FilterEffect};
use instafx_presets::Preset;

pub fn run(verbose: u8) -> Result<()> {
    println!("Presets:");
    print_names(Preset::ALL.iter().map(|p| p.name()));

    println!("Blend modes:");
    if verbose > 0 {
        for mode in BlendMode::ALL {
            let kind = if mode.is_separable() { "separable" } else { "nonseparable" };
            println!("  {:<12} {kind}", mode.name());
        }
    } else {
        print_names(BlendMode::ALL.iter().map(|m| m.name()));
    }

    println!("Effects:");
    print_names(FilterEffect::ALL.iter().map(|e| e.name()));
    Ok(())
}

fn print_names<'a>(names: impl Iterator<Item = &'a str>) {
    let names: Vec<&str> = names.collect();
    for row in names.chunks(6) {
        println!("  {}", row.join(", "));
    }
}
