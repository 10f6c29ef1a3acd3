//! instafx - photographic filters from the command line
//!
//! Thin front end over `instafx-presets` and `instafx-ops`.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "instafx")]
#[command(author, version, about = "Instagram-style photo filters and CSS blend modes")]
#[command(long_about = "
Applies named photo filters, CSS blend modes and CSS filter effects to
PNG and JPEG images.

Examples:
  instafx list                                  # Presets, blend modes, effects
  instafx apply nashville photo.jpg -o out.png  # Run a preset
  instafx blend photo.png tint.png -o out.png -m soft-light
  instafx adjust photo.png -o out.png -e sepia -a 0.6
  RUST_LOG=instafx_ops=trace instafx apply 1977 in.png -o out.png
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// List presets, blend modes and filter effects
    #[command(visible_alias = "ls")]
    List,

    /// Apply a named preset
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Blend a source image over a backdrop
    #[command(visible_alias = "b")]
    Blend(BlendArgs),

    /// Apply a single filter effect
    #[command(visible_alias = "fx")]
    Adjust(AdjustArgs),
}

/// Arguments for the `apply` command.
#[derive(Args)]
struct ApplyArgs {
    /// Preset name (see `instafx list`)
    preset: String,

    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

/// Arguments for the `blend` command.
#[derive(Args)]
struct BlendArgs {
    /// Backdrop image
    backdrop: PathBuf,

    /// Source image, same size as the backdrop
    source: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Blend mode (normal, multiply, screen, overlay, soft-light, hue, ...)
    #[arg(short, long, default_value = "normal")]
    mode: String,
}

/// Arguments for the `adjust` command.
#[derive(Args)]
struct AdjustArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Effect: brightness, contrast, saturate, grayscale, sepia, hue-rotate
    #[arg(short, long)]
    effect: String,

    /// Effect amount (degrees for hue-rotate)
    #[arg(short, long, default_value = "1.0", allow_negative_numbers = true)]
    amount: f64,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::List => commands::list::run(cli.verbose),
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
        Commands::Blend(args) => commands::blend::run(args, cli.verbose),
        Commands::Adjust(args) => commands::adjust::run(args, cli.verbose),
    }
}
