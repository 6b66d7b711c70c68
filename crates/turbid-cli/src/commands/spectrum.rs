use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use turbid_core::io::image_io::load_image;
use turbid_core::render::save_spectrum;

#[derive(Args)]
pub struct SpectrumArgs {
    /// Input image
    pub file: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "spectrum.png")]
    pub output: PathBuf,
}

pub fn run(args: &SpectrumArgs) -> Result<()> {
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("Loaded {}x{} image", frame.width(), frame.height());
    save_spectrum(&frame, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
