use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use turbid_core::io::image_io::load_image;
use turbid_core::quality::{mean_squared_error, psnr};

#[derive(Args)]
pub struct PsnrArgs {
    /// Reference image
    pub reference: PathBuf,

    /// Restored image, same size as the reference
    pub restored: PathBuf,
}

pub fn run(args: &PsnrArgs) -> Result<()> {
    let reference = load_image(&args.reference)
        .with_context(|| format!("Failed to load {}", args.reference.display()))?;
    let restored = load_image(&args.restored)
        .with_context(|| format!("Failed to load {}", args.restored.display()))?;

    let mse = mean_squared_error(&reference, &restored)?;
    let db = psnr(&reference, &restored)?;

    println!("MSE:  {mse:.4}");
    println!("PSNR: {}", crate::summary::format_psnr(db));
    Ok(())
}
