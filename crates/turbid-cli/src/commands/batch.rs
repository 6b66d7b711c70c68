use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::error;
use turbid_core::error::TurbidError;
use turbid_core::io::image_io::{file_stem, list_images, load_image, output_path};
use turbid_core::io::pairing::{pair_images, ImagePair};
use turbid_core::pipeline::config::BatchConfig;
use turbid_core::pipeline::{restore_pair, save_results, PairReport};
use turbid_core::render::save_comparison_figure;

use super::restore::ParamArgs;

#[derive(Args)]
pub struct BatchArgs {
    /// Directory containing original and degraded images
    #[arg(default_value = "test_image")]
    pub dir: PathBuf,

    /// Batch config file (TOML); overrides the other flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub params: ParamArgs,

    /// Skip writing comparison figures
    #[arg(long)]
    pub no_figures: bool,

    /// Output directory
    #[arg(short, long, default_value = "results")]
    pub output: PathBuf,
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid batch config")?
    } else {
        BatchConfig {
            input_dir: args.dir.clone(),
            output_dir: args.output.clone(),
            restoration: args.params.to_params(),
            save_figures: !args.no_figures,
        }
    };
    config
        .restoration
        .validate()
        .context("Invalid restoration parameters")?;

    let names = list_images(&config.input_dir)
        .with_context(|| format!("Failed to list {}", config.input_dir.display()))?;
    if names.is_empty() {
        return Err(TurbidError::NoImages(config.input_dir.clone()).into());
    }
    let pairing = pair_images(&names);

    crate::summary::print_batch_header(&config, names.len(), &pairing);

    let pb = ProgressBar::new(pairing.pairs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:30} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let mut rows = Vec::with_capacity(pairing.pairs.len());
    let mut failed = 0usize;
    for pair in &pairing.pairs {
        pb.set_message(pair.original.clone());
        match process_pair(&config, pair) {
            Ok(report) => rows.push((pair.clone(), report)),
            Err(e) => {
                failed += 1;
                error!(
                    original = %pair.original,
                    degraded = %pair.degraded,
                    "Restoration failed: {e:#}"
                );
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    crate::summary::print_batch_table(&rows);
    println!("\nResults saved in {}", config.output_dir.display());

    if failed > 0 {
        bail!("{failed} of {} pair(s) failed", pairing.pairs.len());
    }
    Ok(())
}

fn process_pair(config: &BatchConfig, pair: &ImagePair) -> Result<PairReport> {
    let original_path = config.input_dir.join(&pair.original);
    let degraded_path = config.input_dir.join(&pair.degraded);
    let original = load_image(&original_path)
        .with_context(|| format!("Failed to load {}", original_path.display()))?;
    let degraded = load_image(&degraded_path)
        .with_context(|| format!("Failed to load {}", degraded_path.display()))?;

    let report = restore_pair(&original, &degraded, &config.restoration)?;

    let stem = file_stem(&pair.original);
    save_results(&format!("{stem}_restored"), &report.results, &config.output_dir)?;
    if config.save_figures {
        let figure = output_path(
            &config.output_dir,
            &stem,
            "_restoration_comparison.png",
        );
        save_comparison_figure(&original, &degraded, &report.results, &figure)?;
    }

    Ok(report)
}
