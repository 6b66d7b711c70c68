use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use turbid_core::io::image_io::{file_stem, load_image, output_path};
use turbid_core::pipeline::config::RestorationParameters;
use turbid_core::pipeline::{restore_pair_reported, save_results};
use turbid_core::render::save_comparison_figure;
use turbid_core::restore::SignalVariance;

use crate::progress::StageReporter;

/// Restoration parameters shared by `restore` and `batch`.
#[derive(Args, Clone)]
pub struct ParamArgs {
    /// Degradation strength k in exp(-k * (u^2 + v^2)^(5/6))
    #[arg(long, default_value = "0.0025")]
    pub k: f64,

    /// Gaussian pass-band radius of the inverse filter
    #[arg(long, default_value = "50.0")]
    pub cutoff: f64,

    /// Origin clamp for the inverse filter's transfer function
    #[arg(long, default_value = "1e-6")]
    pub epsilon: f64,

    /// Noise variance assumed by the Wiener filter
    #[arg(long, default_value = "100.0")]
    pub noise_variance: f64,

    /// Signal variance for the Wiener filter (estimated from the image if omitted)
    #[arg(long)]
    pub signal_variance: Option<f64>,
}

impl ParamArgs {
    pub fn to_params(&self) -> RestorationParameters {
        RestorationParameters {
            k: self.k,
            inverse_cutoff_radius: self.cutoff,
            inverse_epsilon: self.epsilon,
            noise_variance: self.noise_variance,
            signal_variance: self
                .signal_variance
                .map_or(SignalVariance::Auto, SignalVariance::Fixed),
        }
    }
}

#[derive(Args)]
pub struct RestoreArgs {
    /// Undegraded reference image
    #[arg(long)]
    pub original: PathBuf,

    /// Degraded image to restore
    #[arg(long)]
    pub degraded: PathBuf,

    #[command(flatten)]
    pub params: ParamArgs,

    /// Skip writing the side-by-side comparison figure
    #[arg(long)]
    pub no_figure: bool,

    /// Output directory
    #[arg(short, long, default_value = "results")]
    pub output: PathBuf,
}

pub fn run(args: &RestoreArgs) -> Result<()> {
    let params = args.params.to_params();
    params.validate().context("Invalid restoration parameters")?;

    let original = load_image(&args.original)
        .with_context(|| format!("Failed to load {}", args.original.display()))?;
    let degraded = load_image(&args.degraded)
        .with_context(|| format!("Failed to load {}", args.degraded.display()))?;

    crate::summary::print_parameter_summary(&params);

    let reporter = StageReporter::spinner();
    let report = restore_pair_reported(&original, &degraded, &params, &reporter)?;
    reporter.finish();

    let name = args
        .original
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image");
    let stem = file_stem(name);

    let saved = save_results(&format!("{stem}_restored"), &report.results, &args.output)?;
    crate::summary::print_pair_report(name, &report);
    println!("Saved {}", saved.inverse_filtered.display());
    println!("Saved {}", saved.wiener_filtered.display());

    if !args.no_figure {
        let figure = output_path(&args.output, &stem, "_restoration_comparison.png");
        save_comparison_figure(&original, &degraded, &report.results, &figure)?;
        println!("Saved {}", figure.display());
    }

    Ok(())
}
