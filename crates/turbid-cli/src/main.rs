mod commands;
mod progress;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "turbid", about = "Turbulence-blur image restoration tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Restore one degraded image and compare it with its original
    Restore(commands::restore::RestoreArgs),
    /// Pair and restore every image in a directory
    Batch(commands::batch::BatchArgs),
    /// Compute PSNR between a reference and a restored image
    Psnr(commands::psnr::PsnrArgs),
    /// Save the centered log-magnitude spectrum of an image
    Spectrum(commands::spectrum::SpectrumArgs),
    /// Print the default batch configuration as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Restore(args) => commands::restore::run(args),
        Commands::Batch(args) => commands::batch::run(args),
        Commands::Psnr(args) => commands::psnr::run(args),
        Commands::Spectrum(args) => commands::spectrum::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
