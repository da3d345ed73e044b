mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "iristint", about = "Eye texture recoloring tool")]
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
    /// Recolor one texture with a single palette and effect
    Apply(commands::apply::ApplyArgs),
    /// Recolor with a cross-product of palettes and effects into a zip
    Batch(commands::batch::BatchArgs),
    /// Build the ring-shaped emission mask
    Emission(commands::emission::EmissionArgs),
    /// List the built-in palette
    Palettes(commands::palettes::PalettesArgs),
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
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Batch(args) => commands::batch::run(args),
        Commands::Emission(args) => commands::emission::run(args),
        Commands::Palettes(args) => commands::palettes::run(args),
    }
}
