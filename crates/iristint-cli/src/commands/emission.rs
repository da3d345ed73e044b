use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use iristint_core::emission::build_emission;
use iristint_core::error::IrisError;
use iristint_core::io::{load_mask_native, save_gray};

use super::RingArgs;

#[derive(Args)]
pub struct EmissionArgs {
    /// Mask image, white where the eye region is
    pub mask: PathBuf,

    #[command(flatten)]
    pub ring: RingArgs,

    /// Output file path
    #[arg(short, long, default_value = "emission_mask.png")]
    pub output: PathBuf,
}

pub fn run(args: &EmissionArgs) -> Result<()> {
    if !args.mask.exists() {
        bail!(IrisError::MissingInput("mask"));
    }

    let mask = load_mask_native(&args.mask)
        .with_context(|| format!("Failed to load {}", args.mask.display()))?;
    println!(
        "Loaded {}x{} mask, {} pixels set",
        mask.width(),
        mask.height(),
        mask.count()
    );

    let ring = args.ring.to_params()?;
    let emission = build_emission(&mask, &ring);
    save_gray(&emission, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Emission mask -> {}", args.output.display());

    Ok(())
}
