use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use iristint_core::effects::{apply_effect, EffectMode};
use iristint_core::emission::build_emission;
use iristint_core::error::IrisError;
use iristint_core::io::{save_gray, save_texture};
use iristint_core::palette;

use super::{load_inputs, RingArgs, StyleArgs};

#[derive(Args)]
pub struct ApplyArgs {
    /// Eye texture image (PNG)
    pub eye: PathBuf,

    /// Mask image, white where the effect applies
    pub mask: PathBuf,

    /// Palette name (see `iristint palettes`)
    #[arg(short, long)]
    pub palette: String,

    /// Effect mode: basic, gradient or aurora
    #[arg(short, long, default_value = "basic")]
    pub mode: EffectMode,

    #[command(flatten)]
    pub style: StyleArgs,

    /// Also write the emission mask to this path
    #[arg(long)]
    pub emission: Option<PathBuf>,

    #[command(flatten)]
    pub ring: RingArgs,

    /// Output file path
    #[arg(short, long, default_value = "recolored.png")]
    pub output: PathBuf,
}

pub fn run(args: &ApplyArgs) -> Result<()> {
    let (texture, mask) = load_inputs(&args.eye, &args.mask)?;
    println!(
        "Loaded {}x{} texture, mask covers {} pixels",
        texture.width(),
        texture.height(),
        mask.count()
    );

    let entry = palette::find(&args.palette)
        .ok_or_else(|| anyhow!(IrisError::UnknownPalette(args.palette.clone())))?;

    let out = apply_effect(&texture, &mask, entry.hsv, args.mode, &args.style.to_params())?;
    save_texture(&out, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("{} · {} -> {}", entry.label, args.mode, args.output.display());

    if let Some(ref emission_path) = args.emission {
        let ring = args.ring.to_params()?;
        let emission = build_emission(&mask, &ring);
        save_gray(&emission, emission_path)
            .with_context(|| format!("Failed to write {}", emission_path.display()))?;
        println!("Emission mask -> {}", emission_path.display());
    }

    Ok(())
}
