use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use iristint_core::batch::{run_batch, write_archive, BatchRequest};
use iristint_core::effects::EffectMode;
use iristint_core::palette::PALETTE;

use super::{load_inputs, RingArgs, StyleArgs};

#[derive(Args)]
pub struct BatchArgs {
    /// Eye texture image (PNG)
    pub eye: PathBuf,

    /// Mask image, white where the effect applies
    pub mask: PathBuf,

    /// Palette name (repeatable)
    #[arg(short, long = "palette")]
    pub palettes: Vec<String>,

    /// Run every built-in palette
    #[arg(long, conflicts_with = "palettes")]
    pub all_palettes: bool,

    /// Effect mode: basic, gradient or aurora (repeatable)
    #[arg(short, long = "mode")]
    pub modes: Vec<EffectMode>,

    /// Filename prefix for the archived outputs
    #[arg(long, default_value = "eye")]
    pub prefix: String,

    /// Optional TOML file overriding the style defaults
    #[arg(long)]
    pub style: Option<PathBuf>,

    #[command(flatten)]
    pub style_flags: StyleArgs,

    /// Include the color-independent emission mask
    #[arg(long)]
    pub emission: bool,

    #[command(flatten)]
    pub ring: RingArgs,

    /// Output zip path
    #[arg(short, long, default_value = "batch.zip")]
    pub output: PathBuf,
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let (texture, mask) = load_inputs(&args.eye, &args.mask)?;

    let palettes = if args.all_palettes {
        PALETTE.iter().map(|entry| entry.name.to_string()).collect()
    } else {
        args.palettes.clone()
    };

    let style = match args.style {
        Some(ref path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Invalid style file {}", path.display()))?
        }
        None => args.style_flags.to_params(),
    };

    let emission = if args.emission {
        Some(args.ring.to_params()?)
    } else {
        None
    };

    let request = BatchRequest {
        palettes,
        modes: args.modes.clone(),
        prefix: args.prefix.clone(),
        style,
        emission,
    };

    let output = run_batch(&texture, &mask, &request)?;
    for entry in &output.entries {
        println!("{:<32} {}", entry.filename, entry.caption);
    }

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_archive(&output, BufWriter::new(file))?;
    println!(
        "Wrote {} files to {}",
        output.file_count(),
        args.output.display()
    );

    Ok(())
}
