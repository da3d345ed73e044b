pub mod apply;
pub mod batch;
pub mod emission;
pub mod palettes;

use anyhow::{bail, Context, Result};
use iristint_core::effects::StyleParams;
use iristint_core::error::IrisError;
use iristint_core::io::{load_mask, load_texture};
use iristint_core::mask::BinaryMask;
use iristint_core::texture::Texture;
use std::path::Path;

/// Load the eye texture and mask pair, resampling the mask to the texture
/// shape. Both inputs are required.
pub(crate) fn load_inputs(eye: &Path, mask: &Path) -> Result<(Texture, BinaryMask)> {
    if !eye.exists() {
        bail!(IrisError::MissingInput("eye texture"));
    }
    if !mask.exists() {
        bail!(IrisError::MissingInput("mask"));
    }
    let texture =
        load_texture(eye).with_context(|| format!("Failed to load {}", eye.display()))?;
    let mask = load_mask(mask, texture.width(), texture.height())
        .with_context(|| format!("Failed to load {}", mask.display()))?;
    tracing::debug!(
        width = texture.width(),
        height = texture.height(),
        mask_pixels = mask.count(),
        "Inputs loaded"
    );
    Ok((texture, mask))
}

/// Style knobs shared by the apply and batch commands.
#[derive(clap::Args)]
pub struct StyleArgs {
    /// Blend weight toward the original brightness (0.0-1.0)
    #[arg(long, default_value_t = iristint_core::consts::DEFAULT_KEEP_VALUE)]
    pub keep_value: f32,

    /// Saturation multiplier (Basic effect)
    #[arg(long, default_value_t = iristint_core::consts::DEFAULT_SAT_SCALE)]
    pub sat_scale: f32,

    /// Upper highlight strength (Gradient effect)
    #[arg(long, default_value_t = iristint_core::consts::DEFAULT_HIGHLIGHT)]
    pub highlight: f32,

    /// Wave strength (Aurora effect)
    #[arg(long, default_value_t = iristint_core::consts::DEFAULT_AURORA_STRENGTH)]
    pub strength: f32,
}

impl StyleArgs {
    pub fn to_params(&self) -> StyleParams {
        StyleParams {
            keep_value: self.keep_value,
            sat_scale: self.sat_scale,
            highlight: self.highlight,
            strength: self.strength,
        }
    }
}

/// Ring shape knobs shared by the emission-producing commands.
#[derive(clap::Args)]
pub struct RingArgs {
    /// Ring inner radius (fraction of the mask bounding radius)
    #[arg(long, default_value_t = iristint_core::consts::DEFAULT_RING_INNER)]
    pub ring_inner: f32,

    /// Ring outer radius (fraction of the mask bounding radius)
    #[arg(long, default_value_t = iristint_core::consts::DEFAULT_RING_OUTER)]
    pub ring_outer: f32,

    /// Ring edge softness
    #[arg(long, default_value_t = iristint_core::consts::DEFAULT_RING_SOFTNESS)]
    pub ring_softness: f32,
}

impl RingArgs {
    pub fn to_params(&self) -> Result<iristint_core::emission::RingParams> {
        if self.ring_inner >= self.ring_outer {
            bail!(
                "ring inner radius ({}) must be smaller than the outer radius ({})",
                self.ring_inner,
                self.ring_outer
            );
        }
        Ok(iristint_core::emission::RingParams {
            inner: self.ring_inner,
            outer: self.ring_outer,
            softness: self.ring_softness,
        })
    }
}
