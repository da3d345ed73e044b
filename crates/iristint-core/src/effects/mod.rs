//! The effect kernels.
//!
//! Each kernel is a pure transform: RGBA texture + binary mask + target
//! color in, recolored RGBA texture out. The target is given in HSV so hue,
//! saturation and value can be manipulated independently; `keep_value` is
//! the universal knob for how much of the source brightness survives.
//! Masking is a strict per-pixel select with no feathering, and the alpha
//! channel always passes through unchanged.

pub mod aurora;
pub mod basic;
pub mod gradient;

use std::fmt;
use std::str::FromStr;

use ndarray::Array3;
use serde::{Deserialize, Serialize};

use crate::color::{hsv_to_rgb, Hsv};
use crate::consts::{
    DEFAULT_AURORA_STRENGTH, DEFAULT_HIGHLIGHT, DEFAULT_KEEP_VALUE, DEFAULT_SAT_SCALE,
};
use crate::error::{IrisError, Result};
use crate::mask::BinaryMask;
use crate::texture::Texture;

/// Which shading algorithm to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectMode {
    Basic,
    Gradient,
    Aurora,
}

impl EffectMode {
    pub const ALL: [EffectMode; 3] = [EffectMode::Basic, EffectMode::Gradient, EffectMode::Aurora];

    /// Lowercase key used in output filenames.
    pub fn key(&self) -> &'static str {
        match self {
            EffectMode::Basic => "basic",
            EffectMode::Gradient => "gradient",
            EffectMode::Aurora => "aurora",
        }
    }
}

impl fmt::Display for EffectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EffectMode::Basic => "Basic",
            EffectMode::Gradient => "Gradient",
            EffectMode::Aurora => "Aurora",
        };
        f.write_str(name)
    }
}

impl FromStr for EffectMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(EffectMode::Basic),
            "gradient" => Ok(EffectMode::Gradient),
            "aurora" => Ok(EffectMode::Aurora),
            other => Err(format!(
                "unknown effect mode '{other}' (expected basic, gradient or aurora)"
            )),
        }
    }
}

/// Per-invocation style knobs shared by all kernels.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleParams {
    /// Blend weight toward the original value channel (0.0..1.0).
    pub keep_value: f32,
    /// Saturation multiplier (Basic only).
    pub sat_scale: f32,
    /// Upper-region brightness boost strength (Gradient only).
    pub highlight: f32,
    /// Wave amplitude scale (Aurora only).
    pub strength: f32,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            keep_value: DEFAULT_KEEP_VALUE,
            sat_scale: DEFAULT_SAT_SCALE,
            highlight: DEFAULT_HIGHLIGHT,
            strength: DEFAULT_AURORA_STRENGTH,
        }
    }
}

/// Run one kernel over the texture.
///
/// Validates that texture and mask share a shape before any pixel work.
pub fn apply_effect(
    texture: &Texture,
    mask: &BinaryMask,
    target: Hsv,
    mode: EffectMode,
    params: &StyleParams,
) -> Result<Texture> {
    if texture.width() != mask.width() || texture.height() != mask.height() {
        return Err(IrisError::DimensionMismatch {
            texture_width: texture.width(),
            texture_height: texture.height(),
            mask_width: mask.width(),
            mask_height: mask.height(),
        });
    }

    let out = match mode {
        EffectMode::Basic => basic::apply_basic(texture, mask, target, params),
        EffectMode::Gradient => gradient::apply_gradient(texture, mask, target, params),
        EffectMode::Aurora => aurora::apply_aurora(texture, mask, target, params),
    };
    Ok(out)
}

/// Linear interpolation of the value channel toward the target, clamped.
pub(crate) fn blend_value(original: f32, target: f32, keep_value: f32) -> f32 {
    (original * keep_value + target * (1.0 - keep_value)).clamp(0.0, 1.0)
}

/// Convert the reshaded HSV field back to RGB and select it wherever the
/// mask is set. Unmasked pixels and the alpha channel come straight from
/// the source.
pub(crate) fn composite(texture: &Texture, mask: &BinaryMask, hsv: &Array3<f32>) -> Texture {
    let recolored = hsv_to_rgb(&hsv.view());
    let mut out = texture.data.clone();
    let (h, w, _) = out.dim();
    for row in 0..h {
        for col in 0..w {
            if mask.data[[row, col]] == 1 {
                for c in 0..3 {
                    out[[row, col, c]] = recolored[[row, col, c]];
                }
            }
        }
    }
    Texture::new(out)
}
