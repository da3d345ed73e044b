//! Aurora kernel: periodic hue/saturation shimmer.

use ndarray::{Axis, Zip};
use tracing::debug;

use super::{blend_value, composite, StyleParams};
use crate::color::{rgb_to_hsv, Hsv};
use crate::consts::{
    AURORA_HUE_CLAMP, AURORA_SAT_AMPLITUDE, AURORA_SAT_CAP, AURORA_SAT_FREQ, AURORA_WAVE_DIAG,
    AURORA_WAVE_X, AURORA_WAVE_Y,
};
use crate::mask::BinaryMask;
use crate::texture::Texture;

/// Offset the target hue by a multi-wave field over pixel coordinates and
/// add a small bounded saturation shimmer. Independent of mask shape.
pub fn apply_aurora(
    texture: &Texture,
    mask: &BinaryMask,
    target: Hsv,
    params: &StyleParams,
) -> Texture {
    debug!(strength = params.strength, "Applying aurora kernel");

    let mut hsv = rgb_to_hsv(&texture.rgb());
    Zip::indexed(hsv.lanes_mut(Axis(2))).par_for_each(|(row, col), mut px| {
        let x = col as f32;
        let y = row as f32;

        // Three sinusoids with distinct frequencies and axes so the shimmer
        // never degenerates into axis-aligned bands.
        let wave = AURORA_WAVE_DIAG.0 * ((x + y) * AURORA_WAVE_DIAG.1).sin()
            + AURORA_WAVE_X.0 * (x * AURORA_WAVE_X.1).cos()
            + AURORA_WAVE_Y.0 * (y * AURORA_WAVE_Y.1).sin();
        let hue_offset = (wave * params.strength).clamp(-AURORA_HUE_CLAMP, AURORA_HUE_CLAMP);

        let shimmer =
            (x * AURORA_SAT_FREQ.0 + y * AURORA_SAT_FREQ.1).sin() * AURORA_SAT_AMPLITUDE
                + AURORA_SAT_AMPLITUDE;

        px[0] = (target.h + hue_offset).rem_euclid(1.0);
        px[1] = (target.s + shimmer).clamp(0.0, AURORA_SAT_CAP);
        px[2] = blend_value(px[2], target.v, params.keep_value);
    });

    composite(texture, mask, &hsv)
}
