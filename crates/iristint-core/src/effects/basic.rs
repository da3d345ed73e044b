//! Basic kernel: uniform hue/saturation replacement.

use ndarray::{Axis, Zip};
use tracing::debug;

use super::{blend_value, composite, StyleParams};
use crate::color::{rgb_to_hsv, Hsv};
use crate::mask::BinaryMask;
use crate::texture::Texture;

/// Replace hue and saturation uniformly, blending value toward the target
/// by `1 - keep_value`.
pub fn apply_basic(
    texture: &Texture,
    mask: &BinaryMask,
    target: Hsv,
    params: &StyleParams,
) -> Texture {
    debug!(hue = target.h, sat = target.s, val = target.v, "Applying basic kernel");

    let mut hsv = rgb_to_hsv(&texture.rgb());
    let sat = (target.s * params.sat_scale).clamp(0.0, 1.0);

    Zip::from(hsv.lanes_mut(Axis(2))).par_for_each(|mut px| {
        px[0] = target.h;
        px[1] = sat;
        px[2] = blend_value(px[2], target.v, params.keep_value);
    });

    composite(texture, mask, &hsv)
}
