//! Gradient kernel: radial center-to-edge falloff plus an upper highlight.

use ndarray::{Array2, Axis, Zip};
use tracing::debug;

use super::{blend_value, composite, StyleParams};
use crate::color::{rgb_to_hsv, Hsv};
use crate::consts::{
    DISTANCE_EPSILON, GRADIENT_SAT_BASE, GRADIENT_SAT_SPAN, GRADIENT_VAL_BASE, GRADIENT_VAL_SPAN,
    HIGHLIGHT_BOOST, HIGHLIGHT_ZONE_OFFSET,
};
use crate::mask::BinaryMask;
use crate::texture::Texture;

/// Recolor with saturation and value falling off from the mask centroid
/// outward, then boost the region above the centroid by `highlight`.
///
/// An empty mask has no centroid; the texture passes through unchanged.
pub fn apply_gradient(
    texture: &Texture,
    mask: &BinaryMask,
    target: Hsv,
    params: &StyleParams,
) -> Texture {
    let Some((cx, cy)) = mask.centroid() else {
        debug!("Empty mask, gradient kernel passing texture through");
        return texture.clone();
    };

    let h = texture.height();
    let w = texture.width();
    debug!(cx, cy, "Applying gradient kernel");

    // Distance field to the centroid, and the observed range inside the mask.
    let mut dist = Array2::<f32>::zeros((h, w));
    let mut d_min = f32::INFINITY;
    let mut d_max = f32::NEG_INFINITY;
    for row in 0..h {
        for col in 0..w {
            let dx = col as f32 - cx as f32;
            let dy = row as f32 - cy as f32;
            let d = dx.hypot(dy);
            dist[[row, col]] = d;
            if mask.data[[row, col]] == 1 {
                d_min = d_min.min(d);
                d_max = d_max.max(d);
            }
        }
    }
    let d_range = (d_max - d_min).max(DISTANCE_EPSILON);

    let highlight_cutoff = cy as f32 - HIGHLIGHT_ZONE_OFFSET * h as f32;

    let mut hsv = rgb_to_hsv(&texture.rgb());
    Zip::indexed(hsv.lanes_mut(Axis(2))).par_for_each(|(row, col), mut px| {
        // 0 at the innermost masked pixel, 1 at the outermost.
        let d_norm = ((dist[[row, col]] - d_min) / d_range).clamp(0.0, 1.0);
        let inner = 1.0 - d_norm;

        let local_sat = (target.s * (GRADIENT_SAT_BASE + GRADIENT_SAT_SPAN * inner)).clamp(0.0, 1.0);
        let local_val = (target.v * (GRADIENT_VAL_BASE + GRADIENT_VAL_SPAN * inner)).clamp(0.0, 1.0);

        px[0] = target.h;
        px[1] = local_sat;
        px[2] = blend_value(px[2], local_val, params.keep_value);

        if (row as f32) < highlight_cutoff && mask.data[[row, col]] == 1 {
            px[2] = (px[2] + params.highlight * HIGHLIGHT_BOOST).clamp(0.0, 1.0);
        }
    });

    composite(texture, mask, &hsv)
}
