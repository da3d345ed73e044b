//! Annular emission mask builder.
//!
//! Derives a soft grayscale ring centered on the mask centroid, independent
//! of any chosen color or effect. Intended as a glow/emissive channel for
//! the recolored texture.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    DEFAULT_RING_INNER, DEFAULT_RING_OUTER, DEFAULT_RING_SOFTNESS, DISTANCE_EPSILON,
};
use crate::mask::BinaryMask;

/// Ring shape parameters in units of the mask bounding radius.
/// `inner < outer` is expected; `softness` is the edge blur width.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RingParams {
    pub inner: f32,
    pub outer: f32,
    pub softness: f32,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            inner: DEFAULT_RING_INNER,
            outer: DEFAULT_RING_OUTER,
            softness: DEFAULT_RING_SOFTNESS,
        }
    }
}

/// Build the 8-bit ring mask, same shape as the input mask.
///
/// Emission never extends outside the masked region. An empty mask has no
/// centroid; the raw mask scaled to [0, 255] (all zero) comes back instead.
pub fn build_emission(mask: &BinaryMask, params: &RingParams) -> Array2<u8> {
    let Some((cx, cy)) = mask.centroid() else {
        debug!("Empty mask, emitting raw mask");
        return mask.data.mapv(|v| v * 255);
    };

    debug!(cx, cy, inner = params.inner, outer = params.outer, "Building emission ring");

    let radius = mask.bounding_radius();
    let softness = params.softness.max(DISTANCE_EPSILON);

    let (h, w) = mask.data.dim();
    let mut out = Array2::<u8>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            if mask.data[[row, col]] == 0 {
                continue;
            }
            let dx = col as f32 - cx as f32;
            let dy = row as f32 - cy as f32;
            let d = dx.hypot(dy) / radius;

            let ring_in = ((d - params.inner) / softness).clamp(0.0, 1.0);
            let ring_out = 1.0 - ((d - params.outer) / softness).clamp(0.0, 1.0);
            let ring = (ring_out * (1.0 - ring_in)).clamp(0.0, 1.0);

            out[[row, col]] = (ring * 255.0).round() as u8;
        }
    }
    out
}
