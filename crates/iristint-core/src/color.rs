//! RGB<->HSV codec over whole pixel fields.
//!
//! Both directions run elementwise across the full image in one call and are
//! exact inverses to within floating-point tolerance for v > 0. Hue,
//! saturation and value are all in [0, 1].

use ndarray::{Array3, ArrayView3, Axis, Zip};
use serde::{Deserialize, Serialize};

use crate::consts::CODEC_EPSILON;

/// A hue/saturation/value triple, each component in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// Convert a (height, width, 3) RGB field to HSV.
pub fn rgb_to_hsv(rgb: &ArrayView3<f32>) -> Array3<f32> {
    let (h, w, _) = rgb.dim();
    let mut out = Array3::<f32>::zeros((h, w, 3));
    Zip::from(out.lanes_mut(Axis(2)))
        .and(rgb.lanes(Axis(2)))
        .par_for_each(|mut hsv, px| {
            let (hh, ss, vv) = pixel_to_hsv(px[0], px[1], px[2]);
            hsv[0] = hh;
            hsv[1] = ss;
            hsv[2] = vv;
        });
    out
}

/// Convert a (height, width, 3) HSV field back to RGB.
pub fn hsv_to_rgb(hsv: &ArrayView3<f32>) -> Array3<f32> {
    let (h, w, _) = hsv.dim();
    let mut out = Array3::<f32>::zeros((h, w, 3));
    Zip::from(out.lanes_mut(Axis(2)))
        .and(hsv.lanes(Axis(2)))
        .par_for_each(|mut rgb, px| {
            let (r, g, b) = pixel_to_rgb(px[0], px[1], px[2]);
            rgb[0] = r;
            rgb[1] = g;
            rgb[2] = b;
        });
    out
}

/// Max/min-channel decomposition. Ties on the max channel resolve in
/// R, G, B order; a fully unsaturated pixel gets hue 0.
fn pixel_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let value = maxc;

    let saturation = if maxc != 0.0 {
        (maxc - minc) / (maxc + CODEC_EPSILON)
    } else {
        0.0
    };

    let hue = if maxc == minc {
        0.0
    } else {
        let denom = (maxc - minc) + CODEC_EPSILON;
        let rc = (maxc - r) / denom;
        let gc = (maxc - g) / denom;
        let bc = (maxc - b) / denom;
        let h6 = if maxc == r {
            bc - gc
        } else if maxc == g {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        (h6 / 6.0).rem_euclid(1.0)
    };

    (hue, saturation, value)
}

/// Classic sector reconstruction over six half-open hue intervals.
fn pixel_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let h6 = (h * 6.0).rem_euclid(6.0);
    let x = c * (1.0 - ((h6 % 2.0) - 1.0).abs());

    let (rp, gp, bp) = match h6 as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = v - c;
    (rp + m, gp + m, bp + m)
}
