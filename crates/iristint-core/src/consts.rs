//! Tunable constants: thresholds, epsilon guards, style defaults and the
//! kernel falloff/wave coefficients.

/// Grayscale intensity above which a mask pixel counts as set (of 255).
pub const MASK_THRESHOLD: u8 = 32;

/// Denominator guard for the RGB<->HSV codec. Small enough to leave 8-bit
/// values unbiased.
pub const CODEC_EPSILON: f32 = 1e-12;

/// Floor for distance ranges and radii so normalization never divides by zero.
pub const DISTANCE_EPSILON: f32 = 1e-6;

/// Default blend weight toward the original value channel.
pub const DEFAULT_KEEP_VALUE: f32 = 0.7;

/// Default saturation multiplier for the Basic kernel.
pub const DEFAULT_SAT_SCALE: f32 = 1.0;

/// Default upper-region highlight strength for the Gradient kernel.
pub const DEFAULT_HIGHLIGHT: f32 = 0.4;

/// Default wave strength for the Aurora kernel.
pub const DEFAULT_AURORA_STRENGTH: f32 = 0.3;

/// Default emission ring inner radius (fraction of the mask bounding radius).
pub const DEFAULT_RING_INNER: f32 = 0.07;

/// Default emission ring outer radius (fraction of the mask bounding radius).
pub const DEFAULT_RING_OUTER: f32 = 0.14;

/// Default emission ring edge softness (same normalized units).
pub const DEFAULT_RING_SOFTNESS: f32 = 0.06;

/// Gradient kernel: saturation at the outermost masked pixel, as a fraction
/// of the target saturation.
pub const GRADIENT_SAT_BASE: f32 = 0.85;

/// Gradient kernel: extra saturation fraction gained toward the centroid.
pub const GRADIENT_SAT_SPAN: f32 = 0.30;

/// Gradient kernel: value at the outermost masked pixel, as a fraction of
/// the target value.
pub const GRADIENT_VAL_BASE: f32 = 0.90;

/// Gradient kernel: extra value fraction gained toward the centroid.
pub const GRADIENT_VAL_SPAN: f32 = 0.20;

/// Gradient kernel: the highlight zone starts this fraction of the image
/// height above the centroid row.
pub const HIGHLIGHT_ZONE_OFFSET: f32 = 0.05;

/// Gradient kernel: value boost applied in the highlight zone per unit of
/// the highlight parameter.
pub const HIGHLIGHT_BOOST: f32 = 0.15;

/// Aurora kernel: (amplitude, frequency) of the diagonal sine wave.
pub const AURORA_WAVE_DIAG: (f32, f32) = (0.4, 0.02);

/// Aurora kernel: (amplitude, frequency) of the horizontal cosine wave.
pub const AURORA_WAVE_X: (f32, f32) = (0.3, 0.015);

/// Aurora kernel: (amplitude, frequency) of the vertical sine wave.
pub const AURORA_WAVE_Y: (f32, f32) = (0.3, 0.02);

/// Aurora kernel: hue offset is clamped to +/- this value.
pub const AURORA_HUE_CLAMP: f32 = 0.15;

/// Aurora kernel: saturation shimmer never exceeds this value.
pub const AURORA_SAT_CAP: f32 = 0.6;

/// Aurora kernel: frequencies of the saturation shimmer in x and y.
pub const AURORA_SAT_FREQ: (f32, f32) = (0.01, 0.015);

/// Aurora kernel: amplitude (and bias) of the saturation shimmer.
pub const AURORA_SAT_AMPLITUDE: f32 = 0.1;
