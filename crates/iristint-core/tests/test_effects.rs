use approx::assert_abs_diff_eq;
use ndarray::{Array2, Array3};

use iristint_core::color::{rgb_to_hsv, Hsv};
use iristint_core::effects::{apply_effect, EffectMode, StyleParams};
use iristint_core::error::IrisError;
use iristint_core::mask::BinaryMask;
use iristint_core::texture::Texture;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn white_texture(h: usize, w: usize) -> Texture {
    Texture::new(Array3::from_elem((h, w, 4), 1.0))
}

/// A deterministic textured image with varied alpha, simulating iris detail.
fn detailed_texture(h: usize, w: usize) -> Texture {
    let data = Array3::from_shape_fn((h, w, 4), |(y, x, c)| {
        if c == 3 {
            if (x + y) % 5 == 0 {
                128.0 / 255.0
            } else {
                1.0
            }
        } else {
            ((x * 31 + y * 17 + c * 55) % 256) as f32 / 255.0
        }
    });
    Texture::new(data)
}

fn full_mask(h: usize, w: usize) -> BinaryMask {
    BinaryMask::new(Array2::from_elem((h, w), 1))
}

fn empty_mask(h: usize, w: usize) -> BinaryMask {
    BinaryMask::new(Array2::zeros((h, w)))
}

/// Mask set on the centered square [2, 6) x [2, 6) of an 8x8 grid.
fn window_mask() -> BinaryMask {
    let data = Array2::from_shape_fn((8, 8), |(y, x)| {
        u8::from((2..6).contains(&x) && (2..6).contains(&y))
    });
    BinaryMask::new(data)
}

/// Decode a texture's HSV field through the 8-bit output representation.
fn decoded_hsv(texture: &Texture) -> Array3<f32> {
    let quantized = Texture::from_rgba8(&texture.to_rgba8());
    rgb_to_hsv(&quantized.rgb())
}

fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 1.0;
    d.min(1.0 - d)
}

const TARGET: Hsv = Hsv { h: 0.62, s: 0.48, v: 0.85 };

// ---------------------------------------------------------------------------
// Basic
// ---------------------------------------------------------------------------

#[test]
fn test_basic_full_saturation_scenario() {
    // All-white 4x4 source, full mask, keep_value 0: every pixel lands
    // exactly on the target color (within 8-bit rounding).
    let texture = white_texture(4, 4);
    let mask = full_mask(4, 4);
    let params = StyleParams {
        keep_value: 0.0,
        sat_scale: 1.0,
        ..StyleParams::default()
    };
    let target = Hsv::new(0.5, 0.3, 0.92);

    let out = apply_effect(&texture, &mask, target, EffectMode::Basic, &params).unwrap();
    let hsv = decoded_hsv(&out);
    let rgba = out.to_rgba8();

    for y in 0..4 {
        for x in 0..4 {
            assert!(hue_diff(hsv[[y, x, 0]], 0.5) < 0.01);
            assert_abs_diff_eq!(hsv[[y, x, 1]], 0.3, epsilon = 0.01);
            assert_abs_diff_eq!(hsv[[y, x, 2]], 0.92, epsilon = 0.01);
            assert_eq!(rgba.get_pixel(x as u32, y as u32).0[3], 255);
        }
    }
}

#[test]
fn test_basic_hue_uniformity() {
    let texture = detailed_texture(8, 8);
    let mask = window_mask();
    let out = apply_effect(
        &texture,
        &mask,
        TARGET,
        EffectMode::Basic,
        &StyleParams::default(),
    )
    .unwrap();

    let hsv = decoded_hsv(&out);
    for y in 0..8 {
        for x in 0..8 {
            if mask.is_set(x, y) {
                assert!(
                    hue_diff(hsv[[y, x, 0]], TARGET.h) < 0.02,
                    "pixel ({x},{y}) hue {} != {}",
                    hsv[[y, x, 0]],
                    TARGET.h
                );
            }
        }
    }
}

#[test]
fn test_basic_keep_value_one_preserves_value_channel() {
    let texture = detailed_texture(8, 8);
    let mask = window_mask();
    let params = StyleParams {
        keep_value: 1.0,
        ..StyleParams::default()
    };
    let out = apply_effect(&texture, &mask, TARGET, EffectMode::Basic, &params).unwrap();

    let orig = rgb_to_hsv(&texture.rgb());
    let hsv = decoded_hsv(&out);
    for y in 0..8 {
        for x in 0..8 {
            if mask.is_set(x, y) {
                assert_abs_diff_eq!(hsv[[y, x, 2]], orig[[y, x, 2]], epsilon = 0.01);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Mask idempotence — shared by every kernel
// ---------------------------------------------------------------------------

#[test]
fn test_unmasked_pixels_are_byte_identical() {
    let texture = detailed_texture(8, 8);
    let mask = window_mask();
    let source = texture.to_rgba8();

    for mode in EffectMode::ALL {
        let out = apply_effect(&texture, &mask, TARGET, mode, &StyleParams::default()).unwrap();
        let result = out.to_rgba8();
        for y in 0..8u32 {
            for x in 0..8u32 {
                let a = source.get_pixel(x, y);
                let b = result.get_pixel(x, y);
                if !mask.is_set(x as usize, y as usize) {
                    assert_eq!(a, b, "{mode} altered unmasked pixel ({x},{y})");
                }
                // Alpha passes through everywhere.
                assert_eq!(a.0[3], b.0[3], "{mode} altered alpha at ({x},{y})");
            }
        }
    }
}

#[test]
fn test_empty_mask_changes_nothing() {
    let texture = detailed_texture(8, 8);
    let mask = empty_mask(8, 8);
    for mode in EffectMode::ALL {
        let out = apply_effect(&texture, &mask, TARGET, mode, &StyleParams::default()).unwrap();
        assert_eq!(
            texture.to_rgba8().into_raw(),
            out.to_rgba8().into_raw(),
            "{mode} changed pixels under an empty mask"
        );
    }
}

// ---------------------------------------------------------------------------
// Gradient
// ---------------------------------------------------------------------------

#[test]
fn test_gradient_empty_mask_passes_through() {
    let texture = detailed_texture(8, 8);
    let out = apply_effect(
        &texture,
        &empty_mask(8, 8),
        TARGET,
        EffectMode::Gradient,
        &StyleParams::default(),
    )
    .unwrap();
    assert_eq!(texture.to_rgba8().into_raw(), out.to_rgba8().into_raw());
}

#[test]
fn test_gradient_keep_value_one_without_highlight_preserves_value() {
    let texture = detailed_texture(8, 8);
    let mask = window_mask();
    let params = StyleParams {
        keep_value: 1.0,
        highlight: 0.0,
        ..StyleParams::default()
    };
    let out = apply_effect(&texture, &mask, TARGET, EffectMode::Gradient, &params).unwrap();

    let orig = rgb_to_hsv(&texture.rgb());
    let hsv = decoded_hsv(&out);
    for y in 0..8 {
        for x in 0..8 {
            if mask.is_set(x, y) {
                assert_abs_diff_eq!(hsv[[y, x, 2]], orig[[y, x, 2]], epsilon = 0.01);
            }
        }
    }
}

#[test]
fn test_gradient_saturation_falls_off_outward() {
    // Wide flat texture so inner/outer masked pixels differ only by distance.
    let texture = white_texture(5, 17);
    let mask = full_mask(5, 17);
    let params = StyleParams {
        keep_value: 0.0,
        highlight: 0.0,
        ..StyleParams::default()
    };
    let out = apply_effect(&texture, &mask, TARGET, EffectMode::Gradient, &params).unwrap();

    let hsv = decoded_hsv(&out);
    let (cx, cy) = mask.centroid().unwrap();
    let center_sat = hsv[[cy, cx, 1]];
    let edge_sat = hsv[[cy, 0, 1]];
    assert!(
        center_sat > edge_sat,
        "expected saturation to decay outward: center {center_sat} <= edge {edge_sat}"
    );
}

// ---------------------------------------------------------------------------
// Aurora
// ---------------------------------------------------------------------------

#[test]
fn test_aurora_zero_strength_keeps_target_hue() {
    let texture = detailed_texture(8, 8);
    let mask = window_mask();
    let params = StyleParams {
        strength: 0.0,
        ..StyleParams::default()
    };
    let out = apply_effect(&texture, &mask, TARGET, EffectMode::Aurora, &params).unwrap();

    let hsv = decoded_hsv(&out);
    for y in 0..8 {
        for x in 0..8 {
            if mask.is_set(x, y) {
                assert!(hue_diff(hsv[[y, x, 0]], TARGET.h) < 0.02);
            }
        }
    }
}

#[test]
fn test_aurora_saturation_stays_bounded() {
    let texture = white_texture(16, 16);
    let mask = full_mask(16, 16);
    let params = StyleParams {
        strength: 50.0,
        ..StyleParams::default()
    };
    let out = apply_effect(&texture, &mask, TARGET, EffectMode::Aurora, &params).unwrap();

    let hsv = decoded_hsv(&out);
    for y in 0..16 {
        for x in 0..16 {
            assert!(hsv[[y, x, 1]] <= 0.6 + 0.01);
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_dimension_mismatch_is_rejected() {
    let texture = white_texture(4, 4);
    let mask = full_mask(8, 8);
    let err = apply_effect(
        &texture,
        &mask,
        TARGET,
        EffectMode::Basic,
        &StyleParams::default(),
    )
    .unwrap_err();
    assert!(matches!(err, IrisError::DimensionMismatch { .. }));
}
