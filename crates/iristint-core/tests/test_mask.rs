use approx::assert_abs_diff_eq;
use image::{GrayImage, Luma};
use ndarray::Array2;

use iristint_core::mask::BinaryMask;

fn gray_from(values: &[(u32, u32, u8)], w: u32, h: u32) -> GrayImage {
    let mut img = GrayImage::new(w, h);
    for &(x, y, v) in values {
        img.put_pixel(x, y, Luma([v]));
    }
    img
}

#[test]
fn test_threshold_is_strictly_above_32() {
    let img = gray_from(&[(0, 0, 0), (1, 0, 32), (2, 0, 33), (0, 1, 255)], 3, 2);
    let mask = BinaryMask::from_gray(&img, 3, 2);
    assert_eq!(mask.data[[0, 0]], 0);
    assert_eq!(mask.data[[0, 1]], 0, "32 is not above the threshold");
    assert_eq!(mask.data[[0, 2]], 1);
    assert_eq!(mask.data[[1, 0]], 1);
    assert_eq!(mask.count(), 2);
}

#[test]
fn test_resample_to_target_shape() {
    let mut img = GrayImage::new(8, 8);
    for px in img.pixels_mut() {
        px.0[0] = 255;
    }
    let mask = BinaryMask::from_gray(&img, 4, 4);
    assert_eq!((mask.width(), mask.height()), (4, 4));
    // An all-white mask stays all-white through resampling.
    assert_eq!(mask.count(), 16);
}

#[test]
fn test_centroid_single_pixel() {
    let img = gray_from(&[(2, 1, 255)], 5, 5);
    let mask = BinaryMask::from_gray(&img, 5, 5);
    assert_eq!(mask.centroid(), Some((2, 1)));
}

#[test]
fn test_centroid_square_region() {
    let img = gray_from(
        &[(1, 1, 255), (2, 1, 255), (1, 2, 255), (2, 2, 255)],
        5,
        5,
    );
    let mask = BinaryMask::from_gray(&img, 5, 5);
    assert_eq!(mask.centroid(), Some((1, 1)));
}

#[test]
fn test_centroid_empty_is_none() {
    let mask = BinaryMask::new(Array2::zeros((4, 4)));
    assert_eq!(mask.centroid(), None);
}

#[test]
fn test_bounding_radius_full_mask() {
    let mask = BinaryMask::new(Array2::from_elem((5, 5), 1));
    // Half-extents are 2 in both axes.
    assert_abs_diff_eq!(mask.bounding_radius(), (8.0f32).sqrt(), epsilon = 1e-3);
}

#[test]
fn test_bounding_radius_empty_is_positive() {
    let mask = BinaryMask::new(Array2::zeros((4, 4)));
    assert!(mask.bounding_radius() > 0.0);
}
