//! Binary region masks and the geometry derived from them.

use image::imageops::{self, FilterType};
use image::GrayImage;
use ndarray::Array2;
use tracing::debug;

use crate::consts::{DISTANCE_EPSILON, MASK_THRESHOLD};

/// A 0/1 mask matching the shape of the texture it gates.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryMask {
    /// Cell values are 0 or 1, shape = (height, width).
    pub data: Array2<u8>,
}

impl BinaryMask {
    pub fn new(data: Array2<u8>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.data[[y, x]] == 1
    }

    /// Binarize a grayscale image, resampling to the target shape first when
    /// the dimensions differ.
    pub fn from_gray(gray: &GrayImage, target_width: usize, target_height: usize) -> Self {
        let (w, h) = gray.dimensions();
        let resized;
        let source = if (w as usize, h as usize) != (target_width, target_height) {
            debug!(
                from_width = w,
                from_height = h,
                to_width = target_width,
                to_height = target_height,
                "Resampling mask to target shape"
            );
            resized = imageops::resize(
                gray,
                target_width as u32,
                target_height as u32,
                FilterType::Lanczos3,
            );
            &resized
        } else {
            gray
        };

        let mut data = Array2::<u8>::zeros((target_height, target_width));
        for (x, y, pixel) in source.enumerate_pixels() {
            data[[y as usize, x as usize]] = u8::from(pixel.0[0] > MASK_THRESHOLD);
        }
        Self { data }
    }

    /// Mean (x, y) coordinate of the set pixels, or `None` for an empty mask.
    pub fn centroid(&self) -> Option<(usize, usize)> {
        let mut sum_x = 0usize;
        let mut sum_y = 0usize;
        let mut count = 0usize;
        for ((row, col), &v) in self.data.indexed_iter() {
            if v == 1 {
                sum_x += col;
                sum_y += row;
                count += 1;
            }
        }
        if count == 0 {
            None
        } else {
            Some((sum_x / count, sum_y / count))
        }
    }

    /// Euclidean norm of the set-pixel bounding box half-extents,
    /// epsilon-floored so it is always safe as a divisor.
    pub fn bounding_radius(&self) -> f32 {
        let mut min_x = usize::MAX;
        let mut max_x = 0usize;
        let mut min_y = usize::MAX;
        let mut max_y = 0usize;
        let mut any = false;
        for ((row, col), &v) in self.data.indexed_iter() {
            if v == 1 {
                any = true;
                min_x = min_x.min(col);
                max_x = max_x.max(col);
                min_y = min_y.min(row);
                max_y = max_y.max(row);
            }
        }
        if !any {
            return DISTANCE_EPSILON;
        }
        let rx = (max_x - min_x) as f32 / 2.0 + DISTANCE_EPSILON;
        let ry = (max_y - min_y) as f32 / 2.0 + DISTANCE_EPSILON;
        rx.hypot(ry)
    }

    /// Number of set pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v == 1).count()
    }
}
