use image::RgbaImage;
use ndarray::{s, Array3, ArrayView3};

/// An RGBA texture.
/// Pixel values are f32 in [0.0, 1.0], shape = (height, width, 4), row-major
/// with the origin at the top-left.
#[derive(Clone, Debug)]
pub struct Texture {
    pub data: Array3<f32>,
}

impl Texture {
    pub fn new(data: Array3<f32>) -> Self {
        assert_eq!(data.dim().2, 4, "texture requires 4 channels (RGBA)");
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// The RGB channels as a (height, width, 3) view.
    pub fn rgb(&self) -> ArrayView3<'_, f32> {
        self.data.slice(s![.., .., 0..3])
    }

    /// Decode an 8-bit RGBA image into the unit float range.
    pub fn from_rgba8(img: &RgbaImage) -> Self {
        let (w, h) = img.dimensions();
        let mut data = Array3::<f32>::zeros((h as usize, w as usize, 4));
        for (x, y, pixel) in img.enumerate_pixels() {
            for c in 0..4 {
                data[[y as usize, x as usize, c]] = pixel.0[c] as f32 / 255.0;
            }
        }
        Self { data }
    }

    /// Quantize back to 8-bit RGBA, clamping to [0, 255].
    pub fn to_rgba8(&self) -> RgbaImage {
        let (h, w, _) = self.data.dim();
        let mut img = RgbaImage::new(w as u32, h as u32);
        for row in 0..h {
            for col in 0..w {
                let px = img.get_pixel_mut(col as u32, row as u32);
                for c in 0..4 {
                    px.0[c] = quantize(self.data[[row, col, c]]);
                }
            }
        }
        img
    }
}

/// Map a unit float to an 8-bit channel value.
pub fn quantize(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
