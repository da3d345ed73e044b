use std::io::Cursor;
use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use ndarray::Array2;

use crate::error::Result;
use crate::mask::BinaryMask;
use crate::texture::Texture;

/// Load any supported image file as an RGBA texture.
pub fn load_texture(path: &Path) -> Result<Texture> {
    let img = image::open(path)?.to_rgba8();
    Ok(Texture::from_rgba8(&img))
}

/// Load a mask image as grayscale and binarize it at the target shape.
pub fn load_mask(path: &Path, target_width: usize, target_height: usize) -> Result<BinaryMask> {
    let gray = image::open(path)?.to_luma8();
    Ok(BinaryMask::from_gray(&gray, target_width, target_height))
}

/// Load a mask image at its own size, without resampling.
pub fn load_mask_native(path: &Path) -> Result<BinaryMask> {
    let gray = image::open(path)?.to_luma8();
    let (w, h) = gray.dimensions();
    Ok(BinaryMask::from_gray(&gray, w as usize, h as usize))
}

/// Save a texture as 8-bit RGBA PNG.
pub fn save_texture(texture: &Texture, path: &Path) -> Result<()> {
    texture.to_rgba8().save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save an 8-bit grayscale grid as PNG.
pub fn save_gray(gray: &Array2<u8>, path: &Path) -> Result<()> {
    gray_to_image(gray).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// PNG-encode a texture into memory.
pub fn encode_texture_png(texture: &Texture) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    texture
        .to_rgba8()
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

/// PNG-encode an 8-bit grayscale grid into memory.
pub fn encode_gray_png(gray: &Array2<u8>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    gray_to_image(gray)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

fn gray_to_image(gray: &Array2<u8>) -> GrayImage {
    let (h, w) = gray.dim();
    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            img.put_pixel(col as u32, row as u32, Luma([gray[[row, col]]]));
        }
    }
    img
}
