use std::path::{Path, PathBuf};

use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

/// Write a flat greyscale PNG of the given size and value.
pub fn flat_grey_png(dir: &Path, name: &str, width: u32, height: u32, value: u8) -> PathBuf {
    let path = dir.join(name);
    GrayImage::from_pixel(width, height, Luma([value]))
        .save(&path)
        .unwrap();
    path
}

/// Write an RGB PNG where every pixel is non-zero and encodes its position.
pub fn gradient_rgb_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([1 + (x % 255) as u8, 1 + (y % 255) as u8, 200])
    })
    .save(&path)
    .unwrap();
    path
}

pub fn opaque_rgba_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
        .save(&path)
        .unwrap();
    path
}
