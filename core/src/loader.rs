use std::path::Path;

use image::{DynamicImage, ImageReader};
use ndarray::{Array2, Array3};

use crate::*;

/// Read an image file into a raster, keeping its channel layout.
///
/// Greyscale images become [`Raster::Greyscale`]; grey+alpha, RGB and RGBA become
/// [`Raster::Color`] with 2, 3 or 4 channels. Sources deeper than 8 bits are narrowed.
pub fn load(path: impl AsRef<Path>) -> Result<Raster> {
    let path = path.as_ref();
    let not_found = |source| GameError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    };

    let decoded = ImageReader::open(path)
        .map_err(not_found)?
        .with_guessed_format()
        .map_err(not_found)?
        .decode()
        .map_err(|source| GameError::DecodeFailure {
            path: path.to_path_buf(),
            source,
        })?;

    let raster = from_image(decoded)?;
    log::debug!("Loaded {} with shape {:?}", path.display(), raster.shape());
    Ok(raster)
}

pub fn from_image(image: DynamicImage) -> Result<Raster> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let color = image.color();

    let (channels, data) = match (color.has_color(), color.has_alpha()) {
        (false, false) => {
            let pixels = Array2::from_shape_vec((height, width), image.into_luma8().into_raw())
                .map_err(|_| GameError::UnsupportedImageKind(2))?;
            return Ok(Raster::Greyscale(pixels));
        }
        (false, true) => (2, image.into_luma_alpha8().into_raw()),
        (true, false) => (3, image.into_rgb8().into_raw()),
        (true, true) => (4, image.into_rgba8().into_raw()),
    };

    Array3::from_shape_vec((height, width, channels), data)
        .map(Raster::Color)
        .map_err(|_| GameError::UnsupportedImageKind(channels))
}

/// Convert a raster back into an encodable image.
pub fn to_image(raster: &Raster) -> Result<DynamicImage> {
    let (width, height) = (raster.width() as u32, raster.height() as u32);
    let data: Vec<u8> = match raster {
        Raster::Greyscale(pixels) => pixels.iter().copied().collect(),
        Raster::Color(pixels) => pixels.iter().copied().collect(),
    };

    let unsupported = || GameError::UnsupportedImageKind(raster.channels());
    let image = match raster.channels() {
        1 => image::GrayImage::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
        2 => image::GrayAlphaImage::from_raw(width, height, data).map(DynamicImage::ImageLumaA8),
        3 => image::RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        4 => image::RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
        _ => None,
    };
    image.ok_or_else(unsupported)
}

/// Write a raster to disk, format picked from the file extension.
pub fn save(raster: &Raster, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    to_image(raster)?
        .save(path)
        .map_err(|source| match source {
            image::ImageError::IoError(source) => GameError::ResourceNotFound {
                path: path.to_path_buf(),
                source,
            },
            source => GameError::EncodeFailure {
                path: path.to_path_buf(),
                source,
            },
        })
}
