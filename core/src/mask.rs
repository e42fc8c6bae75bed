use ndarray::s;

use crate::*;

/// Colour channels blacked out by the mask, extra channels such as alpha are kept.
const MASKED_CHANNELS: usize = 3;

/// Create a black mask the size of the image. The input is left untouched.
pub fn build_mask(raster: &Raster) -> Raster {
    let mut mask = raster.clone();
    match &mut mask {
        Raster::Greyscale(pixels) => pixels.fill(0),
        Raster::Color(pixels) => {
            let channels = pixels.dim().2.min(MASKED_CHANNELS);
            pixels.slice_mut(s![.., .., ..channels]).fill(0);
        }
    }
    mask
}
