use image::imageops::FilterType;

use crate::*;

/// Longest edge, in pixels, frames get when shown on screen.
pub const DEFAULT_MAX_DIMENSION: u32 = 600;

/// Target `(width, height)` for showing an image within `max_dimension`, or `None` if it already fits.
pub fn display_size(height: usize, width: usize, max_dimension: u32) -> Option<(u32, u32)> {
    let max_dimension = max_dimension.max(1);
    let longer = height.max(width);
    if longer <= max_dimension as usize {
        return None;
    }

    let factor = f64::from(max_dimension) / longer as f64;
    let scale = |len: usize| ((len as f64 * factor).round() as u32).clamp(1, max_dimension);
    Some((scale(width), scale(height)))
}

/// Shrink every frame so the longer edge is at most `max_dimension`, preserving aspect ratio.
pub fn rescale_for_display(frames: FrameSequence, max_dimension: u32) -> Result<FrameSequence> {
    let original = frames.original();
    let Some((width, height)) = display_size(original.height(), original.width(), max_dimension)
    else {
        return Ok(frames);
    };

    log::debug!(
        "Rescaling {} frames from {}x{} to {}x{}",
        frames.len(),
        original.width(),
        original.height(),
        width,
        height
    );
    frames.try_map(|frame| {
        let resized = to_image(&frame)?.resize_exact(width, height, FilterType::Triangle);
        from_image(resized)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    #[test]
    fn small_images_are_left_alone() {
        assert_eq!(display_size(600, 400, 600), None);
        assert_eq!(display_size(10, 10, 600), None);
    }

    #[test]
    fn longer_edge_is_capped() {
        assert_eq!(display_size(900, 1200, 600), Some((600, 450)));
        assert_eq!(display_size(1200, 300, 600), Some((150, 600)));
        assert_eq!(display_size(5000, 2, 600), Some((1, 600)));
    }

    #[test]
    fn rescaled_sequence_keeps_frame_count_and_shares_shape() {
        let raster = Raster::Color(Array3::from_elem((90, 120, 3), 77));
        let regions = partition_raster(&raster);
        let order = RevealSet::new(vec![2, 6]).unwrap();
        let frames = sequence(&raster, &regions, &order).unwrap();

        let rescaled = rescale_for_display(frames, 60).unwrap();

        assert_eq!(rescaled.len(), 4);
        assert_eq!(rescaled.revealed_indices(), &order);
        assert!(rescaled.iter().all(|frame| frame.shape() == [45, 60, 3]));
        assert_eq!(rescaled.mask().count_nonzero(), 0);
    }

    #[test]
    fn greyscale_stays_greyscale() {
        let raster = Raster::Greyscale(Array2::from_elem((40, 20), 1));
        let regions = partition_raster(&raster);
        let order = RevealSet::new(vec![1]).unwrap();
        let frames = sequence(&raster, &regions, &order).unwrap();

        let rescaled = rescale_for_display(frames, 10).unwrap();

        assert!(rescaled.original().is_greyscale());
        assert_eq!(rescaled.original().shape(), &[10, 5]);
    }
}
