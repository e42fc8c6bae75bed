use crate::*;

/// Boundaries of the three cells along one axis.
///
/// The last boundary is `len - 1`, so the final pixel row/column is never part of any region.
fn axis_bounds(len: usize) -> [usize; GRID_SIDE + 1] {
    [0, len / 3, len * 2 / 3, len.saturating_sub(1)]
}

/// Split an image of the given size into the 3x3 grid of regions.
///
/// Columns form the outer loop, so region `k` sits at column `k / 3`, row `k % 3`.
pub fn partition(height: usize, width: usize) -> [Region; REGION_COUNT] {
    let x_bounds = axis_bounds(width);
    let y_bounds = axis_bounds(height);

    core::array::from_fn(|index| {
        let col = index / GRID_SIDE;
        let row = index % GRID_SIDE;
        Region::new(
            x_bounds[col],
            x_bounds[col + 1],
            y_bounds[row],
            y_bounds[row + 1],
        )
    })
}

pub fn partition_raster(raster: &Raster) -> [Region; REGION_COUNT] {
    partition(raster.height(), raster.width())
}

/// Checks that `regions` is a full partition that fits inside `raster`.
pub(crate) fn check_regions(raster: &Raster, regions: &[Region]) -> Result<()> {
    let (height, width) = (raster.height(), raster.width());
    if regions.len() != REGION_COUNT || !regions.iter().all(|r| r.fits(height, width)) {
        return Err(GameError::RegionMismatch);
    }
    Ok(())
}
