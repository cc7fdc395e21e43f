//! In-place rendering of a single Truchet tile

use ndarray::ArrayViewMut2;

use crate::algorithm::average::{TileColors, average};
use crate::algorithm::mask::DiagonalMask;
use crate::algorithm::orientation::{Orientation, select};
use crate::io::error::{Result, computation_error};
use crate::spatial::buffer::Pixel;
use crate::spatial::geometry::TileGeometry;

/// Outcome of rendering one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedTile {
    /// Orientation chosen for the tile
    pub orientation: Orientation,
    /// Colors the tile was filled with
    pub colors: TileColors,
}

/// Replace a tile's pixels with its two-color Truchet rendition
///
/// Orientation and colors are computed from the pixels currently in the tile,
/// so this must run exactly once per tile on the unrendered canvas. Running it
/// again on its own output averages already flattened colors.
///
/// # Errors
///
/// Returns a computation error if the tile extends outside `pixels`.
pub fn render(
    pixels: &mut ArrayViewMut2<'_, Pixel>,
    geometry: &TileGeometry,
) -> Result<RenderedTile> {
    let orientation = select(&pixels.view(), geometry)?;
    let colors = average(&pixels.view(), geometry, orientation)?;
    let mask = DiagonalMask::new(orientation, geometry);

    for y in geometry.rows() {
        for x in geometry.columns() {
            let slot = pixels.get_mut([y, x]).ok_or_else(|| {
                computation_error("tile fill", &format!("({x}, {y}) lies outside the canvas"))
            })?;
            *slot = if mask.is_background_at(x, y) {
                colors.background
            } else {
                colors.foreground
            };
        }
    }

    Ok(RenderedTile {
        orientation,
        colors,
    })
}
