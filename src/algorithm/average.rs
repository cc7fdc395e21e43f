//! Foreground and whole-tile mean colors

use ndarray::ArrayView2;

use crate::algorithm::mask::DiagonalMask;
use crate::algorithm::orientation::Orientation;
use crate::io::error::{Result, computation_error};
use crate::spatial::buffer::{Pixel, pixel_at};
use crate::spatial::geometry::TileGeometry;

/// Running per-channel sums for a mean color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AverageColor {
    sums: [u64; 4],
    count: u64,
}

impl AverageColor {
    /// Empty accumulator
    pub const fn new() -> Self {
        Self {
            sums: [0; 4],
            count: 0,
        }
    }

    /// Add one sample
    pub fn add(&mut self, pixel: Pixel) {
        for (sum, channel) in self.sums.iter_mut().zip(pixel) {
            *sum += u64::from(channel);
        }
        self.count += 1;
    }

    /// Number of samples added
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Mean of each channel, truncated toward zero
    ///
    /// Returns `None` when no samples were added.
    pub fn finalize(&self) -> Option<Pixel> {
        if self.count == 0 {
            return None;
        }
        Some(
            self.sums
                .map(|sum| u16::try_from(sum / self.count).unwrap_or(u16::MAX)),
        )
    }
}

/// Fill colors computed for one oriented tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileColors {
    /// Mean of the pixels on the foreground side of the diagonal
    pub foreground: Pixel,
    /// Mean of every pixel in the tile
    pub background: Pixel,
    /// Number of foreground pixels the mean was taken over
    pub foreground_pixels: u64,
}

/// Average the foreground region and the whole tile in one pass
///
/// The background color is the mean of the full tile, not of the
/// background region alone.
///
/// # Errors
///
/// Returns a computation error if the tile extends outside `pixels` or the
/// foreground region turns out empty.
pub fn average(
    pixels: &ArrayView2<'_, Pixel>,
    geometry: &TileGeometry,
    orientation: Orientation,
) -> Result<TileColors> {
    let mask = DiagonalMask::new(orientation, geometry);
    let mut tile = AverageColor::new();
    let mut foreground = AverageColor::new();

    for y in geometry.rows() {
        for x in geometry.columns() {
            let pixel = pixel_at(pixels, x, y)?;
            tile.add(pixel);
            if !mask.is_background_at(x, y) {
                foreground.add(pixel);
            }
        }
    }

    let region = |accumulator: &AverageColor, name: &str| {
        accumulator.finalize().ok_or_else(|| {
            computation_error(
                "tile averaging",
                &format!(
                    "{name} region of tile at ({}, {}) is empty",
                    geometry.col_left, geometry.row_top
                ),
            )
        })
    };

    Ok(TileColors {
        foreground: region(&foreground, "foreground")?,
        background: region(&tile, "background")?,
        foreground_pixels: foreground.count(),
    })
}
