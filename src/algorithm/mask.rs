//! Foreground/background split of a tile along its diagonal
//!
//! The boundary's x position moves linearly from one end column at the top
//! row to the other at the bottom row. Even orientations start at the left
//! column, odd orientations at the right.

use crate::algorithm::orientation::Orientation;
use crate::spatial::geometry::TileGeometry;

/// Whether column `x` is background given the boundary position on its row
pub fn is_background(orientation: Orientation, x: f64, boundary: f64) -> bool {
    if orientation.is_even() {
        x > boundary
    } else {
        x < boundary
    }
}

/// Diagonal boundary of one oriented tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagonalMask {
    orientation: Orientation,
    x_top: f64,
    x_delta: f64,
    row_top: usize,
    y_delta: usize,
}

impl DiagonalMask {
    /// Build the boundary for `geometry` under `orientation`
    pub fn new(orientation: Orientation, geometry: &TileGeometry) -> Self {
        let (x_top, x_bottom) = if orientation.is_even() {
            (geometry.col_left as f64, geometry.col_right as f64)
        } else {
            (geometry.col_right as f64, geometry.col_left as f64)
        };

        Self {
            orientation,
            x_top,
            x_delta: x_bottom - x_top,
            row_top: geometry.row_top,
            y_delta: geometry.row_bottom - geometry.row_top,
        }
    }

    /// Boundary x position on pixel row `y`
    ///
    /// A single-row tile has no vertical extent; its boundary sits at the top end.
    // A fused multiply-add rounds differently and moves pixels lying exactly on the diagonal
    #[allow(clippy::suboptimal_flops)]
    pub fn boundary_at(&self, y: usize) -> f64 {
        let lambda = if self.y_delta == 0 {
            0.0
        } else {
            y.saturating_sub(self.row_top) as f64 / self.y_delta as f64
        };
        self.x_top + lambda * self.x_delta
    }

    /// Whether pixel `(x, y)` falls in the background region
    pub fn is_background_at(&self, x: usize, y: usize) -> bool {
        is_background(self.orientation, x as f64, self.boundary_at(y))
    }
}
