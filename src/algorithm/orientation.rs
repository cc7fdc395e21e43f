//! Per-tile choice of diagonal orientation from corner contrast

use ndarray::ArrayView2;

use crate::io::error::Result;
use crate::math::metric::squared_distance;
use crate::spatial::buffer::{Pixel, pixel_at};
use crate::spatial::geometry::TileGeometry;

/// One of the four diagonal orientations a tile can take
///
/// Each orientation is named after the tile corner whose contrast with the
/// tile center selects it. Even orientations run the diagonal from the
/// top-left to the bottom-right interior corner; odd ones mirror it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Orientation 0
    BottomLeft,
    /// Orientation 1
    TopLeft,
    /// Orientation 2
    TopRight,
    /// Orientation 3
    BottomRight,
}

impl Orientation {
    /// All orientations in evaluation order
    pub const ALL: [Self; 4] = [
        Self::BottomLeft,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
    ];

    /// Numeric index in `0..4`
    pub const fn index(self) -> u8 {
        match self {
            Self::BottomLeft => 0,
            Self::TopLeft => 1,
            Self::TopRight => 2,
            Self::BottomRight => 3,
        }
    }

    /// Orientation for a numeric index, if in range
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::BottomLeft),
            1 => Some(Self::TopLeft),
            2 => Some(Self::TopRight),
            3 => Some(Self::BottomRight),
            _ => None,
        }
    }

    /// Whether the index is even
    pub const fn is_even(self) -> bool {
        self.index() % 2 == 0
    }

    /// Corner of `geometry` compared against the center, as `(x, y)`
    pub const fn corner(self, geometry: &TileGeometry) -> (usize, usize) {
        let [bottom_left, top_left, top_right, bottom_right] = geometry.corners();
        match self {
            Self::BottomLeft => bottom_left,
            Self::TopLeft => top_left,
            Self::TopRight => top_right,
            Self::BottomRight => bottom_right,
        }
    }
}

/// Pick the orientation whose corner differs most from the tile center
///
/// Corners are compared in the order of [`Orientation::ALL`] and only a
/// strictly larger distance replaces the current best, so ties go to the
/// earliest corner. A uniform tile therefore yields [`Orientation::BottomLeft`].
///
/// # Errors
///
/// Returns a computation error if the tile extends outside `pixels`.
pub fn select(pixels: &ArrayView2<'_, Pixel>, geometry: &TileGeometry) -> Result<Orientation> {
    let (center_x, center_y) = geometry.center();
    let reference = pixel_at(pixels, center_x, center_y)?;

    let mut best = Orientation::BottomLeft;
    let mut best_distance = None;
    for orientation in Orientation::ALL {
        let (x, y) = orientation.corner(geometry);
        let distance = squared_distance(reference, pixel_at(pixels, x, y)?);
        if best_distance.is_none_or(|current| distance > current) {
            best = orientation;
            best_distance = Some(distance);
        }
    }

    Ok(best)
}
