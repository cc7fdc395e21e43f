//! Tile rectangles and the tile-aligned canvas layout
//!
//! The canvas is always sized to a whole number of tiles in each direction,
//! so every tile is square and the same size. Tiles never overlap, which is
//! what allows rows of tiles to be rendered independently.

use std::ops::RangeInclusive;

use crate::io::error::{Result, invalid_parameter};

/// Inclusive pixel bounds of one square tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileGeometry {
    /// Leftmost pixel column
    pub col_left: usize,
    /// Rightmost pixel column
    pub col_right: usize,
    /// Topmost pixel row
    pub row_top: usize,
    /// Bottom pixel row
    pub row_bottom: usize,
}

impl TileGeometry {
    /// Tile whose top-left pixel is `(col_left, row_top)`
    ///
    /// A side of zero is treated as a single pixel.
    pub const fn new(col_left: usize, row_top: usize, side: usize) -> Self {
        let extent = side.saturating_sub(1);
        Self {
            col_left,
            col_right: col_left + extent,
            row_top,
            row_bottom: row_top + extent,
        }
    }

    /// Side length in pixels
    pub const fn side(&self) -> usize {
        self.col_right - self.col_left + 1
    }

    /// Number of pixels covered
    pub const fn area(&self) -> usize {
        self.side() * self.side()
    }

    /// Integer midpoint pixel as `(x, y)`
    pub const fn center(&self) -> (usize, usize) {
        (
            (self.col_left + self.col_right) / 2,
            (self.row_top + self.row_bottom) / 2,
        )
    }

    /// Corners as `(x, y)` in selection order: bottom-left, top-left, top-right, bottom-right
    pub const fn corners(&self) -> [(usize, usize); 4] {
        [
            (self.col_left, self.row_bottom),
            (self.col_left, self.row_top),
            (self.col_right, self.row_top),
            (self.col_right, self.row_bottom),
        ]
    }

    /// Pixel rows covered, top to bottom
    pub const fn rows(&self) -> RangeInclusive<usize> {
        self.row_top..=self.row_bottom
    }

    /// Pixel columns covered, left to right
    pub const fn columns(&self) -> RangeInclusive<usize> {
        self.col_left..=self.col_right
    }
}

/// Tile grid covering a source image, padded up to whole tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    tile_side: usize,
    num_cols: usize,
    num_rows: usize,
}

impl TileLayout {
    /// Compute the layout for a `source_width` x `source_height` image
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tile_side` is zero
    /// - The source has no pixels
    /// - A canvas side would not fit an image dimension (`u32`)
    pub fn new(source_width: usize, source_height: usize, tile_side: usize) -> Result<Self> {
        if tile_side == 0 {
            return Err(invalid_parameter(
                "tile_side",
                &tile_side,
                &"must be a positive number of pixels",
            ));
        }
        if source_width == 0 || source_height == 0 {
            return Err(invalid_parameter(
                "source",
                &format!("{source_width}x{source_height}"),
                &"image has no pixels",
            ));
        }

        let layout = Self {
            tile_side,
            num_cols: source_width.div_ceil(tile_side),
            num_rows: source_height.div_ceil(tile_side),
        };

        let overflows = |cells: usize| {
            cells
                .checked_mul(tile_side)
                .is_none_or(|side| u32::try_from(side).is_err())
        };
        if overflows(layout.num_cols) || overflows(layout.num_rows) {
            return Err(invalid_parameter(
                "tile_side",
                &tile_side,
                &format!("canvas for a {source_width}x{source_height} source overflows u32"),
            ));
        }

        Ok(layout)
    }

    /// Side length of every tile
    pub const fn tile_side(&self) -> usize {
        self.tile_side
    }

    /// Number of tile columns
    pub const fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Number of tile rows
    pub const fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Total number of tiles
    pub const fn tile_count(&self) -> usize {
        self.num_cols * self.num_rows
    }

    /// Canvas width in pixels
    pub const fn canvas_width(&self) -> usize {
        self.num_cols * self.tile_side
    }

    /// Canvas height in pixels
    pub const fn canvas_height(&self) -> usize {
        self.num_rows * self.tile_side
    }

    /// Tile at grid position (`col`, `row`)
    pub const fn tile(&self, col: usize, row: usize) -> Option<TileGeometry> {
        if col < self.num_cols && row < self.num_rows {
            Some(TileGeometry::new(
                col * self.tile_side,
                row * self.tile_side,
                self.tile_side,
            ))
        } else {
            None
        }
    }

    /// All tiles in row-major order, top to bottom and left to right
    pub fn tiles(&self) -> impl Iterator<Item = TileGeometry> + '_ {
        (0..self.num_rows)
            .flat_map(move |row| (0..self.num_cols).filter_map(move |col| self.tile(col, row)))
    }

    /// Tiles of a single tile row, in coordinates local to that band of pixel rows
    pub fn band_tiles(&self) -> impl Iterator<Item = TileGeometry> + '_ {
        (0..self.num_cols).filter_map(|col| self.tile(col, 0))
    }
}
