//! Spatial data structures
//!
//! This module contains:
//! - The RGBA16 pixel buffer backing the canvas
//! - Tile rectangles and the tile-aligned canvas layout

/// Pixel buffer and canvas view helpers
pub mod buffer;
/// Tile geometry and canvas layout
pub mod geometry;

pub use buffer::PixelBuffer;
pub use geometry::{TileGeometry, TileLayout};
