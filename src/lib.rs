//! Truchet tile mosaics from raster images
//!
//! The source is resampled onto a canvas holding a whole number of square
//! tiles. Each tile is then split along the diagonal that best separates its
//! most contrasting corner from its center, and the two halves are filled with
//! the foreground and whole-tile average colors.

#![forbid(unsafe_code)]

/// Per-tile orientation, masking, averaging and the mosaic driver
pub mod algorithm;
/// Input/output collaborators, configuration, progress and error handling
pub mod io;
/// Color metrics
pub mod math;
/// Pixel storage and tile geometry
pub mod spatial;

pub use algorithm::builder::{MosaicBuilder, MosaicConfig};
pub use io::error::{MosaicError, Result, Stage};
pub use io::pipeline::{render_mosaic, render_mosaic_with};
pub use spatial::buffer::PixelBuffer;
