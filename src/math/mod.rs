//! Mathematical utilities for the tile algorithm

/// Squared Euclidean distance between RGBA samples
pub mod metric;
