//! Mosaic driver: canvas sizing, resampling and the tile loop
//!
//! The source is resampled onto a canvas that holds a whole number of tiles,
//! then every tile is rendered. Sequential runs visit tiles in row-major order.
//! Each tile reads and writes only its own rectangle, so parallel runs hand
//! tile rows ("bands") to separate rayon workers without changing the result.

use std::sync::atomic::{AtomicUsize, Ordering};

use image::imageops::FilterType;
use log::debug;
use ndarray::{ArrayViewMut2, Axis};
use rayon::prelude::{IntoParallelIterator, ParallelIterator};

use crate::algorithm::render::render;
use crate::io::configuration::{DEFAULT_TILE_SIDE, RESAMPLE_FILTER};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::resample;
use crate::io::progress::{NoProgress, ProgressSink};
use crate::spatial::buffer::{Pixel, PixelBuffer, Rgba16Image};
use crate::spatial::geometry::TileLayout;

static NO_PROGRESS: NoProgress = NoProgress;

/// Runtime parameters for one mosaic run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MosaicConfig {
    /// Side length in pixels of each square tile
    pub tile_side: usize,
    /// Filter used to fit the source onto the canvas
    pub filter: FilterType,
    /// Render tile rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            tile_side: DEFAULT_TILE_SIDE,
            filter: RESAMPLE_FILTER,
            parallel: true,
        }
    }
}

impl MosaicConfig {
    /// Default configuration with the given tile side
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `tile_side` is zero
    pub fn new(tile_side: usize) -> Result<Self> {
        if tile_side == 0 {
            return Err(invalid_parameter(
                "tile_side",
                &tile_side,
                &"must be a positive number of pixels",
            ));
        }
        Ok(Self {
            tile_side,
            ..Self::default()
        })
    }

    /// Enable or disable parallel tile rendering
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Replace the resampling filter
    #[must_use]
    pub const fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }
}

/// Builds a Truchet mosaic from a decoded source image
pub struct MosaicBuilder<'a> {
    config: MosaicConfig,
    progress: &'a dyn ProgressSink,
}

impl MosaicBuilder<'static> {
    /// Create a builder that reports no progress
    pub fn new(config: MosaicConfig) -> Self {
        Self {
            config,
            progress: &NO_PROGRESS,
        }
    }
}

impl MosaicBuilder<'_> {
    /// Report each completed tile to `progress`
    pub fn with_progress<'p>(self, progress: &'p dyn ProgressSink) -> MosaicBuilder<'p> {
        MosaicBuilder {
            config: self.config,
            progress,
        }
    }

    /// Configuration in use
    pub const fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// Resample `source` onto a tile-aligned canvas and render every tile
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile side is zero or the canvas would be too large
    /// - The source image has no pixels
    /// - A tile computation fails
    pub fn build(&self, source: &Rgba16Image) -> Result<PixelBuffer> {
        let layout = TileLayout::new(
            source.width() as usize,
            source.height() as usize,
            self.config.tile_side,
        )?;
        debug!(
            "{}x{} source -> {}x{} canvas of {}x{} tiles",
            source.width(),
            source.height(),
            layout.canvas_width(),
            layout.canvas_height(),
            layout.num_cols(),
            layout.num_rows()
        );

        let resized = resample(
            source,
            layout.canvas_width() as u32,
            layout.canvas_height() as u32,
            self.config.filter,
        );
        let mut canvas = PixelBuffer::from_rgba16(&resized);
        self.render_tiles(&mut canvas, &layout)?;
        Ok(canvas)
    }

    /// Render every tile of a canvas that is already tile-aligned
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas dimensions are not whole multiples of the
    /// tile side, or a tile computation fails.
    pub fn render_canvas(&self, canvas: &mut PixelBuffer) -> Result<TileLayout> {
        let layout = TileLayout::new(canvas.width(), canvas.height(), self.config.tile_side)?;
        if layout.canvas_width() != canvas.width() || layout.canvas_height() != canvas.height() {
            return Err(invalid_parameter(
                "canvas",
                &format!("{}x{}", canvas.width(), canvas.height()),
                &format!("dimensions must be multiples of the tile side {}", layout.tile_side()),
            ));
        }
        self.render_tiles(canvas, &layout)?;
        Ok(layout)
    }

    fn render_tiles(&self, canvas: &mut PixelBuffer, layout: &TileLayout) -> Result<()> {
        let total = layout.tile_count();
        let completed = AtomicUsize::new(0);
        let report = || {
            let count = completed.fetch_add(1, Ordering::Relaxed) + 1;
            self.progress.tile_completed(count, total);
        };

        let mut view = canvas.view_mut();
        if self.config.parallel {
            // Band-local coordinates: every band starts at pixel row 0
            view.axis_chunks_iter_mut(Axis(0), layout.tile_side())
                .into_par_iter()
                .try_for_each(|mut band: ArrayViewMut2<'_, Pixel>| -> Result<()> {
                    for geometry in layout.band_tiles() {
                        render(&mut band, &geometry)?;
                        report();
                    }
                    Ok(())
                })
        } else {
            layout.tiles().try_for_each(|geometry| -> Result<()> {
                render(&mut view, &geometry)?;
                report();
                Ok(())
            })
        }
    }
}
