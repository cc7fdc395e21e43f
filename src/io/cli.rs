//! Command-line interface for rendering a single image as a Truchet mosaic

use crate::algorithm::builder::MosaicConfig;
use crate::io::configuration::{DEFAULT_LOG_FILTER, DEFAULT_TILE_SIDE, VERBOSE_LOG_FILTER};
use crate::io::error::Result;
use crate::io::pipeline::render_mosaic_with;
use crate::io::progress::{NoProgress, TileProgress};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "truchet")]
#[command(author, version, about = "Render an image as a mosaic of Truchet tiles")]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Source image (GIF, JPEG, PNG or any other decodable format)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output image; the extension selects the encoder (.gif, .jpg, .jpeg, .png)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Side length in pixels of each square tile
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIDE)]
    pub tile_side: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render tiles on a single thread
    #[arg(short, long)]
    pub sequential: bool,

    /// Log canvas geometry and timings
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter when `RUST_LOG` is unset
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}

/// Runs one mosaic render described by the command line
pub struct FileProcessor {
    cli: Cli,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Configuration derived from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the tile side is zero
    pub fn config(&self) -> Result<MosaicConfig> {
        Ok(MosaicConfig::new(self.cli.tile_side)?.with_parallel(!self.cli.sequential))
    }

    /// Render the input image to the output path
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, decoding, rendering or encoding fails
    pub fn process(&self) -> Result<()> {
        let config = self.config()?;

        if self.cli.should_show_progress() {
            let progress = TileProgress::new(&self.cli.input);
            let result = render_mosaic_with(&self.cli.input, &self.cli.output, &config, &progress);
            progress.finish();
            result
        } else {
            render_mosaic_with(&self.cli.input, &self.cli.output, &config, &NoProgress)
        }
    }
}
