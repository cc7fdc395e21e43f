//! File-to-file mosaic rendering

use std::path::Path;
use std::time::Instant;

use log::info;

use crate::algorithm::builder::{MosaicBuilder, MosaicConfig};
use crate::io::error::Result;
use crate::io::image::{OutputFormat, read_source, write_mosaic};
use crate::io::progress::{NoProgress, ProgressSink};

/// Render `input` as a mosaic of `tile_side` pixel tiles and save it to `output`
///
/// The output extension selects the encoder: `.gif`, `.jpg`/`.jpeg` or `.png`.
///
/// # Errors
///
/// See [`render_mosaic_with`].
pub fn render_mosaic(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    tile_side: usize,
) -> Result<()> {
    let config = MosaicConfig::new(tile_side)?;
    render_mosaic_with(input.as_ref(), output.as_ref(), &config, &NoProgress)
}

/// Render with explicit configuration and progress reporting
///
/// The output format is checked before the source is read, and the output file
/// is only replaced once the encoded image is fully on disk.
///
/// # Errors
///
/// Returns an error if:
/// - The output extension is not a supported format
/// - The source cannot be read or decoded
/// - The tile side is zero or yields an oversized canvas
/// - Encoding or persisting the output fails
pub fn render_mosaic_with(
    input: &Path,
    output: &Path,
    config: &MosaicConfig,
    progress: &dyn ProgressSink,
) -> Result<()> {
    let start = Instant::now();
    let format = OutputFormat::from_path(output)?;
    let source = read_source(input)?;

    let mosaic = MosaicBuilder::new(*config)
        .with_progress(progress)
        .build(&source)?;
    write_mosaic(&mosaic, output, format)?;

    info!(
        "Mosaic \"{}\" created in {:.2?}",
        output.display(),
        start.elapsed()
    );
    Ok(())
}
