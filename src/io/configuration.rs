//! Rendering constants and runtime configuration defaults

use image::imageops::FilterType;

/// Tile side used when none is given on the command line
pub const DEFAULT_TILE_SIDE: usize = 32;

/// Interpolation filter for fitting the source onto the tile-aligned canvas
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

// Output settings
/// JPEG quality used for `.jpg` and `.jpeg` output
pub const JPEG_QUALITY: u8 = 100;

/// Largest width or height GIF and JPEG can store (16-bit header fields)
pub const MAX_16BIT_DIMENSION: u32 = 65_535;

/// Mode requested for newly created output files, before the umask applies
pub const NEW_OUTPUT_MODE: u32 = 0o666;

// Progress bar display settings
/// Width of the tile progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;

/// Log filter applied when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Log filter applied with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "debug";
