//! Input/output collaborators and ambient concerns
//!
//! Decoding, resampling and encoding wrap the `image` crate; the rest covers
//! the command line, configuration constants, progress display and errors.

/// Command-line parsing and the single-file processor
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types with pipeline stage attribution
pub mod error;
/// Image source, resampler and atomic image sink
pub mod image;
/// File-to-file rendering entry points
pub mod pipeline;
/// Progress sinks, including the terminal progress bar
pub mod progress;
