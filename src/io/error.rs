//! Error types and pipeline stage attribution for mosaic rendering

use std::fmt;
use std::path::PathBuf;

/// Pipeline stage an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Checking arguments and canvas sizing before any pixel is touched
    ///
    /// Resampling itself cannot fail, so it has no stage of its own.
    Validate,
    /// Opening and decoding the source image
    Read,
    /// Per-tile orientation selection, averaging and fill
    Render,
    /// Encoding and persisting the output image
    Encode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validate => "validate",
            Self::Read => "read",
            Self::Render => "render",
            Self::Encode => "encode",
        };
        f.write_str(name)
    }
}

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Source image is missing or cannot be decoded
    SourceRead {
        /// Path to the source image
        path: PathBuf,
        /// Underlying decoding or I/O error
        source: image::ImageError,
    },

    /// Output extension does not map to a known encoder
    UnsupportedFormat {
        /// Requested output path
        path: PathBuf,
        /// Extension found on the path (empty when there is none)
        extension: String,
    },

    /// Encoder failed while writing the mosaic
    Encode {
        /// Requested output path
        path: PathBuf,
        /// Underlying encoder error
        source: image::ImageError,
    },

    /// Parameter validation failed: a zero tile side, or a canvas too large
    /// to address
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// File system operation failed while persisting output
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// An internal invariant of the tile algorithm did not hold
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl MosaicError {
    /// Stage of the pipeline this error belongs to
    pub const fn stage(&self) -> Stage {
        match self {
            Self::SourceRead { .. } => Stage::Read,
            Self::InvalidParameter { .. } => Stage::Validate,
            Self::Computation { .. } => Stage::Render,
            Self::UnsupportedFormat { .. } | Self::Encode { .. } | Self::FileSystem { .. } => {
                Stage::Encode
            }
        }
    }
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.stage())?;
        match self {
            Self::SourceRead { path, source } => {
                write!(f, "Failed to read image '{}': {source}", path.display())
            }
            Self::UnsupportedFormat { path, extension } => {
                write!(
                    f,
                    "Unsupported output format '{extension}' for '{}' (expected gif, jpg, jpeg or png)",
                    path.display()
                )
            }
            Self::Encode { path, source } => {
                write!(f, "Failed to encode '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceRead { source, .. } | Self::Encode { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> MosaicError {
    MosaicError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
