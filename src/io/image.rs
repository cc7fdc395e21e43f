//! Image source, resampler and sink collaborators
//!
//! Decoding sniffs the format from file content. Encoding picks the codec from
//! the output extension and writes through a temporary file in the destination
//! directory, so a failed run never leaves a partial image at the output path.
//! A replaced file keeps its permissions; a new one gets `0o666` minus the umask.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::{self, FilterType};
use image::error::{LimitError, LimitErrorKind};
use image::{DynamicImage, Frame, ImageError, ImageReader, ImageResult};
use log::debug;
use tempfile::{Builder, NamedTempFile};

use crate::io::configuration::{JPEG_QUALITY, MAX_16BIT_DIMENSION};
use crate::io::error::{MosaicError, Result};
use crate::spatial::buffer::{PixelBuffer, Rgba16Image};

/// Encoders available for the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Palette GIF with default quantization
    Gif,
    /// Baseline JPEG at maximum quality (alpha is dropped)
    Jpeg,
    /// 16-bit RGBA PNG at maximum compression
    Png,
}

impl OutputFormat {
    /// Select the encoder from the extension of `path`, ignoring case
    ///
    /// # Errors
    ///
    /// Returns an unsupported format error for any extension other than
    /// `gif`, `jpg`, `jpeg` or `png`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "gif" => Ok(Self::Gif),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            _ => Err(MosaicError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }

    /// Largest width or height the encoder can store, if it has a limit
    pub const fn max_dimension(self) -> Option<u32> {
        match self {
            Self::Gif | Self::Jpeg => Some(MAX_16BIT_DIMENSION),
            Self::Png => None,
        }
    }

    /// Canonical file extension
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Gif => "gif",
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }
}

/// Decode the image at `path` into 16-bit RGBA
///
/// # Errors
///
/// Returns a source read error if the file cannot be opened or decoded.
pub fn read_source(path: &Path) -> Result<Rgba16Image> {
    let source_error = |source: ImageError| MosaicError::SourceRead {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| source_error(ImageError::IoError(e)))?
        .decode()
        .map_err(source_error)?;

    debug!(
        "decoded '{}' ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.to_rgba16())
}

/// Resize `source` to exactly `width` x `height`
///
/// A source that already has the requested dimensions is returned unchanged.
pub fn resample(source: &Rgba16Image, width: u32, height: u32, filter: FilterType) -> Rgba16Image {
    if source.dimensions() == (width, height) {
        return source.clone();
    }
    imageops::resize(source, width, height, filter)
}

/// Encode `buffer` and atomically replace `path` with the result
///
/// The encoded bytes are flushed and synced to disk before the temporary file
/// is renamed over `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The buffer is larger than `format` can store
/// - The temporary file cannot be created next to `path`
/// - The encoder fails
/// - Flushing, syncing or renaming the file fails
pub fn write_mosaic(buffer: &PixelBuffer, path: &Path, format: OutputFormat) -> Result<()> {
    let encode_error = |source: ImageError| MosaicError::Encode {
        path: path.to_path_buf(),
        source,
    };
    if let Some(limit) = format.max_dimension() {
        let fits = |side: usize| u32::try_from(side).is_ok_and(|pixels| pixels <= limit);
        if !fits(buffer.width()) || !fits(buffer.height()) {
            return Err(encode_error(ImageError::Limits(LimitError::from_kind(
                LimitErrorKind::DimensionError,
            ))));
        }
    }

    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let fs_error = |operation: &'static str, target: &Path, source: std::io::Error| {
        MosaicError::FileSystem {
            path: target.to_path_buf(),
            operation,
            source,
        }
    };

    let mut temp = staging_file(&directory, path)
        .map_err(|e| fs_error("create temporary file", directory.as_path(), e))?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        encode(&DynamicImage::ImageRgba16(buffer.to_rgba16()), format, &mut writer)
            .map_err(encode_error)?;
        writer.flush().map_err(|e| fs_error("flush", path, e))?;
    }

    temp.as_file()
        .sync_all()
        .map_err(|e| fs_error("sync", path, e))?;
    temp.persist(path)
        .map_err(|e| fs_error("persist", path, e.error))?;

    debug!("wrote {} mosaic to '{}'", format.extension(), path.display());
    Ok(())
}

// Temporary file in `directory` carrying the mode `target` should end up with
fn staging_file(directory: &Path, target: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".truchet-");
    #[cfg(unix)]
    {
        use crate::io::configuration::NEW_OUTPUT_MODE;
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(NEW_OUTPUT_MODE));
    }
    let temp = builder.tempfile_in(directory)?;

    if let Ok(existing) = fs::metadata(target) {
        temp.as_file().set_permissions(existing.permissions())?;
    }
    Ok(temp)
}

// The encoder is dropped on return, which lets GIF write its trailer before the flush
fn encode<W: Write>(image: &DynamicImage, format: OutputFormat, writer: W) -> ImageResult<()> {
    match format {
        OutputFormat::Gif => {
            let mut encoder = GifEncoder::new(writer);
            encoder.encode_frame(Frame::new(image.to_rgba8()))
        }
        OutputFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8())
            .write_with_encoder(JpegEncoder::new_with_quality(writer, JPEG_QUALITY)),
        OutputFormat::Png => image.write_with_encoder(PngEncoder::new_with_quality(
            writer,
            CompressionType::Best,
            PngFilterType::Adaptive,
        )),
    }
}
