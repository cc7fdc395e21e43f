//! Tests for decoding, resampling and atomic encoding of images

#[cfg(test)]
mod tests {
    use image::imageops::FilterType;
    use image::{ImageBuffer, Rgba};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use truchet_mosaic::io::image::{OutputFormat, read_source, resample, write_mosaic};
    use truchet_mosaic::spatial::buffer::Rgba16Image;
    use truchet_mosaic::{MosaicError, PixelBuffer, Stage};

    fn temp_dir() -> TempDir {
        let Ok(dir) = TempDir::new() else {
            unreachable!("cannot create temporary directory");
        };
        dir
    }

    fn pattern(width: u32, height: u32) -> Rgba16Image {
        ImageBuffer::from_fn(width, height, |x, y| {
            Rgba([(x * 4001) as u16, (y * 3001) as u16, 1234, 65535])
        })
    }

    // Tests extension matching, including case and both JPEG spellings
    #[test]
    fn test_output_format_from_extension() {
        let cases = [
            ("a.gif", OutputFormat::Gif),
            ("a.GIF", OutputFormat::Gif),
            ("a.jpg", OutputFormat::Jpeg),
            ("dir/a.jpeg", OutputFormat::Jpeg),
            ("a.Png", OutputFormat::Png),
        ];
        for (path, expected) in cases {
            assert!(
                matches!(OutputFormat::from_path(Path::new(path)), Ok(format) if format == expected),
                "{path} should map to {expected:?}"
            );
        }
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
    }

    // Tests unknown and missing extensions are rejected
    #[test]
    fn test_output_format_rejects_unknown() {
        let Err(error) = OutputFormat::from_path(Path::new("mosaic.bmp")) else {
            unreachable!("bmp accepted");
        };
        assert!(matches!(
            &error,
            MosaicError::UnsupportedFormat { extension, .. } if extension == "bmp"
        ));

        assert!(matches!(
            OutputFormat::from_path(Path::new("mosaic")),
            Err(MosaicError::UnsupportedFormat { extension, .. }) if extension.is_empty()
        ));
    }

    // Tests missing and corrupt sources fail at the read stage
    #[test]
    fn test_read_source_errors() {
        let dir = temp_dir();
        let missing = dir.path().join("missing.png");
        let corrupt = dir.path().join("corrupt.png");
        assert!(fs::write(&corrupt, b"definitely not an image").is_ok());

        for path in [&missing, &corrupt] {
            let Err(error) = read_source(path) else {
                unreachable!("{} decoded", path.display());
            };
            assert_eq!(error.stage(), Stage::Read);
            assert!(matches!(error, MosaicError::SourceRead { .. }));
        }
    }

    // Tests the decoder sniffs content rather than trusting the extension
    #[test]
    fn test_read_source_sniffs_format() {
        let dir = temp_dir();
        let path = dir.path().join("actually_png.jpg");
        let image = pattern(9, 4);
        assert!(image.save_with_format(&path, image::ImageFormat::Png).is_ok());

        let Ok(decoded) = read_source(&path) else {
            unreachable!("mislabelled PNG rejected");
        };
        assert_eq!(decoded, image);
    }

    // Tests resampling hits the exact requested size and skips no-op resizes
    #[test]
    fn test_resample_dimensions() {
        let source = pattern(13, 7);

        let resized = resample(&source, 32, 16, FilterType::Lanczos3);
        assert_eq!(resized.dimensions(), (32, 16));

        let unchanged = resample(&source, 13, 7, FilterType::Lanczos3);
        assert_eq!(unchanged, source);
    }

    // Tests PNG output keeps full 16-bit precision
    #[test]
    fn test_write_png_is_lossless() {
        let dir = temp_dir();
        let path = dir.path().join("mosaic.png");
        let buffer = PixelBuffer::from_rgba16(&pattern(12, 5));

        assert!(write_mosaic(&buffer, &path, OutputFormat::Png).is_ok());

        let Ok(decoded) = read_source(&path) else {
            unreachable!("written PNG unreadable");
        };
        assert_eq!(PixelBuffer::from_rgba16(&decoded), buffer);
    }

    // Tests lossy formats decode back to the same dimensions
    #[test]
    fn test_write_gif_and_jpeg() {
        let dir = temp_dir();
        let buffer = PixelBuffer::from_rgba16(&pattern(16, 8));

        for format in [OutputFormat::Gif, OutputFormat::Jpeg] {
            let path = dir.path().join(format!("mosaic.{}", format.extension()));
            assert!(write_mosaic(&buffer, &path, format).is_ok());

            let Ok(decoded) = read_source(&path) else {
                unreachable!("written {format:?} unreadable");
            };
            assert_eq!(decoded.dimensions(), (16, 8));
        }
    }

    // Tests an existing output is replaced and no temporary files remain
    #[test]
    fn test_write_replaces_existing_file() {
        let dir = temp_dir();
        let path = dir.path().join("mosaic.png");
        assert!(fs::write(&path, b"stale").is_ok());

        let buffer = PixelBuffer::filled(4, 4, [1, 2, 3, 65535]);
        assert!(write_mosaic(&buffer, &path, OutputFormat::Png).is_ok());

        assert!(read_source(&path).is_ok());
        let entries = fs::read_dir(dir.path()).map(Iterator::count).unwrap_or_default();
        assert_eq!(entries, 1);
    }

    // Tests writing into a missing directory fails before creating anything
    #[test]
    fn test_write_into_missing_directory() {
        let dir = temp_dir();
        let path = dir.path().join("absent").join("mosaic.png");
        let buffer = PixelBuffer::filled(4, 4, [1, 2, 3, 65535]);

        let result = write_mosaic(&buffer, &path, OutputFormat::Png);
        assert!(matches!(
            result,
            Err(MosaicError::FileSystem {
                operation: "create temporary file",
                ..
            })
        ));
        assert!(!path.exists());
    }

    // Tests GIF and JPEG refuse sides beyond 16 bits while PNG accepts them
    #[test]
    fn test_write_enforces_16_bit_limit_for_gif_and_jpeg() {
        let dir = temp_dir();
        let buffer = PixelBuffer::filled(65_536, 1, [1, 2, 3, 65535]);

        for format in [OutputFormat::Gif, OutputFormat::Jpeg] {
            let path = dir.path().join(format!("wide.{}", format.extension()));
            let Err(error) = write_mosaic(&buffer, &path, format) else {
                unreachable!("{format:?} accepted a 65536 pixel side");
            };
            assert_eq!(error.stage(), Stage::Encode);
            assert!(matches!(error, MosaicError::Encode { .. }));
            assert!(!path.exists());
        }

        let png = dir.path().join("wide.png");
        assert!(write_mosaic(&buffer, &png, OutputFormat::Png).is_ok());
        assert_eq!(OutputFormat::Png.max_dimension(), None);
    }

    // Tests overwriting keeps the replaced file's permission bits
    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = temp_dir();
        let buffer = PixelBuffer::filled(4, 4, [1, 2, 3, 65535]);

        for mode in [0o644, 0o640] {
            let path = dir.path().join(format!("mosaic_{mode:o}.png"));
            assert!(fs::write(&path, b"old").is_ok());
            assert!(fs::set_permissions(&path, fs::Permissions::from_mode(mode)).is_ok());

            assert!(write_mosaic(&buffer, &path, OutputFormat::Png).is_ok());

            let Ok(metadata) = fs::metadata(&path) else {
                unreachable!("output missing");
            };
            assert_eq!(metadata.permissions().mode() & 0o777, mode);
        }
    }

    // Tests a new output gets the same mode as any freshly created file
    #[cfg(unix)]
    #[test]
    fn test_new_output_follows_umask() {
        use std::os::unix::fs::PermissionsExt;

        let dir = temp_dir();
        let reference = dir.path().join("reference");
        let path = dir.path().join("mosaic.png");
        assert!(fs::File::create(&reference).is_ok());

        let buffer = PixelBuffer::filled(4, 4, [1, 2, 3, 65535]);
        assert!(write_mosaic(&buffer, &path, OutputFormat::Png).is_ok());

        let (Ok(expected), Ok(actual)) = (fs::metadata(&reference), fs::metadata(&path)) else {
            unreachable!("files missing");
        };
        assert_eq!(
            actual.permissions().mode() & 0o777,
            expected.permissions().mode() & 0o777
        );
    }
}
