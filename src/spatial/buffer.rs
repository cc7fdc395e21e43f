//! Mutable RGBA16 pixel grid backing the mosaic canvas
//!
//! Pixels are stored row-major in an `ndarray` grid indexed `[row, col]`,
//! matching the `(y, x)` layout of the tile algorithm. Conversions to and
//! from `image` buffers happen only at the collaborator boundary.

use image::{ImageBuffer, Rgba};
use ndarray::{Array2, ArrayView2, ArrayViewMut2};

use crate::io::error::{Result, computation_error};

/// One non-premultiplied RGBA sample with 16 bits per channel
pub type Pixel = [u16; 4];

/// 16-bit RGBA image type exchanged with the image source, resampler and sink
pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Fully transparent black
pub const TRANSPARENT: Pixel = [0, 0, 0, 0];

/// In-memory canvas of RGBA16 pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Array2<Pixel>,
}

impl PixelBuffer {
    /// Create a transparent buffer of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, TRANSPARENT)
    }

    /// Create a buffer where every pixel has the same value
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), pixel),
        }
    }

    /// Copy an `image` buffer into a new pixel buffer
    pub fn from_rgba16(image: &Rgba16Image) -> Self {
        let mut buffer = Self::new(image.width() as usize, image.height() as usize);
        for (x, y, pixel) in image.enumerate_pixels() {
            if let Some(slot) = buffer.pixels.get_mut([y as usize, x as usize]) {
                *slot = pixel.0;
            }
        }
        buffer
    }

    /// Copy the buffer into an `image` buffer for encoding
    pub fn to_rgba16(&self) -> Rgba16Image {
        ImageBuffer::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            Rgba(self.get(x as usize, y as usize).unwrap_or(TRANSPARENT))
        })
    }

    /// Number of pixel columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of pixel rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Pixel at column `x`, row `y`, if inside the buffer
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        self.pixels.get([y, x]).copied()
    }

    /// Overwrite the pixel at column `x`, row `y`
    ///
    /// Returns `false` without writing when the coordinate is outside the buffer.
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> bool {
        self.pixels.get_mut([y, x]).map(|slot| *slot = pixel).is_some()
    }

    /// Read-only view used by the tile algorithm
    pub fn view(&self) -> ArrayView2<'_, Pixel> {
        self.pixels.view()
    }

    /// Mutable view used by the tile renderer
    pub fn view_mut(&mut self) -> ArrayViewMut2<'_, Pixel> {
        self.pixels.view_mut()
    }
}

/// Read one pixel from a canvas view
///
/// # Errors
///
/// Returns a computation error if `(x, y)` lies outside the view.
pub fn pixel_at(pixels: &ArrayView2<'_, Pixel>, x: usize, y: usize) -> Result<Pixel> {
    pixels.get([y, x]).copied().ok_or_else(|| {
        computation_error(
            "pixel lookup",
            &format!(
                "({x}, {y}) lies outside the {}x{} canvas",
                pixels.ncols(),
                pixels.nrows()
            ),
        )
    })
}
