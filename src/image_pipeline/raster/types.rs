//! Raster data types

use crate::image_pipeline::common::error::{EncodeError, Result};

/// A single 8-bit-per-channel RGBA pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Fully transparent black
    pub const TRANSPARENT: Pixel = Pixel::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channel bytes in R, G, B, A order
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<(u8, u8, u8, u8)> for Pixel {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<[u8; 4]> for Pixel {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

/// Rectangular, non-empty grid of pixels stored row-major.
///
/// Every constructor checks that the grid is at least 1x1, that all rows have
/// the same length and that both dimensions fit in 32 bits, so a `Raster`
/// that exists is always encodable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Raster {
    /// Builds a raster from a flat row-major pixel vector.
    ///
    /// # Errors
    ///
    /// * `EncodeError::InvalidArgument` - zero dimension, dimension above
    ///   `u32::MAX`, or `pixels.len() != width * height`
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self> {
        validate_dimensions(width, height)?;

        let expected = width.checked_mul(height).ok_or_else(|| {
            EncodeError::invalid_argument(format!("raster {}x{} overflows", width, height))
        })?;
        if pixels.len() != expected {
            return Err(EncodeError::invalid_argument(format!(
                "raster {}x{} expects {} pixels, got {}",
                width,
                height,
                expected,
                pixels.len()
            )));
        }

        Ok(Self { width, height, pixels })
    }

    /// Builds a raster from a sequence of rows, top to bottom.
    ///
    /// The first row defines the width; any row of a different length is
    /// rejected with `EncodeError::InvalidArgument`.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Pixel]>,
    {
        let mut width = None;
        let mut height = 0;
        let mut pixels = Vec::new();

        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(EncodeError::invalid_argument(format!(
                    "row {} has {} pixels, expected {}",
                    index,
                    row.len(),
                    expected
                )));
            }
            pixels.extend_from_slice(row);
            height += 1;
        }

        Self::new(width.unwrap_or(0), height, pixels)
    }

    /// A raster where every pixel has the same value
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self> {
        validate_dimensions(width, height)?;
        let len = width.checked_mul(height).ok_or_else(|| {
            EncodeError::invalid_argument(format!("raster {}x{} overflows", width, height))
        })?;
        Self::new(width, height, vec![pixel; len])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at column `x`, row `y`, or `None` outside the grid
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Rows in top-to-bottom order
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + '_ {
        self.pixels.chunks_exact(self.width)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(EncodeError::invalid_argument(format!(
            "raster dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    if u32::try_from(width).is_err() || u32::try_from(height).is_err() {
        return Err(EncodeError::invalid_argument(format!(
            "raster dimensions {}x{} do not fit in 32 bits",
            width, height
        )));
    }
    Ok(())
}
