use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::{Pixel, Raster};

/// Mutable pixel surface for drawing sprites.
///
/// Coordinates are signed; writes outside the surface are dropped, so shapes
/// may be drawn partially off-canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Canvas {
    pub fn blank(width: usize, height: usize, fill: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Pixel) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Fills the rectangle spanning both corners, inclusive
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Pixel) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set_pixel(x, y, color);
            }
        }
    }

    pub fn into_raster(self) -> Result<Raster> {
        Raster::new(self.width, self.height, self.pixels)
    }
}
