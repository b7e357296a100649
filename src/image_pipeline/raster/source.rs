use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::Raster;

pub trait RasterSource {
    fn render(&self) -> Result<Raster>;
}

impl RasterSource for Raster {
    fn render(&self) -> Result<Raster> {
        Ok(self.clone())
    }
}
