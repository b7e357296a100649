use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::png::types::EncoderConfig;
use crate::image_pipeline::raster::types::Raster;

pub trait PngWriter {
    fn encode(&self, raster: &Raster, config: &EncoderConfig) -> Result<Vec<u8>>;

    fn write_png(&self, raster: &Raster, output: &mut dyn Write, config: &EncoderConfig) -> Result<()> {
        let bytes = self.encode(raster, config)?;
        output.write_all(&bytes)?;
        Ok(())
    }
}
