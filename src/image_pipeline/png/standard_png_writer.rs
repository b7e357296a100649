use tracing::debug;

use crate::image_pipeline::common::error::{EncodeError, Result};
use crate::image_pipeline::png::chunk::{CHUNK_OVERHEAD, ChunkType, write_chunk};
use crate::image_pipeline::png::data::compress_scanlines;
use crate::image_pipeline::png::header::{IHDR_PAYLOAD_LEN, header_payload};
use crate::image_pipeline::png::scanline::frame_scanlines;
use crate::image_pipeline::png::types::EncoderConfig;
use crate::image_pipeline::png::writer::PngWriter;
use crate::image_pipeline::raster::types::Raster;

/// Fixed 8-byte PNG file signature
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Encodes a raster as signature, IHDR, a single IDAT and IEND.
pub struct StandardPngWriter;

impl StandardPngWriter {
    fn validate(raster: &Raster, config: &EncoderConfig) -> Result<(u32, u32)> {
        let limit = config.dimension_limit();
        let (width, height) = (raster.width(), raster.height());

        let checked = |value: usize| u32::try_from(value).ok().filter(|v| (1..=limit).contains(v));
        match (checked(width), checked(height)) {
            (Some(w), Some(h)) => Ok((w, h)),
            _ => Err(EncodeError::invalid_argument(format!(
                "image dimensions {}x{} outside 1..={}",
                width, height, limit
            ))),
        }
    }
}

impl PngWriter for StandardPngWriter {
    fn encode(&self, raster: &Raster, config: &EncoderConfig) -> Result<Vec<u8>> {
        let (width, height) = Self::validate(raster, config)?;
        debug!("Encoding PNG image: {}x{}", width, height);

        let scanlines = frame_scanlines(raster);
        let compressed = compress_scanlines(&scanlines, config.compression)?;

        let mut png = Vec::with_capacity(
            PNG_SIGNATURE.len() + IHDR_PAYLOAD_LEN + compressed.len() + 3 * CHUNK_OVERHEAD,
        );
        png.extend_from_slice(&PNG_SIGNATURE);
        write_chunk(&mut png, ChunkType::Ihdr, &header_payload(width, height))?;
        write_chunk(&mut png, ChunkType::Idat, &compressed)?;
        write_chunk(&mut png, ChunkType::Iend, &[])?;

        debug!("PNG encoding complete: {} bytes", png.len());
        Ok(png)
    }
}

/// Encodes `raster` with the default configuration
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>> {
    StandardPngWriter.encode(raster, &EncoderConfig::default())
}
