use tracing::debug;

use crate::image_pipeline::common::error::{EncodeError, Result};
use crate::image_pipeline::png::chunk::{ChunkType, build_chunk};

pub const IHDR_PAYLOAD_LEN: usize = 13;

pub const BIT_DEPTH: u8 = 8;
/// Truecolor with alpha
pub const COLOR_TYPE_RGBA: u8 = 6;
pub const COMPRESSION_METHOD_DEFLATE: u8 = 0;
pub const FILTER_METHOD_ADAPTIVE: u8 = 0;
pub const INTERLACE_NONE: u8 = 0;

/// IHDR payload for an 8-bit RGBA, non-interlaced image
pub fn header_payload(width: u32, height: u32) -> [u8; IHDR_PAYLOAD_LEN] {
    let mut payload = [0u8; IHDR_PAYLOAD_LEN];
    payload[0..4].copy_from_slice(&width.to_be_bytes());
    payload[4..8].copy_from_slice(&height.to_be_bytes());
    payload[8] = BIT_DEPTH;
    payload[9] = COLOR_TYPE_RGBA;
    payload[10] = COMPRESSION_METHOD_DEFLATE;
    payload[11] = FILTER_METHOD_ADAPTIVE;
    payload[12] = INTERLACE_NONE;
    payload
}

pub fn header_chunk(width: u32, height: u32) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(EncodeError::invalid_argument(format!(
            "header dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    debug!("Building IHDR for {}x{}", width, height);
    build_chunk(ChunkType::Ihdr, &header_payload(width, height))
}
