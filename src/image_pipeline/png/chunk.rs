//! Chunk framing: length, type tag, payload and CRC-32 trailer.

use std::fmt;

use flate2::Crc;

use crate::image_pipeline::common::error::{EncodeError, Result};

/// Largest payload a chunk length field may declare (2^31 - 1)
pub const MAX_CHUNK_PAYLOAD: usize = (1 << 31) - 1;

/// Length field, type tag and CRC trailer
pub const CHUNK_OVERHEAD: usize = 12;

/// The three chunk types this encoder emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkType {
    /// Image header
    Ihdr,
    /// Compressed image data
    Idat,
    /// End of stream marker
    Iend,
}

impl ChunkType {
    pub const fn tag(self) -> &'static [u8; 4] {
        match self {
            ChunkType::Ihdr => b"IHDR",
            ChunkType::Idat => b"IDAT",
            ChunkType::Iend => b"IEND",
        }
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Tags are ASCII by construction.
        let tag = self.tag();
        write!(
            f,
            "{}{}{}{}",
            tag[0] as char, tag[1] as char, tag[2] as char, tag[3] as char
        )
    }
}

impl TryFrom<&[u8]> for ChunkType {
    type Error = EncodeError;

    fn try_from(tag: &[u8]) -> Result<Self> {
        match tag {
            b"IHDR" => Ok(ChunkType::Ihdr),
            b"IDAT" => Ok(ChunkType::Idat),
            b"IEND" => Ok(ChunkType::Iend),
            _ if tag.len() != 4 => Err(EncodeError::invalid_argument(format!(
                "chunk type tag must be 4 bytes, got {}",
                tag.len()
            ))),
            _ => Err(EncodeError::invalid_argument(format!(
                "unsupported chunk type {:?}",
                String::from_utf8_lossy(tag)
            ))),
        }
    }
}

/// CRC-32 (ISO-HDLC, as used by zlib) over `tag ++ payload`
pub fn chunk_crc(tag: &[u8; 4], payload: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(tag);
    crc.update(payload);
    crc.sum()
}

/// Appends one serialized chunk to `out`.
///
/// Layout: big-endian payload length, type tag, payload, big-endian CRC-32 of
/// tag and payload. `out` is left untouched on error.
pub fn write_chunk(out: &mut Vec<u8>, chunk_type: ChunkType, payload: &[u8]) -> Result<()> {
    if payload.len() > MAX_CHUNK_PAYLOAD {
        return Err(EncodeError::invalid_argument(format!(
            "{} payload of {} bytes exceeds chunk limit",
            chunk_type,
            payload.len()
        )));
    }
    // Bounded by MAX_CHUNK_PAYLOAD above.
    let len = payload.len() as u32;
    let tag = chunk_type.tag();

    out.reserve(payload.len() + CHUNK_OVERHEAD);
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    out.extend_from_slice(&chunk_crc(tag, payload).to_be_bytes());
    Ok(())
}

/// Serializes a single chunk into a fresh buffer
pub fn build_chunk(chunk_type: ChunkType, payload: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(payload.len() + CHUNK_OVERHEAD);
    write_chunk(&mut out, chunk_type, payload)?;
    Ok(out)
}

/// Like [`build_chunk`], for a caller-supplied raw tag
pub fn build_raw_chunk(tag: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    build_chunk(ChunkType::try_from(tag)?, payload)
}
