use std::io::Write;

use flate2::write::ZlibEncoder;
use tracing::debug;

use crate::image_pipeline::common::error::{EncodeError, Result};
use crate::image_pipeline::png::chunk::{ChunkType, build_chunk};
use crate::image_pipeline::png::types::PngCompression;

/// Compresses the whole scanline buffer as a single zlib stream
/// (deflate data with the zlib header and Adler-32 trailer).
pub fn compress_scanlines(scanlines: &[u8], compression: PngCompression) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(
        Vec::with_capacity(scanlines.len() / 2 + 64),
        compression.level(),
    );
    encoder
        .write_all(scanlines)
        .map_err(|e| EncodeError::encoding_failure(e.to_string()))?;
    let compressed = encoder
        .finish()
        .map_err(|e| EncodeError::encoding_failure(e.to_string()))?;

    debug!(
        "Compressed {} scanline bytes to {} ({:?})",
        scanlines.len(),
        compressed.len(),
        compression
    );
    Ok(compressed)
}

/// Compresses `scanlines` and wraps the result in an IDAT chunk
pub fn data_chunk(scanlines: &[u8], compression: PngCompression) -> Result<Vec<u8>> {
    let compressed = compress_scanlines(scanlines, compression)?;
    build_chunk(ChunkType::Idat, &compressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    fn inflate(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        ZlibDecoder::new(data).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_every_level_inflates_back() {
        let scanlines: Vec<u8> = (0..600u32).map(|i| (i % 7) as u8).collect();

        for compression in [
            PngCompression::Stored,
            PngCompression::Fast,
            PngCompression::Balanced,
            PngCompression::Best,
        ] {
            let compressed = compress_scanlines(&scanlines, compression).unwrap();
            assert_eq!(inflate(&compressed), scanlines, "{:?}", compression);
        }
    }

    #[test]
    fn test_zlib_header_present() {
        let compressed = compress_scanlines(&[0, 0, 0, 0, 0], PngCompression::Balanced).unwrap();

        // CMF: deflate with a 32K window.
        assert_eq!(compressed[0], 0x78);
        assert_eq!((((compressed[0] as u16) << 8) | compressed[1] as u16) % 31, 0);
    }

    #[test]
    fn test_data_chunk_payload_is_compressed_stream() {
        let scanlines = [0u8, 255, 0, 0, 255, 0, 255, 0, 255];
        let chunk = data_chunk(&scanlines, PngCompression::Balanced).unwrap();

        let len = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as usize;
        assert_eq!(&chunk[4..8], b"IDAT");
        assert_eq!(chunk.len(), len + 12);
        assert_eq!(inflate(&chunk[8..8 + len]), scanlines);
    }
}
