//! PNG writing module
//!
//! This module encodes RGBA rasters into PNG streams: chunk framing,
//! the IHDR header, scanline framing and zlib-compressed IDAT data.

pub mod chunk;
pub mod data;
pub mod header;
pub mod scanline;
mod standard_png_writer;
pub mod types;
mod writer;


pub use chunk::{ChunkType, build_chunk, build_raw_chunk, chunk_crc, write_chunk};
pub use standard_png_writer::{PNG_SIGNATURE, StandardPngWriter, encode_png};
pub use types::{EncoderConfig, EncoderConfigBuilder, PngCompression};
pub use writer::PngWriter;
