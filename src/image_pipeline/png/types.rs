//! PNG encoder configuration types

use flate2::Compression;

/// Largest width or height a PNG header may declare (2^31 - 1)
pub const PNG_MAX_DIMENSION: u32 = (1 << 31) - 1;

/// zlib compression levels for the IDAT payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngCompression {
    /// Stored deflate blocks (level 0, largest output)
    Stored,
    /// Fastest compression (level 1)
    Fast,
    /// zlib's default level 6 (default)
    #[default]
    Balanced,
    /// Best compression (level 9, slowest)
    Best,
}

impl PngCompression {
    pub fn level(self) -> Compression {
        match self {
            PngCompression::Stored => Compression::none(),
            PngCompression::Fast => Compression::fast(),
            PngCompression::Balanced => Compression::default(),
            PngCompression::Best => Compression::best(),
        }
    }
}

/// Configuration for encoding a raster to PNG
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Compression level applied to the scanline buffer
    pub compression: PngCompression,
    /// Upper bound on width and height; `None` only keeps the PNG limit
    pub max_dimension: Option<u32>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            compression: PngCompression::Balanced,
            max_dimension: Some(PNG_MAX_DIMENSION),
        }
    }
}

impl EncoderConfig {
    pub fn builder() -> EncoderConfigBuilder {
        EncoderConfigBuilder::default()
    }

    /// Effective dimension limit, never above what the format allows
    pub fn dimension_limit(&self) -> u32 {
        self.max_dimension
            .map_or(PNG_MAX_DIMENSION, |max| max.min(PNG_MAX_DIMENSION))
    }
}

/// Builder for EncoderConfig
#[derive(Default)]
pub struct EncoderConfigBuilder {
    compression: Option<PngCompression>,
    max_dimension: Option<Option<u32>>,
}

impl EncoderConfigBuilder {
    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> EncoderConfig {
        let default = EncoderConfig::default();
        EncoderConfig {
            compression: self.compression.unwrap_or(default.compression),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
