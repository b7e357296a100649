//! Image processing pipeline module
//!
//! This module provides a structured approach to producing PNG sprites,
//! with separate modules for the raster model, sprite drawing, PNG encoding
//! and conversion orchestration.

pub mod raster;
pub mod sprites;
pub mod png;
pub mod conversions;
pub mod common;

pub use common::{
    EncodeError,
    Result,
};

pub use raster::{
    Pixel,
    Raster,
    RasterSource,
};

pub use sprites::{
    CatPose,
    CatSprite,
    Palette,
    Swatch,
};

pub use png::{
    EncoderConfig,
    EncoderConfigBuilder,
    PngCompression,
    PngWriter,
    StandardPngWriter,
    encode_png,
};

pub use conversions::{
    RasterToPngPipeline,
};
