//! Raster data model
//!
//! In-memory RGBA pixel grids and the trait for anything that produces one.

mod source;
pub mod types;

pub use source::RasterSource;
pub use types::{Pixel, Raster};
