//! Pipeline conversions module
//!
//! This module contains orchestration logic for rendering rasters to PNG sinks.

mod raster_to_png;


pub use raster_to_png::RasterToPngPipeline;
