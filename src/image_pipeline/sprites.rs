//! Sprite drawing module
//!
//! Palette-driven pixel art that renders into rasters for the PNG encoder.

pub mod canvas;
pub mod cat;
pub mod palette;

pub use canvas::Canvas;
pub use cat::{CatPose, CatSprite, SPRITE_HEIGHT, SPRITE_WIDTH};
pub use palette::{Palette, Swatch};
