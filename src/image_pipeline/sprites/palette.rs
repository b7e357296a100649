//! Labelled colours used to draw sprites

use std::collections::HashMap;

use crate::image_pipeline::raster::types::Pixel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swatch {
    Clear,
    Shadow,
    Fur,
    FurDark,
    Belly,
    Eye,
    Pupil,
    Nose,
}

impl Swatch {
    pub const ALL: [Swatch; 8] = [
        Swatch::Clear,
        Swatch::Shadow,
        Swatch::Fur,
        Swatch::FurDark,
        Swatch::Belly,
        Swatch::Eye,
        Swatch::Pupil,
        Swatch::Nose,
    ];
}

/// Mapping from swatch label to RGBA value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<Swatch, Pixel>,
}

impl Default for Palette {
    /// The grey tabby palette
    fn default() -> Self {
        let colors = HashMap::from([
            (Swatch::Clear, Pixel::new(0, 0, 0, 0)),
            (Swatch::Shadow, Pixel::new(0, 0, 0, 70)),
            (Swatch::Fur, Pixel::new(118, 116, 125, 255)),
            (Swatch::FurDark, Pixel::new(84, 83, 90, 255)),
            (Swatch::Belly, Pixel::new(164, 162, 173, 255)),
            (Swatch::Eye, Pixel::new(242, 201, 76, 255)),
            (Swatch::Pupil, Pixel::new(54, 49, 35, 255)),
            (Swatch::Nose, Pixel::new(226, 146, 146, 255)),
        ]);
        Self { colors }
    }
}

impl Palette {
    /// Returns a copy with `swatch` remapped to `pixel`
    pub fn with(mut self, swatch: Swatch, pixel: Pixel) -> Self {
        self.colors.insert(swatch, pixel);
        self
    }

    pub fn get(&self, swatch: Swatch) -> Pixel {
        self.colors.get(&swatch).copied().unwrap_or(Pixel::TRANSPARENT)
    }
}
