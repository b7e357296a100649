//! The 32x32 pixel-art cat in its three poses.

use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::RasterSource;
use crate::image_pipeline::raster::types::Raster;
use crate::image_pipeline::sprites::canvas::Canvas;
use crate::image_pipeline::sprites::palette::{Palette, Swatch};

pub const SPRITE_WIDTH: usize = 32;
pub const SPRITE_HEIGHT: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatPose {
    Idle,
    Walk,
    Sleep,
}

impl CatPose {
    pub const ALL: [CatPose; 3] = [CatPose::Idle, CatPose::Walk, CatPose::Sleep];

    pub fn name(self) -> &'static str {
        match self {
            CatPose::Idle => "idle",
            CatPose::Walk => "walk",
            CatPose::Sleep => "sleep",
        }
    }

    pub fn file_name(self) -> String {
        format!("cat_{}.png", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct CatSprite {
    pub pose: CatPose,
    pub palette: Palette,
}

impl CatSprite {
    pub fn new(pose: CatPose) -> Self {
        Self {
            pose,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(pose: CatPose, palette: Palette) -> Self {
        Self { pose, palette }
    }

    pub fn draw(&self) -> Canvas {
        let base = self.draw_base();
        match self.pose {
            CatPose::Idle => base,
            CatPose::Walk => self.walk_frame(base),
            CatPose::Sleep => self.sleep_frame(base),
        }
    }

    fn draw_base(&self) -> Canvas {
        let c = |swatch| self.palette.get(swatch);
        let mut img = Canvas::blank(SPRITE_WIDTH, SPRITE_HEIGHT, c(Swatch::Clear));

        // Ground shadow
        for x in 6..26 {
            img.set_pixel(x, 28, c(Swatch::Shadow));
            img.set_pixel(x, 29, c(Swatch::Shadow));
        }

        // Tail
        img.fill_rect(22, 18, 26, 22, c(Swatch::Fur));
        img.fill_rect(24, 20, 26, 22, c(Swatch::Belly));
        img.set_pixel(26, 17, c(Swatch::FurDark));
        img.set_pixel(25, 17, c(Swatch::FurDark));

        // Body
        img.fill_rect(8, 18, 23, 25, c(Swatch::Fur));
        img.fill_rect(12, 20, 19, 24, c(Swatch::Belly));
        for x in 8..24 {
            img.set_pixel(x, 18, c(Swatch::FurDark));
            img.set_pixel(x, 25, c(Swatch::FurDark));
        }
        for y in 18..26 {
            img.set_pixel(8, y, c(Swatch::FurDark));
            img.set_pixel(23, y, c(Swatch::FurDark));
        }

        // Paws
        img.fill_rect(11, 25, 13, 26, c(Swatch::FurDark));
        img.fill_rect(18, 25, 20, 26, c(Swatch::FurDark));

        // Head
        img.fill_rect(10, 9, 21, 17, c(Swatch::Fur));
        for x in 10..22 {
            img.set_pixel(x, 9, c(Swatch::FurDark));
            img.set_pixel(x, 17, c(Swatch::FurDark));
        }
        for y in 9..18 {
            img.set_pixel(10, y, c(Swatch::FurDark));
            img.set_pixel(21, y, c(Swatch::FurDark));
        }

        // Ears
        img.fill_rect(10, 7, 12, 9, c(Swatch::FurDark));
        img.fill_rect(19, 7, 21, 9, c(Swatch::FurDark));
        img.set_pixel(11, 7, c(Swatch::Fur));
        img.set_pixel(20, 7, c(Swatch::Fur));

        // Face
        img.set_pixel(13, 13, c(Swatch::Eye));
        img.set_pixel(18, 13, c(Swatch::Eye));
        img.set_pixel(13, 14, c(Swatch::Pupil));
        img.set_pixel(18, 14, c(Swatch::Pupil));
        img.set_pixel(15, 15, c(Swatch::Nose));
        img.set_pixel(14, 16, c(Swatch::FurDark));
        img.set_pixel(16, 16, c(Swatch::FurDark));
        img.set_pixel(15, 17, c(Swatch::FurDark));

        // Cheeks
        img.set_pixel(12, 15, c(Swatch::Belly));
        img.set_pixel(19, 15, c(Swatch::Belly));

        img
    }

    fn walk_frame(&self, mut walk: Canvas) -> Canvas {
        let c = |swatch| self.palette.get(swatch);

        // Front paw lifted
        walk.fill_rect(18, 24, 20, 25, c(Swatch::FurDark));
        walk.fill_rect(18, 26, 20, 26, c(Swatch::Clear));
        // Tail up
        walk.set_pixel(23, 17, c(Swatch::Fur));
        walk.set_pixel(24, 17, c(Swatch::Belly));
        walk
    }

    fn sleep_frame(&self, mut sleep: Canvas) -> Canvas {
        let c = |swatch| self.palette.get(swatch);

        // Rows are copied top-down, so row 16 smears over rows 17..=25.
        for y in 17..26 {
            for x in 10..22 {
                if let Some(above) = sleep.get(x, y - 1) {
                    sleep.set_pixel(x, y, above);
                }
            }
        }
        // Eyes closed
        sleep.set_pixel(13, 14, c(Swatch::FurDark));
        sleep.set_pixel(18, 14, c(Swatch::FurDark));
        sleep.set_pixel(13, 13, c(Swatch::Clear));
        sleep.set_pixel(18, 13, c(Swatch::Clear));
        // Tail at rest
        sleep.fill_rect(22, 18, 26, 22, c(Swatch::Fur));
        sleep.fill_rect(24, 20, 26, 22, c(Swatch::Belly));
        sleep
    }
}

impl RasterSource for CatSprite {
    fn render(&self) -> Result<Raster> {
        debug!("Drawing cat sprite, pose={}", self.pose.name());
        self.draw().into_raster()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::raster::types::Pixel;

    fn at(canvas: &Canvas, x: i32, y: i32) -> Pixel {
        canvas.get(x, y).unwrap()
    }

    #[test]
    fn test_idle_frame_landmarks() {
        let palette = Palette::default();
        let idle = CatSprite::new(CatPose::Idle).draw();

        assert_eq!(idle.width(), SPRITE_WIDTH);
        assert_eq!(idle.height(), SPRITE_HEIGHT);
        assert_eq!(at(&idle, 0, 0), palette.get(Swatch::Clear));
        assert_eq!(at(&idle, 6, 28), palette.get(Swatch::Shadow));
        assert_eq!(at(&idle, 25, 29), palette.get(Swatch::Shadow));
        assert_eq!(at(&idle, 26, 28), palette.get(Swatch::Clear));
        assert_eq!(at(&idle, 13, 13), palette.get(Swatch::Eye));
        assert_eq!(at(&idle, 18, 14), palette.get(Swatch::Pupil));
        assert_eq!(at(&idle, 15, 15), palette.get(Swatch::Nose));
        assert_eq!(at(&idle, 11, 7), palette.get(Swatch::Fur));
        assert_eq!(at(&idle, 12, 15), palette.get(Swatch::Belly));
        assert_eq!(at(&idle, 8, 20), palette.get(Swatch::FurDark));
        assert_eq!(at(&idle, 15, 22), palette.get(Swatch::Belly));
    }

    #[test]
    fn test_walk_frame_lifts_paw_and_tail() {
        let palette = Palette::default();
        let idle = CatSprite::new(CatPose::Idle).draw();
        let walk = CatSprite::new(CatPose::Walk).draw();

        assert_eq!(at(&idle, 19, 26), palette.get(Swatch::FurDark));
        assert_eq!(at(&walk, 19, 26), palette.get(Swatch::Clear));
        assert_eq!(at(&walk, 19, 24), palette.get(Swatch::FurDark));
        assert_eq!(at(&walk, 23, 17), palette.get(Swatch::Fur));
        assert_eq!(at(&walk, 24, 17), palette.get(Swatch::Belly));
        assert_eq!(at(&walk, 13, 13), at(&idle, 13, 13));
    }

    #[test]
    fn test_sleep_frame_closes_eyes_and_smears_row_16() {
        let palette = Palette::default();
        let idle = CatSprite::new(CatPose::Idle).draw();
        let sleep = CatSprite::new(CatPose::Sleep).draw();

        assert_eq!(at(&sleep, 13, 13), palette.get(Swatch::Clear));
        assert_eq!(at(&sleep, 18, 13), palette.get(Swatch::Clear));
        assert_eq!(at(&sleep, 13, 14), palette.get(Swatch::FurDark));
        for y in 17..26 {
            for x in 10..22 {
                assert_eq!(at(&sleep, x, y), at(&idle, x, 16), "({}, {})", x, y);
            }
        }
        assert_eq!(at(&sleep, 9, 20), at(&idle, 9, 20));
        assert_eq!(at(&sleep, 25, 21), palette.get(Swatch::Belly));
    }

    #[test]
    fn test_custom_palette_is_used() {
        let orange = Pixel::new(230, 140, 60, 255);
        let palette = Palette::default().with(Swatch::Fur, orange);
        let raster = CatSprite::with_palette(CatPose::Idle, palette).render().unwrap();

        assert_eq!(raster.pixel(15, 12), Some(orange));
    }

    #[test]
    fn test_render_produces_full_raster() {
        for pose in CatPose::ALL {
            let raster = CatSprite::new(pose).render().unwrap();
            assert_eq!(raster.width(), SPRITE_WIDTH);
            assert_eq!(raster.height(), SPRITE_HEIGHT);
        }
    }

    #[test]
    fn test_file_names() {
        assert_eq!(CatPose::Idle.file_name(), "cat_idle.png");
        assert_eq!(CatPose::Walk.file_name(), "cat_walk.png");
        assert_eq!(CatPose::Sleep.file_name(), "cat_sleep.png");
    }
}
