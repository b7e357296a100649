use std::path::PathBuf;

use anyhow::Context;
use pagepet_sprites::image_pipeline::{CatPose, CatSprite, EncoderConfig, PngCompression, RasterToPngPipeline};
use pagepet_sprites::logger;

use tracing::info;

const DEFAULT_OUTPUT_DIR: &str = "assets";

fn main() -> anyhow::Result<()> {
    logger::init();

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    info!("Starting sprite generation...");

    let config = EncoderConfig::builder()
        .compression(PngCompression::Balanced)
        .build();
    let pipeline = RasterToPngPipeline::new(config);

    info!("Compression: {:?}", pipeline.config().compression);

    for pose in CatPose::ALL {
        let path = output_dir.join(pose.file_name());
        pipeline
            .convert_file(&CatSprite::new(pose), &path)
            .with_context(|| format!("failed to generate {}", path.display()))?;
        info!("Wrote {}", path.display());
    }

    info!("Generated cat frames in {}", output_dir.display());
    Ok(())
}
