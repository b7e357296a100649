use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{EncodeError, Result},
    png::{EncoderConfig, PngWriter, StandardPngWriter},
    raster::RasterSource,
};

pub struct RasterToPngPipeline<W: PngWriter> {
    writer: W,
    config: EncoderConfig,
}

impl RasterToPngPipeline<StandardPngWriter> {
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<W: PngWriter> RasterToPngPipeline<W> {
    pub fn with_custom(writer: W, config: EncoderConfig) -> Self {
        Self { writer, config }
    }

    /// Renders `source` and returns the complete PNG stream.
    #[instrument(skip(self, source))]
    pub fn encode(&self, source: &dyn RasterSource) -> Result<Vec<u8>> {
        let raster = {
            let _span = tracing::info_span!("render_raster").entered();
            source.render()?
        };

        let png = {
            let _span = tracing::info_span!(
                "encode_png",
                width = raster.width(),
                height = raster.height()
            )
            .entered();
            self.writer.encode(&raster, &self.config)?
        };

        info!(
            width = raster.width(),
            height = raster.height(),
            bytes = png.len(),
            "Encoding complete"
        );
        Ok(png)
    }

    /// Renders `source` and writes the PNG stream to `output`.
    ///
    /// Nothing is written when rendering or encoding fails.
    #[instrument(skip(self, source, output))]
    pub fn convert(&self, source: &dyn RasterSource, output: &mut dyn Write) -> Result<()> {
        let png = self.encode(source)?;

        let _span = tracing::info_span!("write_output", bytes = png.len()).entered();
        output.write_all(&png)?;
        Ok(())
    }

    /// Renders `source` into the file at `output_path`, creating missing
    /// parent directories.
    ///
    /// The file is only created once encoding has succeeded.
    #[instrument(skip(self, source, output_path))]
    pub fn convert_file<P: AsRef<Path>>(&self, source: &dyn RasterSource, output_path: P) -> Result<()> {
        let output_path = output_path.as_ref();

        info!(output = %output_path.display(), "Converting to file");

        let png = self.encode(source)?;

        let _span = tracing::info_span!("write_output", bytes = png.len()).entered();
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                EncodeError::OutputWriteError(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(output_path, &png).map_err(|e| {
            EncodeError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        })?;

        Ok(())
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EncoderConfig) {
        self.config = config;
    }
}
