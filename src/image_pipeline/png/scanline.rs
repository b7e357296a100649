use crate::image_pipeline::raster::types::Raster;

/// Filter type byte for "None"; the only filter this encoder applies
pub const FILTER_NONE: u8 = 0;

pub const BYTES_PER_PIXEL: usize = 4;

/// Size of the framed buffer: one filter byte plus 4 bytes per pixel, per row
pub fn scanline_buffer_len(width: usize, height: usize) -> usize {
    height * (1 + width * BYTES_PER_PIXEL)
}

/// Flattens a raster into PNG scanlines, top to bottom, each row prefixed
/// with [`FILTER_NONE`] and its pixels laid out as R, G, B, A.
pub fn frame_scanlines(raster: &Raster) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(scanline_buffer_len(raster.width(), raster.height()));
    for row in raster.rows() {
        buffer.push(FILTER_NONE);
        for pixel in row {
            buffer.extend_from_slice(&pixel.to_bytes());
        }
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::raster::types::Pixel;

    #[test]
    fn test_single_transparent_pixel() {
        let raster = Raster::filled(1, 1, Pixel::TRANSPARENT).unwrap();

        assert_eq!(frame_scanlines(&raster), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_every_row_gets_a_filter_byte() {
        let raster = Raster::from_rows(vec![
            vec![Pixel::new(1, 2, 3, 4)],
            vec![Pixel::new(5, 6, 7, 8)],
        ])
        .unwrap();

        assert_eq!(
            frame_scanlines(&raster),
            vec![0, 1, 2, 3, 4, 0, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_buffer_length_invariant() {
        let raster = Raster::filled(7, 3, Pixel::new(9, 9, 9, 9)).unwrap();
        let buffer = frame_scanlines(&raster);

        assert_eq!(buffer.len(), scanline_buffer_len(7, 3));
        assert_eq!(buffer.len(), 3 * (1 + 7 * 4));
    }
}
