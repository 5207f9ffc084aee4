use domain::pixels::DecodedImage;
use image::{ImageReader, imageops::FilterType};
use palette_snap_application::{
    error::{AppError, AppResult},
    ports::outgoing::image_decoder::ImageDecoderPort,
};
use std::io::Cursor;
use tracing::{debug, instrument};

#[derive(Copy, Clone)]
pub struct ImageRsDecoderConfig {
    pub max_dimension: u32,
}

#[derive(Clone)]
pub struct ImageRsDecoderAdapter {
    max_dimension: u32,
}

impl ImageRsDecoderAdapter {
    pub fn new(config: ImageRsDecoderConfig) -> Self {
        Self {
            max_dimension: config.max_dimension,
        }
    }

    #[instrument(skip(self, encoded), fields(encoded_len = encoded.len()))]
    fn decode_to_rgba_impl(&self, encoded: &[u8]) -> AppResult<DecodedImage> {
        let reader = ImageReader::new(Cursor::new(encoded))
            .with_guessed_format()
            .map_err(|e| AppError::CodecError {
                message: format!("Failed to read image header: {}", e),
            })?;

        let format = reader.format().ok_or_else(|| AppError::CodecError {
            message: "Unrecognized image format".to_string(),
        })?;

        let img = reader.decode().map_err(|e| AppError::CodecError {
            message: format!("Failed to decode {:?} image: {}", format, e),
        })?;

        let (source_width, source_height) = (img.width(), img.height());
        // Only shrink. Enlarging a small image would interpolate colors that
        // are not in the photo and let them into the frequency count.
        let bounded = if source_width > self.max_dimension || source_height > self.max_dimension
        {
            img.resize(self.max_dimension, self.max_dimension, FilterType::Lanczos3)
        } else {
            img
        };

        let rgba_img = bounded.into_rgba8();
        let (width, height) = rgba_img.dimensions();

        debug!(
            "Decoded {:?} image {}x{} -> {}x{}",
            format, source_width, source_height, width, height
        );

        DecodedImage::new(width, height, rgba_img.into_raw()).map_err(|e| AppError::CodecError {
            message: format!("Decoder produced an inconsistent raster: {}", e),
        })
    }
}

impl ImageDecoderPort for ImageRsDecoderAdapter {
    fn decode_to_rgba(&self, encoded: &[u8]) -> AppResult<DecodedImage> {
        self.decode_to_rgba_impl(encoded)
    }
}
