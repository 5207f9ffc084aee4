use crate::color::RgbColor;
use crate::error::{DomainError, DomainResult};

pub const CHANNELS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    #[must_use]
    pub fn rgb(&self) -> RgbColor {
        RgbColor::new(self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    bytes: Vec<u8>,
}

impl RgbaBuffer {
    pub fn new(bytes: Vec<u8>) -> DomainResult<Self> {
        if bytes.is_empty() {
            return Err(DomainError::MalformedInput(
                "buffer must contain at least one pixel".to_string(),
            ));
        }

        if bytes.len() % CHANNELS != 0 {
            return Err(DomainError::MalformedInput(format!(
                "buffer length {} is not a multiple of {CHANNELS}",
                bytes.len()
            )));
        }

        Ok(Self { bytes })
    }

    pub fn with_pixel_count(bytes: Vec<u8>, pixel_count: usize) -> DomainResult<Self> {
        let expected = pixel_count.checked_mul(CHANNELS).ok_or_else(|| {
            DomainError::MalformedInput(format!("pixel count {pixel_count} is too large"))
        })?;

        if bytes.len() != expected {
            return Err(DomainError::MalformedInput(format!(
                "expected {expected} bytes for {pixel_count} pixels, got {}",
                bytes.len()
            )));
        }

        Self::new(bytes)
    }

    pub fn from_pixels(pixels: &[Pixel]) -> DomainResult<Self> {
        let bytes = pixels
            .iter()
            .flat_map(|pixel| [pixel.r, pixel.g, pixel.b, pixel.a])
            .collect();
        Self::new(bytes)
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.bytes.len() / CHANNELS
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.bytes.chunks_exact(CHANNELS).filter_map(|chunk| match *chunk {
            [r, g, b, a] => Some(Pixel::new(r, g, b, a)),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    pixels: RgbaBuffer,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, bytes: Vec<u8>) -> DomainResult<Self> {
        let pixel_count = usize::try_from(u64::from(width) * u64::from(height)).map_err(|_| {
            DomainError::MalformedInput(format!("image {width}x{height} is too large"))
        })?;
        let pixels = RgbaBuffer::with_pixel_count(bytes, pixel_count)?;

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &RgbaBuffer {
        &self.pixels
    }

    #[must_use]
    pub fn into_pixels(self) -> RgbaBuffer {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_ragged_buffers() {
        assert!(matches!(
            RgbaBuffer::new(Vec::new()),
            Err(DomainError::MalformedInput(_))
        ));
        assert!(matches!(
            RgbaBuffer::new(vec![1, 2, 3, 4, 5]),
            Err(DomainError::MalformedInput(_))
        ));
        assert!(RgbaBuffer::new(vec![0; 8]).is_ok());
    }

    #[test]
    fn pixel_count_must_match_length() {
        assert!(RgbaBuffer::with_pixel_count(vec![0; 12], 3).is_ok());
        assert!(RgbaBuffer::with_pixel_count(vec![0; 12], 2).is_err());
        assert!(RgbaBuffer::with_pixel_count(Vec::new(), 0).is_err());
    }

    #[test]
    fn iterates_pixels_in_channel_order() {
        let buffer = RgbaBuffer::new(vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let pixels: Vec<Pixel> = buffer.pixels().collect();

        assert_eq!(buffer.pixel_count(), 2);
        assert_eq!(pixels, vec![Pixel::new(1, 2, 3, 4), Pixel::new(5, 6, 7, 8)]);
    }

    #[test]
    fn decoded_image_checks_dimensions() {
        assert!(DecodedImage::new(2, 2, vec![0; 16]).is_ok());
        assert!(DecodedImage::new(2, 3, vec![0; 16]).is_err());
    }
}
