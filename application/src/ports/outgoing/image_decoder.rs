use crate::error::AppResult;
use domain::pixels::DecodedImage;
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;

#[cfg_attr(test, automock)]
pub trait ImageDecoderPort: Send + Sync {
    fn decode_to_rgba(&self, encoded: &[u8]) -> AppResult<DecodedImage>;
}

pub type DynImageDecoderPort = Arc<dyn ImageDecoderPort>;
