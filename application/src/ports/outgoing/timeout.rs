use crate::error::AppResult;
use domain::pixels::DecodedImage;
#[cfg(test)]
use mockall::automock;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

pub type DecodeFuture = Pin<Box<dyn Future<Output = AppResult<DecodedImage>> + Send + 'static>>;

#[cfg_attr(test, automock)]
pub trait DecodeTimeoutPort: Send + Sync {
    fn decode_with_timeout(&self, encoded: Vec<u8>, duration: Duration) -> DecodeFuture;
}

pub type DynDecodeTimeoutPort = Arc<dyn DecodeTimeoutPort>;
