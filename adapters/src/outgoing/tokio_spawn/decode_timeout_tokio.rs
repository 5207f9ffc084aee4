use std::sync::Arc;
use std::time::Duration;
use tokio::{task::spawn_blocking, time::timeout};
use tracing::warn;

use palette_snap_application::{
    error::AppError,
    ports::outgoing::{
        image_decoder::DynImageDecoderPort,
        timeout::{DecodeFuture, DecodeTimeoutPort},
    },
};

pub struct TokioDecodeTimeoutAdapter {
    decoder_port: DynImageDecoderPort,
}

impl TokioDecodeTimeoutAdapter {
    pub fn new(decoder_port: DynImageDecoderPort) -> Self {
        Self { decoder_port }
    }
}

impl DecodeTimeoutPort for TokioDecodeTimeoutAdapter {
    fn decode_with_timeout(&self, encoded: Vec<u8>, duration: Duration) -> DecodeFuture {
        let decoder = Arc::clone(&self.decoder_port);

        Box::pin(async move {
            let task = spawn_blocking(move || decoder.decode_to_rgba(&encoded));

            timeout(duration, task)
                .await
                .map_err(|_| {
                    warn!("Image decoding exceeded {}ms", duration.as_millis());
                    AppError::CodecError {
                        message: format!("Image decoding timed out after {duration:?}"),
                    }
                })?
                .map_err(|e| AppError::TaskError {
                    message: format!("Image decoding task failed: {e}"),
                })?
        })
    }
}
