use base64::{
    Engine as _,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};

use crate::error::{AppError, AppResult};

const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decodes the base64 payload that follows the first comma of a data URI
/// such as `data:image/png;base64,iVBORw0KGgo...`.
pub fn decode_payload(data_uri: &str) -> AppResult<Vec<u8>> {
    let (_, payload) = data_uri
        .split_once(',')
        .ok_or_else(|| AppError::InvalidImagePayload {
            message: "missing ',' before image data".to_string(),
        })?;

    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    if compact.is_empty() {
        return Err(AppError::InvalidImagePayload {
            message: "image data is empty".to_string(),
        });
    }

    PAYLOAD_ENGINE
        .decode(compact)
        .map_err(|e| AppError::InvalidImagePayload {
            message: format!("image data is not valid base64: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_everything_after_first_comma() {
        let bytes = decode_payload("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn tolerates_missing_padding_and_line_breaks() {
        assert_eq!(decode_payload("data:,aGVs\nbG8").unwrap(), b"hello");
    }

    #[test]
    fn rejects_payload_without_separator() {
        assert!(matches!(
            decode_payload("aGVsbG8="),
            Err(AppError::InvalidImagePayload { .. })
        ));
    }

    #[test]
    fn rejects_empty_or_invalid_base64() {
        assert!(matches!(
            decode_payload("data:image/png;base64,"),
            Err(AppError::InvalidImagePayload { .. })
        ));
        assert!(matches!(
            decode_payload("data:image/png;base64,@@not-base64@@"),
            Err(AppError::InvalidImagePayload { .. })
        ));
    }
}
