use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use thiserror::Error;

use crate::modules::storage::StoreError;
use crate::shared::validation::DATA_URI_REGEX;

/// Lenient about padding, like most browser encoders
const PHOTO_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Reasons an embedded photo is discarded
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("payload is not a base64 data URL")]
    NotDataUrl,

    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("failed to store photo: {0}")]
    Store(#[from] StoreError),
}

/// Decoded photo ready for the blob store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoPayload {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Decode `data:<mime>;base64,<body>` into raw bytes
pub fn decode_photo_data_url(data_url: &str) -> Result<PhotoPayload, PhotoError> {
    let caps = DATA_URI_REGEX
        .captures(data_url)
        .ok_or(PhotoError::NotDataUrl)?;

    let body: String = caps[2].chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let data = PHOTO_ENGINE.decode(body)?;

    Ok(PhotoPayload {
        mime_type: caps[1].to_string(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_photo_data_url() {
        let payload = decode_photo_data_url("data:image/jpeg;base64,aGVsbG8=").unwrap();
        assert_eq!(payload.mime_type, "image/jpeg");
        assert_eq!(payload.data, b"hello");
    }

    #[test]
    fn test_decode_accepts_missing_padding() {
        let payload = decode_photo_data_url("data:image/png;base64,aGVsbG8").unwrap();
        assert_eq!(payload.data, b"hello");
    }

    #[test]
    fn test_decode_rejects_malformed_payloads() {
        assert!(matches!(
            decode_photo_data_url("data:image/png,hello"),
            Err(PhotoError::NotDataUrl)
        ));
        assert!(matches!(
            decode_photo_data_url("data:image/png;base64,@@@@"),
            Err(PhotoError::Decode(_))
        ));
    }
}
