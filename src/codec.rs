use data_encoding::BASE64;
use thiserror::Error;

/// Strict base64 decode failure. Propagated, never truncated.
#[derive(Debug, Error)]
#[error("invalid base64: {0}")]
pub struct CodecError(#[from] data_encoding::DecodeError);

/// Encode raw message bytes as base64 text for path segments and JSON fields.
pub fn encode(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode base64 text back to raw bytes.
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(BASE64.decode(text.as_bytes())?)
}
