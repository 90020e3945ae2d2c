use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Decode failures, split so the host can tell bad base64 from binary
/// payloads that are not text.
#[derive(Debug, Error)]
pub enum Base64Error {
    #[error("invalid base64 input: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("decoded data is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode `input` with the standard padded alphabet.
pub fn encode(input: &str) -> String {
    STANDARD.encode(input)
}

/// Decode `input` back to text.
pub fn decode(input: &str) -> Result<String, Base64Error> {
    Ok(String::from_utf8(STANDARD.decode(input)?)?)
}

/// Decode `input` to raw bytes, for payloads that are not UTF-8 text.
pub fn decode_bytes(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(input)
}
