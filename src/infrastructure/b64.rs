use crate::domain::ports::TransportEncoding;
use crate::error::TransportError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as b64;

/// Standard alphabet Base64 with padding, no line wrapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Transport;

impl TransportEncoding for Base64Transport {
    fn encode(&self, payload: &str) -> String {
        b64.encode(payload.as_bytes())
    }

    fn decode(&self, token: &str) -> Result<String, TransportError> {
        let bytes = b64.decode(token)?;
        Ok(String::from_utf8(bytes)?)
    }
}
