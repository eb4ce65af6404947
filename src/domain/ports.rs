use super::payment_request::PaymentRequest;
use crate::error::{Result, TransportError};
use std::collections::HashMap;

/// Query parameters extracted from a payment URI, keyed by wire key.
pub type UriParams = HashMap<String, String>;

/// Builds and parses the textual payment URI carried inside a token.
pub trait UriFormat: Send + Sync {
    /// Renders an already validated request.
    fn build(&self, request: &PaymentRequest) -> String;

    /// Splits a payment URI into its query parameters.
    fn parse(&self, uri: &str) -> Result<UriParams>;
}

/// Reversible text encoding that makes a URI safe to embed in a QR code.
pub trait TransportEncoding: Send + Sync {
    fn encode(&self, payload: &str) -> String;
    fn decode(&self, token: &str) -> std::result::Result<String, TransportError>;
}
