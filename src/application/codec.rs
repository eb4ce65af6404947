use crate::domain::payment_request::PaymentRequest;
use crate::domain::ports::{TransportEncoding, UriFormat};
use crate::domain::validation::{ValidationError, Validator, ValidatorConfig};
use crate::error::Result;
use crate::infrastructure::b64::Base64Transport;
use crate::infrastructure::upi_uri::{UpiUriFormat, request_from_params};
use tracing::debug;

/// The main entry point for turning payment requests into QR tokens and back.
///
/// `PaymentQrCodec` owns no mutable state: a single instance can serve any
/// number of concurrent encode and decode calls.
#[derive(Debug, Clone)]
pub struct PaymentQrCodec<F: UriFormat = UpiUriFormat, T: TransportEncoding = Base64Transport> {
    validator: Validator,
    format: F,
    transport: T,
}

impl PaymentQrCodec {
    /// Creates a codec using the `upi://pay` format and Base64 transport.
    pub fn new(config: ValidatorConfig) -> Self {
        Self::with_components(Validator::new(config), UpiUriFormat, Base64Transport)
    }
}

impl Default for PaymentQrCodec {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl<F: UriFormat, T: TransportEncoding> PaymentQrCodec<F, T> {
    pub fn with_components(validator: Validator, format: F, transport: T) -> Self {
        Self {
            validator,
            format,
            transport,
        }
    }

    pub fn validate(&self, request: &PaymentRequest) -> std::result::Result<(), ValidationError> {
        self.validator.validate(request)
    }

    /// Validates `request` and renders it as a token.
    pub fn encode(&self, request: &PaymentRequest) -> Result<String> {
        let uri = self.encode_uri(request)?;
        Ok(self.transport.encode(&uri))
    }

    /// Validates `request` and renders the payment URI without transport encoding.
    pub fn encode_uri(&self, request: &PaymentRequest) -> Result<String> {
        self.validate(request).inspect_err(|e| {
            debug!(error = %e, "rejected payment request");
        })?;
        let uri = self.format.build(request);
        debug!(len = uri.len(), "built payment uri");
        Ok(uri)
    }

    /// Decodes a token. Only a request that passes validation is returned.
    pub fn decode(&self, token: &str) -> Result<PaymentRequest> {
        let uri = self.transport.decode(token).inspect_err(|e| {
            debug!(error = %e, "token is not valid transport text");
        })?;
        self.decode_uri(&uri)
    }

    /// Decodes a payment URI that has already been unwrapped from its token.
    pub fn decode_uri(&self, uri: &str) -> Result<PaymentRequest> {
        let params = self.format.parse(uri)?;
        debug!(keys = params.len(), "parsed payment uri");

        let request = request_from_params(&params)?;
        self.validate(&request).inspect_err(|e| {
            debug!(error = %e, "decoded request failed validation");
        })?;
        Ok(request)
    }
}
