use crate::domain::payment_request::Field;
use crate::domain::validation::ValidationError;
use thiserror::Error;

/// Failures of the Base64 transport layer.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Invalid Base64 encoded string: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
    #[error("Decoded payload is not UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Malformed field '{0}': expected key=value")]
    MalformedField(String),
    #[error("Missing {} ('{}')", .0.description(), .0.key())]
    MissingRequiredField(Field),
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
