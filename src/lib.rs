//! Encodes payment requests into QR-ready text tokens and decodes them back.
//!
//! A token is the standard Base64 of a `upi://pay?` URI. Both directions run
//! the same validation, so a token is only produced from, and only decoded
//! into, a request that satisfies every rule.
//!
//! ```
//! use payqr::{PaymentQrCodec, PaymentRequest};
//!
//! let codec = PaymentQrCodec::default();
//! let request = PaymentRequest::new("Jane", "jane@bank", "AC1", "USD").with_amount("150.50");
//!
//! let token = codec.encode(&request).unwrap();
//! assert_eq!(codec.decode(&token).unwrap(), request);
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::codec::PaymentQrCodec;
pub use domain::payment_request::{Field, PaymentRequest};
pub use domain::validation::{ValidationError, Validator, ValidatorConfig};
pub use error::{CodecError, Result, TransportError};
