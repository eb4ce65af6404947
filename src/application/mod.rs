//! Application layer orchestrating the encode and decode pipelines.
//!
//! This module defines the `PaymentQrCodec`, which chains validation, URI
//! building or parsing, and transport encoding into single calls.

pub mod codec;
