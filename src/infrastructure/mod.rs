//! Concrete adapters for the domain ports: the `upi://pay` URI format and the
//! Base64 transport encoding.

pub mod b64;
pub mod upi_uri;
