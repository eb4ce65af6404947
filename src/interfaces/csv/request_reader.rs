use crate::domain::payment_request::PaymentRequest;
use crate::error::{CodecError, Result};
use std::io::Read;

/// Reads payment requests from a CSV source.
///
/// Expects the header `payee_name,payee_address,account_number,currency_code,amount`.
/// The `amount` column may be empty or missing altogether.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CodecError::from))
    }
}
