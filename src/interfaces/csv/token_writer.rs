use crate::domain::payment_request::PaymentRequest;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    payee_name: &'a str,
    payee_address: &'a str,
    token: &'a str,
}

/// Writes encoded tokens as CSV rows, one per request.
pub struct TokenWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TokenWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_token(&mut self, request: &PaymentRequest, token: &str) -> Result<()> {
        self.writer.serialize(TokenRecord {
            payee_name: &request.payee_name,
            payee_address: &request.payee_address,
            token,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}
