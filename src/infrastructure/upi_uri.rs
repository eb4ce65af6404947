use crate::domain::payment_request::{Field, PaymentRequest};
use crate::domain::ports::{UriFormat, UriParams};
use crate::error::{CodecError, Result};

pub const UPI_PREFIX: &str = "upi://pay?";

/// Fixed protocol markers appended to every URI. Never read back on decode.
const MODE: (&str, &str) = ("mode", "02");
const SIGNATURE: (&str, &str) = ("s", "000000");

/// The `upi://pay?` query format.
///
/// Values are written verbatim: a value containing `&` or `=` produces a URI
/// that does not parse back to the same request.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpiUriFormat;

impl UriFormat for UpiUriFormat {
    fn build(&self, request: &PaymentRequest) -> String {
        let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(7);
        pairs.push((Field::PayeeAddress.key(), request.payee_address.as_str()));
        if request.has_amount() {
            pairs.push((Field::Amount.key(), request.amount.as_str()));
        }
        pairs.push((Field::PayeeName.key(), request.payee_name.as_str()));
        pairs.push((Field::AccountNumber.key(), request.account_number.as_str()));
        pairs.push((Field::CurrencyCode.key(), request.currency_code.as_str()));
        pairs.push(MODE);
        pairs.push(SIGNATURE);

        let query = pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{UPI_PREFIX}{query}")
    }

    fn parse(&self, uri: &str) -> Result<UriParams> {
        let query = match uri.find(UPI_PREFIX) {
            Some(start) => &uri[start + UPI_PREFIX.len()..],
            None => uri,
        };

        // Later occurrences of a key overwrite earlier ones.
        query
            .split('&')
            .map(|pair| {
                pair.split_once('=')
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .ok_or_else(|| CodecError::MalformedField(pair.to_string()))
            })
            .collect()
    }
}

/// Assembles a request from parsed parameters. The result is not yet validated.
pub fn request_from_params(params: &UriParams) -> Result<PaymentRequest> {
    let required = |field: Field| {
        params
            .get(field.key())
            .cloned()
            .ok_or(CodecError::MissingRequiredField(field))
    };

    Ok(PaymentRequest {
        payee_address: required(Field::PayeeAddress)?,
        payee_name: required(Field::PayeeName)?,
        account_number: required(Field::AccountNumber)?,
        currency_code: required(Field::CurrencyCode)?,
        amount: params.get(Field::Amount.key()).cloned().unwrap_or_default(),
    })
}
