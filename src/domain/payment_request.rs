use serde::{Deserialize, Serialize};

/// The fields of a payment request, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PayeeAddress,
    Amount,
    PayeeName,
    AccountNumber,
    CurrencyCode,
}

impl Field {
    /// The query key this field travels under in a `upi://pay` URI.
    pub fn key(&self) -> &'static str {
        match self {
            Field::PayeeAddress => "pa",
            Field::Amount => "am",
            Field::PayeeName => "pn",
            Field::AccountNumber => "ac",
            Field::CurrencyCode => "cu",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Field::PayeeAddress => "VPA",
            Field::Amount => "amount",
            Field::PayeeName => "payee name",
            Field::AccountNumber => "account number",
            Field::CurrencyCode => "currency",
        }
    }
}

/// A request for payment, as carried by a QR token.
///
/// All fields are kept as text so that a decoded request reproduces the
/// encoded one exactly; `amount` is empty when the payer chooses the amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub payee_name: String,
    /// Virtual payment address, `local-part@provider`.
    pub payee_address: String,
    pub account_number: String,
    pub currency_code: String,
    #[serde(default)]
    pub amount: String,
}

impl PaymentRequest {
    /// Creates a request without an amount.
    pub fn new(
        payee_name: impl Into<String>,
        payee_address: impl Into<String>,
        account_number: impl Into<String>,
        currency_code: impl Into<String>,
    ) -> Self {
        Self {
            payee_name: payee_name.into(),
            payee_address: payee_address.into(),
            account_number: account_number.into(),
            currency_code: currency_code.into(),
            amount: String::new(),
        }
    }

    pub fn with_amount(self, amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            ..self
        }
    }

    pub fn has_amount(&self) -> bool {
        !self.amount.is_empty()
    }
}
