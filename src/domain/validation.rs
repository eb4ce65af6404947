use super::payment_request::{Field, PaymentRequest};
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::cmp::Ordering;
use std::sync::LazyLock;
use thiserror::Error;

/// Largest amount a single request may carry.
pub const MAX_AMOUNT: Decimal = dec!(100000);

/// Longest accepted payee name, in characters.
pub const MAX_PAYEE_NAME_LEN: usize = 50;

static VPA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9.-]+@[a-zA-Z0-9]+$").expect("valid VPA pattern"));

static CURRENCY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("valid currency pattern"));

/// Sign, integer digits, fraction digits, exponent. At least one of the digit
/// groups must be non-empty.
static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])?([0-9]*)(?:\.([0-9]*))?(?:[eE]([+-]?[0-9]+))?$")
        .expect("valid amount pattern")
});

static AMOUNT_LIMIT: LazyLock<ExactDecimal> = LazyLock::new(|| {
    ExactDecimal::parse(&MAX_AMOUNT.to_string()).expect("MAX_AMOUNT is a plain decimal")
});

/// A single violated rule. Every variant maps to exactly one [`Field`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid VPA format '{0}': must be in username@provider format")]
    InvalidAddressFormat(String),
    #[error("Payee name cannot be empty")]
    BlankPayeeName,
    #[error("Payee name too long ({len} characters, max {max})")]
    PayeeNameTooLong { len: usize, max: usize },
    #[error("Account number cannot be empty")]
    BlankAccountNumber,
    #[error("Invalid amount format '{0}'")]
    InvalidAmountFormat(String),
    #[error("Amount must be positive, got {0}")]
    AmountNotPositive(String),
    #[error("Amount {amount} exceeds maximum limit of {max}")]
    AmountExceedsLimit { amount: String, max: Decimal },
    #[error("Invalid currency code '{0}': must be 3 uppercase letters")]
    InvalidCurrencyCode(String),
}

impl ValidationError {
    /// The field that failed validation.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::InvalidAddressFormat(_) => Field::PayeeAddress,
            ValidationError::BlankPayeeName | ValidationError::PayeeNameTooLong { .. } => {
                Field::PayeeName
            }
            ValidationError::BlankAccountNumber => Field::AccountNumber,
            ValidationError::InvalidAmountFormat(_)
            | ValidationError::AmountNotPositive(_)
            | ValidationError::AmountExceedsLimit { .. } => Field::Amount,
            ValidationError::InvalidCurrencyCode(_) => Field::CurrencyCode,
        }
    }
}

/// Switches for rules that are not always enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Reject payee addresses that are not `local-part@provider`.
    /// Off by default: deployed wallets issue addresses outside that pattern.
    pub enforce_address_format: bool,
}

/// Checks a [`PaymentRequest`] against the business rules.
///
/// Rules run in a fixed order and the first violation is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn validate(&self, request: &PaymentRequest) -> Result<(), ValidationError> {
        if self.config.enforce_address_format {
            validate_payee_address(&request.payee_address)?;
        }
        validate_payee_name(&request.payee_name)?;
        validate_account_number(&request.account_number)?;
        if request.has_amount() {
            validate_amount(&request.amount)?;
        }
        validate_currency_code(&request.currency_code)
    }
}

pub fn validate_payee_address(address: &str) -> Result<(), ValidationError> {
    if VPA_PATTERN.is_match(address) {
        Ok(())
    } else {
        Err(ValidationError::InvalidAddressFormat(address.to_string()))
    }
}

pub fn validate_payee_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankPayeeName);
    }

    let len = name.chars().count();
    if len > MAX_PAYEE_NAME_LEN {
        return Err(ValidationError::PayeeNameTooLong {
            len,
            max: MAX_PAYEE_NAME_LEN,
        });
    }

    Ok(())
}

pub fn validate_account_number(account_number: &str) -> Result<(), ValidationError> {
    if account_number.trim().is_empty() {
        Err(ValidationError::BlankAccountNumber)
    } else {
        Ok(())
    }
}

/// Checks a non-empty amount lies in `(0, MAX_AMOUNT]`.
///
/// Both plain (`150.50`) and scientific (`1.5e2`) notation are accepted. The
/// comparison is done on the digits as written, so no precision or range
/// limit of a numeric type can round an amount into range.
pub fn validate_amount(amount: &str) -> Result<(), ValidationError> {
    let value = ExactDecimal::parse(amount)
        .ok_or_else(|| ValidationError::InvalidAmountFormat(amount.to_string()))?;

    if value.negative || value.is_zero() {
        return Err(ValidationError::AmountNotPositive(amount.to_string()));
    }
    if value.exceeds(&AMOUNT_LIMIT) {
        return Err(ValidationError::AmountExceedsLimit {
            amount: amount.to_string(),
            max: MAX_AMOUNT,
        });
    }

    Ok(())
}

/// A decimal number held exactly as `0.<digits> x 10^magnitude`.
///
/// `digits` has no leading or trailing zeros; it is empty for zero.
#[derive(Debug, PartialEq, Eq)]
struct ExactDecimal {
    negative: bool,
    digits: String,
    magnitude: i64,
}

impl ExactDecimal {
    fn parse(text: &str) -> Option<Self> {
        let caps = AMOUNT_PATTERN.captures(text)?;
        let integer = caps.get(2).map_or("", |m| m.as_str());
        let fraction = caps.get(3).map_or("", |m| m.as_str());
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        // Exponents too large for i64 saturate; the value is then far outside
        // the limit in either direction.
        let exponent = match caps.get(4).map(|m| m.as_str()) {
            Some(exp) => exp.parse::<i64>().unwrap_or(if exp.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }),
            None => 0,
        };

        let all = format!("{integer}{fraction}");
        let significant = all.trim_start_matches('0');
        let leading_zeros = (all.len() - significant.len()) as i64;

        Some(Self {
            negative: caps.get(1).is_some_and(|m| m.as_str() == "-"),
            digits: significant.trim_end_matches('0').to_string(),
            magnitude: (integer.len() as i64)
                .saturating_sub(leading_zeros)
                .saturating_add(exponent),
        })
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Compares two non-zero magnitudes, ignoring sign.
    fn exceeds(&self, limit: &Self) -> bool {
        match self.magnitude.cmp(&limit.magnitude) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => {
                let width = self.digits.len().max(limit.digits.len());
                format!("{:0<width$}", self.digits) > format!("{:0<width$}", limit.digits)
            }
        }
    }
}

pub fn validate_currency_code(currency_code: &str) -> Result<(), ValidationError> {
    if CURRENCY_PATTERN.is_match(currency_code) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCurrencyCode(
            currency_code.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> PaymentRequest {
        PaymentRequest::new("Jane", "a@b", "AC1", "USD")
    }

    fn validate(request: &PaymentRequest) -> Result<(), ValidationError> {
        Validator::default().validate(request)
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate(&valid_request()).is_ok());
        assert!(validate(&valid_request().with_amount("150.50")).is_ok());
        assert!(validate(&valid_request().with_amount("100000")).is_ok());
    }

    #[test]
    fn test_validation_is_repeatable() {
        let validator = Validator::default();
        let request = valid_request().with_amount("10");
        assert_eq!(validator.validate(&request), Ok(()));
        assert_eq!(validator.validate(&request), Ok(()));
        assert_eq!(request, valid_request().with_amount("10"));
    }

    #[test]
    fn test_blank_payee_name() {
        let mut request = valid_request();
        request.payee_name = "   ".to_string();
        let err = validate(&request).unwrap_err();
        assert_eq!(err, ValidationError::BlankPayeeName);
        assert_eq!(err.field(), Field::PayeeName);
    }

    #[test]
    fn test_payee_name_length_limit() {
        let mut request = valid_request();
        request.payee_name = "A".repeat(50);
        assert!(validate(&request).is_ok());

        request.payee_name = "A".repeat(51);
        assert_eq!(
            validate(&request),
            Err(ValidationError::PayeeNameTooLong { len: 51, max: 50 })
        );
    }

    #[test]
    fn test_payee_name_counts_characters() {
        let mut request = valid_request();
        request.payee_name = "é".repeat(50);
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_blank_account_number() {
        let mut request = valid_request();
        request.account_number = String::new();
        assert_eq!(validate(&request), Err(ValidationError::BlankAccountNumber));
    }

    #[test]
    fn test_amount_rules() {
        assert_eq!(
            validate(&valid_request().with_amount("abc")),
            Err(ValidationError::InvalidAmountFormat("abc".to_string()))
        );
        assert_eq!(
            validate(&valid_request().with_amount("0")),
            Err(ValidationError::AmountNotPositive("0".to_string()))
        );
        assert!(matches!(
            validate(&valid_request().with_amount("-5")),
            Err(ValidationError::AmountNotPositive(_))
        ));
        assert_eq!(
            validate(&valid_request().with_amount("100000.01")),
            Err(ValidationError::AmountExceedsLimit {
                amount: "100000.01".to_string(),
                max: MAX_AMOUNT,
            })
        );
    }

    #[test]
    fn test_amount_notations() {
        for amount in ["150.50", "1.5e2", "+5", ".5", "5.", "100000", "1E5", "0.01"] {
            assert_eq!(validate_amount(amount), Ok(()), "amount {amount:?}");
        }
    }

    #[test]
    fn test_amount_rejects_non_decimal_text() {
        for amount in ["1_000", "NaN", "Infinity", "1e", ".", "-", " 5", "0x10", "1,000"] {
            assert_eq!(
                validate_amount(amount),
                Err(ValidationError::InvalidAmountFormat(amount.to_string())),
                "amount {amount:?}"
            );
        }
    }

    #[test]
    fn test_amount_just_over_limit_is_not_rounded_down() {
        let amount = "100000.0000000000000000000000001";
        assert!(matches!(
            validate_amount(amount),
            Err(ValidationError::AmountExceedsLimit { .. })
        ));
        assert_eq!(validate_amount("100000.0000000000000000000000000"), Ok(()));
        assert_eq!(validate_amount("0.1e6"), Ok(()));
        assert!(validate_amount("0.10000001e6").is_err());
    }

    #[test]
    fn test_amount_beyond_numeric_range_exceeds_limit() {
        for amount in ["100000000000000000000000000000000", "1e400", "1e99999999999999999999"] {
            assert!(
                matches!(
                    validate_amount(amount),
                    Err(ValidationError::AmountExceedsLimit { .. })
                ),
                "amount {amount:?}"
            );
        }
    }

    #[test]
    fn test_tiny_positive_amount_is_accepted() {
        assert_eq!(validate_amount("0.0000000000000000000000000000001"), Ok(()));
        assert_eq!(validate_amount("1e-400"), Ok(()));
        assert_eq!(validate_amount("1e-99999999999999999999"), Ok(()));
    }

    #[test]
    fn test_zero_and_negative_amounts() {
        for amount in ["0", "0.000", "-0", "0e10", "-5", "-1e-400"] {
            assert_eq!(
                validate_amount(amount),
                Err(ValidationError::AmountNotPositive(amount.to_string())),
                "amount {amount:?}"
            );
        }
    }

    #[test]
    fn test_currency_code() {
        for code in ["usd", "US", "USDT", "U1D", ""] {
            let mut request = valid_request();
            request.currency_code = code.to_string();
            assert_eq!(
                validate(&request),
                Err(ValidationError::InvalidCurrencyCode(code.to_string())),
                "currency {code:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_first_violation_wins() {
        let request = PaymentRequest::new("", "a@b", "", "usd");
        assert_eq!(validate(&request), Err(ValidationError::BlankPayeeName));
    }

    #[test]
    fn test_address_format_inert_by_default() {
        let mut request = valid_request();
        request.payee_address = "not an address".to_string();
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_address_format_enforced_when_configured() {
        let validator = Validator::new(ValidatorConfig {
            enforce_address_format: true,
        });

        let mut request = valid_request();
        request.payee_address = "jane.doe@bank".to_string();
        assert!(validator.validate(&request).is_ok());

        request.payee_address = "jane@bank.com".to_string();
        let err = validator.validate(&request).unwrap_err();
        assert_eq!(err.field(), Field::PayeeAddress);
    }
}
