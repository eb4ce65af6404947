#![allow(dead_code)]

use payqr::PaymentRequest;

pub const JANE_URI: &str = "upi://pay?pa=a@b&pn=Jane&ac=AC1&cu=USD&mode=02&s=000000";
pub const JANE_TOKEN: &str = "dXBpOi8vcGF5P3BhPWFAYiZwbj1KYW5lJmFjPUFDMSZjdT1VU0QmbW9kZT0wMiZzPTAwMDAwMA==";

pub fn jane() -> PaymentRequest {
    PaymentRequest::new("Jane", "a@b", "AC1", "USD")
}

pub fn sample_requests() -> Vec<PaymentRequest> {
    vec![
        jane(),
        jane().with_amount("150.50"),
        jane().with_amount("100000"),
        jane().with_amount("0.01"),
        PaymentRequest::new("A".repeat(50), "merchant.shop-1@okbank", "000123456789", "INR"),
        PaymentRequest::new("Zoë Müller", "zoe@bank", "DE89370400440532013000", "EUR")
            .with_amount("42"),
    ]
}
