pub mod payment_request;
pub mod ports;
pub mod validation;
