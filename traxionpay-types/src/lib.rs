//! # TraxionPay Types
//!
//! Value objects, the normalized response shape and the transport port for
//! the TraxionPay SDK. This crate performs no network I/O.
//!
//! ## Layout
//!
//! - `domain/` - Validated request objects, the signed payform and `GatewayResponse`
//! - `ports/` - The `Transport` trait that HTTP adapters implement
//! - `error` - Validation and transport error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AccountType, BankLinkRequest, BillingDetails, BillingParams, CashInParams, CashInRequest,
    CashOutRequest, DEFAULT_COUNTRY, DEFAULT_CURRENCY, GatewayResponse, PAYFORM_ALGORITHM,
    Signatures, SignedPayform, default_or_blank, format_amount,
};
pub use error::{TransportError, ValidationError};
pub use ports::{GatewayRequest, Method, RequestBody, Transport};
