//! Value objects sent to and received from the gateway.

pub mod amount;
pub mod bank_account;
pub mod billing;
pub mod cash_in;
pub mod cash_out;
pub mod payform;
pub mod response;

pub use amount::format_amount;
pub use bank_account::{AccountType, BankLinkRequest};
pub use billing::{BillingDetails, BillingParams, DEFAULT_COUNTRY};
pub use cash_in::{CashInParams, CashInRequest, DEFAULT_CURRENCY};
pub use cash_out::CashOutRequest;
pub use payform::{PAYFORM_ALGORITHM, Signatures, SignedPayform};
pub use response::GatewayResponse;

/// Returns `fallback` when `value` is absent, empty or whitespace-only, and `value` otherwise.
pub fn default_or_blank(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}
