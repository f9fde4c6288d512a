//! Cash-in request parameters.

use super::default_or_blank;

/// Currency used when the caller leaves it absent or blank.
pub const DEFAULT_CURRENCY: &str = "PHP";

/// Raw cash-in input.
///
/// URLs, amount and merchant id are passed to the gateway unvalidated; the
/// gateway is the authority on those rules.
#[derive(Debug, Clone, Default)]
pub struct CashInParams {
    pub merchant_id: i64,
    /// Must be unique per transaction by gateway convention.
    pub merchant_ref_no: String,
    /// Opaque caller data, commonly a JSON document. Not parsed.
    pub merchant_additional_data: String,
    pub amount: f64,
    pub description: String,
    pub status_notification_url: String,
    pub success_page_url: String,
    pub failure_page_url: String,
    pub cancel_page_url: String,
    pub pending_page_url: String,
    pub payment_method: Option<String>,
    pub currency: Option<String>,
}

/// A cash-in request with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CashInRequest {
    merchant_id: i64,
    merchant_ref_no: String,
    merchant_additional_data: String,
    amount: f64,
    description: String,
    status_notification_url: String,
    success_page_url: String,
    failure_page_url: String,
    cancel_page_url: String,
    pending_page_url: String,
    payment_method: String,
    currency: String,
}

impl CashInRequest {
    pub fn new(params: CashInParams) -> Self {
        Self {
            merchant_id: params.merchant_id,
            merchant_ref_no: params.merchant_ref_no,
            merchant_additional_data: params.merchant_additional_data,
            amount: params.amount,
            description: params.description,
            status_notification_url: params.status_notification_url,
            success_page_url: params.success_page_url,
            failure_page_url: params.failure_page_url,
            cancel_page_url: params.cancel_page_url,
            pending_page_url: params.pending_page_url,
            payment_method: default_or_blank(params.payment_method.as_deref(), ""),
            currency: default_or_blank(params.currency.as_deref(), DEFAULT_CURRENCY),
        }
    }

    pub fn merchant_id(&self) -> i64 {
        self.merchant_id
    }

    pub fn merchant_ref_no(&self) -> &str {
        &self.merchant_ref_no
    }

    pub fn merchant_additional_data(&self) -> &str {
        &self.merchant_additional_data
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status_notification_url(&self) -> &str {
        &self.status_notification_url
    }

    pub fn success_page_url(&self) -> &str {
        &self.success_page_url
    }

    pub fn failure_page_url(&self) -> &str {
        &self.failure_page_url
    }

    pub fn cancel_page_url(&self) -> &str {
        &self.cancel_page_url
    }

    pub fn pending_page_url(&self) -> &str {
        &self.pending_page_url
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}
