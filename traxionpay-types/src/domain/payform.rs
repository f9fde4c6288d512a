//! The signed cash-in payload submitted to the hosted payment form.

use serde::Serialize;

use super::amount::serialize_amount;
use super::{BillingDetails, CashInRequest};

/// Algorithm tag the gateway expects alongside the signatures.
pub const PAYFORM_ALGORITHM: &str = "HS256";

/// HMAC signatures over a cash-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signatures {
    /// Signature over the merchant reference, amount, currency and description.
    pub secure_hash: String,
    /// Signature over the API key.
    pub auth_hash: String,
}

/// Flat, write-once merge of a cash-in, its billing details and signatures.
///
/// Field order matches the gateway's payform layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignedPayform {
    merchant_id: i64,
    merchant_ref_no: String,
    merchant_additional_data: String,
    #[serde(serialize_with = "serialize_amount")]
    amount: f64,
    currency: String,
    description: String,
    billing_email: String,
    billing_first_name: String,
    billing_last_name: String,
    billing_middle_name: String,
    billing_phone: String,
    billing_mobile: String,
    billing_address: String,
    billing_address2: String,
    billing_city: String,
    billing_state: String,
    billing_zip: String,
    billing_country: String,
    billing_remark: String,
    payment_method: String,
    status_notification_url: String,
    success_page_url: String,
    failure_page_url: String,
    cancel_page_url: String,
    pending_page_url: String,
    secure_hash: String,
    auth_hash: String,
    alg: &'static str,
}

impl SignedPayform {
    /// Merges the parts. Without billing details every `billing_*` field is
    /// empty, `billing_country` included.
    pub fn new(
        cash_in: &CashInRequest,
        billing: Option<&BillingDetails>,
        signatures: Signatures,
    ) -> Self {
        let field = |get: fn(&BillingDetails) -> &str| billing.map(get).unwrap_or_default().to_string();

        Self {
            merchant_id: cash_in.merchant_id(),
            merchant_ref_no: cash_in.merchant_ref_no().to_string(),
            merchant_additional_data: cash_in.merchant_additional_data().to_string(),
            amount: cash_in.amount(),
            currency: cash_in.currency().to_string(),
            description: cash_in.description().to_string(),
            billing_email: field(BillingDetails::email),
            billing_first_name: field(BillingDetails::first_name),
            billing_last_name: field(BillingDetails::last_name),
            billing_middle_name: field(BillingDetails::middle_name),
            billing_phone: field(BillingDetails::phone),
            billing_mobile: field(BillingDetails::mobile),
            billing_address: field(BillingDetails::address),
            billing_address2: field(BillingDetails::address2),
            billing_city: field(BillingDetails::city),
            billing_state: field(BillingDetails::state),
            billing_zip: field(BillingDetails::zip),
            billing_country: field(BillingDetails::country),
            billing_remark: field(BillingDetails::remark),
            payment_method: cash_in.payment_method().to_string(),
            status_notification_url: cash_in.status_notification_url().to_string(),
            success_page_url: cash_in.success_page_url().to_string(),
            failure_page_url: cash_in.failure_page_url().to_string(),
            cancel_page_url: cash_in.cancel_page_url().to_string(),
            pending_page_url: cash_in.pending_page_url().to_string(),
            secure_hash: signatures.secure_hash,
            auth_hash: signatures.auth_hash,
            alg: PAYFORM_ALGORITHM,
        }
    }

    pub fn secure_hash(&self) -> &str {
        &self.secure_hash
    }

    pub fn auth_hash(&self) -> &str {
        &self.auth_hash
    }

    pub fn alg(&self) -> &str {
        self.alg
    }
}
