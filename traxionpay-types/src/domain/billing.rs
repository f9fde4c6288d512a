//! Payer billing details attached to a cash-in.

use super::default_or_blank;

/// Country used when the payer does not supply one.
pub const DEFAULT_COUNTRY: &str = "PH";

/// Raw billing input. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct BillingParams {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub remark: Option<String>,
}

/// Billing details with defaults applied.
///
/// Absent or blank fields become `""`, except `country` which becomes `"PH"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingDetails {
    email: String,
    first_name: String,
    last_name: String,
    middle_name: String,
    phone: String,
    mobile: String,
    address: String,
    address2: String,
    city: String,
    state: String,
    zip: String,
    country: String,
    remark: String,
}

impl BillingDetails {
    pub fn new(params: BillingParams) -> Self {
        let blank = |v: &Option<String>| default_or_blank(v.as_deref(), "");
        Self {
            email: blank(&params.email),
            first_name: blank(&params.first_name),
            last_name: blank(&params.last_name),
            middle_name: blank(&params.middle_name),
            phone: blank(&params.phone),
            mobile: blank(&params.mobile),
            address: blank(&params.address),
            address2: blank(&params.address2),
            city: blank(&params.city),
            state: blank(&params.state),
            zip: blank(&params.zip),
            country: default_or_blank(params.country.as_deref(), DEFAULT_COUNTRY),
            remark: blank(&params.remark),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn first_name(&self) -> &str {
        &self.first_name
    }
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }
    pub fn phone(&self) -> &str {
        &self.phone
    }
    pub fn mobile(&self) -> &str {
        &self.mobile
    }
    pub fn address(&self) -> &str {
        &self.address
    }
    pub fn address2(&self) -> &str {
        &self.address2
    }
    pub fn city(&self) -> &str {
        &self.city
    }
    pub fn state(&self) -> &str {
        &self.state
    }
    pub fn zip(&self) -> &str {
        &self.zip
    }
    pub fn country(&self) -> &str {
        &self.country
    }
    pub fn remark(&self) -> &str {
        &self.remark
    }
}

impl Default for BillingDetails {
    fn default() -> Self {
        Self::new(BillingParams::default())
    }
}
