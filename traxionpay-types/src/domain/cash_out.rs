//! Payout of wallet funds to a linked bank account.

use serde::{Deserialize, Serialize};

use super::amount::serialize_amount;

/// Request body for a bank payout. Not validated; the gateway checks the OTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashOutRequest {
    #[serde(rename = "OTP")]
    otp: String,
    #[serde(serialize_with = "serialize_amount")]
    amount: f64,
    bank_account: i64,
}

impl CashOutRequest {
    pub fn new(otp: impl Into<String>, amount: f64, bank_account: i64) -> Self {
        Self {
            otp: otp.into(),
            amount,
            bank_account,
        }
    }

    pub fn otp(&self) -> &str {
        &self.otp
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn bank_account(&self) -> i64 {
        self.bank_account
    }
}
