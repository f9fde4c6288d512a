//! Bank account linking for payouts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Kind of bank account the gateway accepts for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Savings,
    Checkings,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Savings => "savings",
            AccountType::Checkings => "checkings",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing is an exact, case-sensitive match.
impl FromStr for AccountType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "savings" => Ok(AccountType::Savings),
            "checkings" => Ok(AccountType::Checkings),
            _ => Err(ValidationError::InvalidArgument(
                "account_type must either be 'savings' or 'checkings'".to_string(),
            )),
        }
    }
}

/// Request body for linking a bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankLinkRequest {
    bank: String,
    account_type: AccountType,
    account_number: String,
    account_name: String,
}

impl BankLinkRequest {
    /// Fails with [`ValidationError::InvalidArgument`] unless `account_type` is
    /// exactly `"savings"` or `"checkings"`.
    pub fn new(
        bank: impl Into<String>,
        account_type: &str,
        account_name: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let account_type = account_type.parse()?;
        Ok(Self {
            bank: bank.into(),
            account_type,
            account_number: account_number.into(),
            account_name: account_name.into(),
        })
    }

    pub fn bank(&self) -> &str {
        &self.bank
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }
}
