//! Credential encoding and HMAC signing for cash-in payforms.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use traxionpay_types::{
    CashInRequest, DEFAULT_CURRENCY, Signatures, default_or_blank, format_amount,
};

use crate::ClientError;

type HmacSha256 = Hmac<Sha256>;

/// Encodes the secret key as the Basic auth token.
pub fn generate_token(secret_key: &str) -> Result<String, ClientError> {
    if secret_key.trim().is_empty() {
        return Err(ClientError::InvalidArgument(
            "secret_key must not be blank".to_string(),
        ));
    }
    Ok(STANDARD.encode(secret_key.as_bytes()))
}

/// Signs `data` with HMAC-SHA256 keyed by `key` and renders it with [`digest_hex`].
pub fn hmac_sha256_hex(data: &str, key: &str) -> Result<String, ClientError> {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| ClientError::Signing(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(digest_hex(&mac.finalize().into_bytes()))
}

/// Lowercase hex of `digest` read as an unsigned big-endian integer,
/// zero-padded to at least 32 characters.
///
/// Leading zero nibbles are not preserved: a 32-byte digest starting with
/// `0x00` renders as 62 characters. The gateway verifies against this form.
pub fn digest_hex(digest: &[u8]) -> String {
    let full = hex::encode(digest);
    let significant = full.trim_start_matches('0');
    format!("{significant:0>32}")
}

/// Concatenates reference number, amount, currency and description, without separators.
pub fn signing_string(cash_in: &CashInRequest) -> String {
    format!(
        "{}{}{}{}",
        cash_in.merchant_ref_no(),
        format_amount(cash_in.amount()),
        default_or_blank(Some(cash_in.currency()), DEFAULT_CURRENCY),
        cash_in.description()
    )
}

/// Computes both payform signatures for a cash-in.
pub fn sign_cash_in(
    cash_in: &CashInRequest,
    api_key: &str,
    secret_key: &str,
) -> Result<Signatures, ClientError> {
    Ok(Signatures {
        secure_hash: hmac_sha256_hex(&signing_string(cash_in), secret_key)?,
        auth_hash: hmac_sha256_hex(api_key, secret_key)?,
    })
}
