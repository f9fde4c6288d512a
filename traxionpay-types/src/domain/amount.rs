//! Canonical text form of amounts.
//!
//! The gateway hashes and parses amounts in this form, so the signing string
//! and every JSON body must render them identically.

use serde::{Serialize, Serializer};
use serde::ser::Error as _;
use serde_json::value::RawValue;

/// Renders an amount in canonical double form: `1500.0`, `0.25`, `1.5E7`, `1.0E-4`.
///
/// At least one fractional digit inside `[1e-3, 1e7)` and for zero;
/// scientific notation with an upper-case `E` outside it.
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = amount.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let plain = amount.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        }
    } else {
        let scientific = format!("{amount:E}");
        match scientific.split_once('E') {
            Some((mantissa, exponent)) if !mantissa.contains('.') => {
                format!("{mantissa}.0E{exponent}")
            }
            _ => scientific,
        }
    }
}

/// Serializes an amount as a JSON number written with [`format_amount`].
///
/// Non-finite amounts have no JSON number form and fail to serialize.
pub(crate) fn serialize_amount<S: Serializer>(
    amount: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let raw = RawValue::from_string(format_amount(*amount))
        .map_err(|_| S::Error::custom(format!("amount {amount} has no JSON number form")))?;
    raw.serialize(serializer)
}
