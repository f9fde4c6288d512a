//! Payform assembly and wire encoding for cash-in.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use traxionpay_types::{BillingDetails, CashInRequest, SignedPayform};

use crate::{ClientError, security};

/// Form field carrying the encoded payform.
pub const FORM_FIELD: &str = "form_data";

/// Signs a cash-in and merges it with the billing details.
pub fn build_payform(
    cash_in: &CashInRequest,
    billing: Option<&BillingDetails>,
    api_key: &str,
    secret_key: &str,
) -> Result<SignedPayform, ClientError> {
    let signatures = security::sign_cash_in(cash_in, api_key, secret_key)?;
    Ok(SignedPayform::new(cash_in, billing, signatures))
}

/// Encodes a payform for the `form_data` field.
///
/// The payform is rendered as compact JSON, backslash escapes are resolved,
/// and the UTF-8 bytes are Base64 encoded.
pub fn encode_payform(payform: &SignedPayform) -> Result<String, ClientError> {
    let json = serde_json::to_string(payform)?;
    Ok(STANDARD.encode(unescape_backslashes(&json).as_bytes()))
}

/// Base64-encodes merchant additional data so structured values survive
/// payform encoding intact.
pub fn encode_additional_data(data: &str) -> String {
    STANDARD.encode(data.as_bytes())
}

/// Resolves backslash escape sequences.
///
/// Handles `\\ \" \' \b \f \n \r \t`, `\uXXXX` (surrogate pairs combined)
/// and octal `\0`..`\377`. For any other sequence the backslash is dropped
/// and the following character kept; a trailing lone backslash is dropped.
pub fn unescape_backslashes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(next) = chars.next() else {
            break;
        };
        match next {
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'u' => {
                while chars.peek() == Some(&'u') {
                    chars.next();
                }
                match take_hex4(&mut chars) {
                    Some(unit) => push_utf16_unit(&mut out, unit, &mut chars),
                    None => out.push('u'),
                }
            }
            '0'..='7' => {
                let max_digits = if next <= '3' { 3 } else { 2 };
                let mut value = next.to_digit(8).unwrap_or_default();
                for _ in 1..max_digits {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            other => out.push(other),
        }
    }

    out
}

type Chars<'a> = std::iter::Peekable<std::str::Chars<'a>>;

fn take_hex4(chars: &mut Chars<'_>) -> Option<u32> {
    let lookahead = chars.clone();
    let digits: String = lookahead.take(4).collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    for _ in 0..4 {
        chars.next();
    }
    u32::from_str_radix(&digits, 16).ok()
}

fn push_utf16_unit(out: &mut String, unit: u32, chars: &mut Chars<'_>) {
    if (0xD800..0xDC00).contains(&unit) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            if let Some(low) = take_hex4(&mut lookahead) {
                if (0xDC00..0xE000).contains(&low) {
                    let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    if let Some(c) = char::from_u32(combined) {
                        out.push(c);
                        *chars = lookahead;
                        return;
                    }
                }
            }
        }
    }
    out.push(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER));
}
