//! Numeric token grammar shared by the OBJ/MTL encoders and decoders.
//!
//! Decimals follow `-?(\d+\.\d+|\d+\.|\d+|\.\d+)`: no exponent, no leading
//! `+`, no `inf`/`nan`. Integers follow `-?\d+`.

use std::fmt;

/// Parse a signed decimal token. Returns `None` when the token does not
/// match the grammar.
pub fn parse_decimal(token: &str) -> Option<f64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) {
        return None;
    }
    match frac_part {
        None if int_part.is_empty() => return None,
        Some(f) if !all_digits(f) || (int_part.is_empty() && f.is_empty()) => return None,
        _ => {}
    }

    token.parse().ok()
}

/// Parse a signed integer token.
///
/// Returns `None` for tokens outside the grammar or outside the `i64` range.
pub fn parse_integer(token: &str) -> Option<i64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Parse an unsigned integer token (`\d+`).
pub fn parse_unsigned(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Fixed-point formatting with six fractional digits, as written by the
/// exporter for every `v` and `vt` field.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
