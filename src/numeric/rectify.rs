// ============================================================================
// Normalization
// Canonical form for numeral strings
// ============================================================================

use super::digits::{is_zero_digit, MINUS, POINT};
use crate::domain::NumeralConfig;

/// Strip zero digits from the front of `s`.
///
/// Zero is detected by digit value, so a custom alphabet's zero symbol is
/// honored. An all-zero or empty input yields the empty string.
pub fn remove_leading_zeros(config: &NumeralConfig, s: &str) -> String {
    match s.char_indices().find(|&(_, c)| !is_zero_digit(config, c)) {
        Some((i, _)) => s[i..].to_string(),
        None => String::new(),
    }
}

/// Strip zero digits from the end of `s`.
pub fn remove_trailing_zeros(config: &NumeralConfig, s: &str) -> String {
    match s.char_indices().rev().find(|&(_, c)| !is_zero_digit(config, c)) {
        Some((i, c)) => s[..i + c.len_utf8()].to_string(),
        None => String::new(),
    }
}

/// Canonicalize a numeral.
///
/// Leading zeros of the integer part and trailing zeros of the fractional
/// part are removed, an empty integer part becomes the zero digit, an empty
/// fraction drops its radix point, and zero never carries a sign.
///
/// # Example
/// ```
/// use numstr::domain::NumeralConfig;
/// use numstr::numeric::rectify;
///
/// let config = NumeralConfig::default();
/// assert_eq!(rectify(&config, "-000120.0500"), "-120.05");
/// assert_eq!(rectify(&config, "-0.000"), "0");
/// ```
pub fn rectify(config: &NumeralConfig, s: &str) -> String {
    let (negative, body) = match s.strip_prefix(MINUS) {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let (int_part, frac_part) = match body.split_once(POINT) {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (body, ""),
    };

    let int_part = remove_leading_zeros(config, int_part);
    let frac_part = remove_trailing_zeros(config, frac_part);
    let is_zero = int_part.is_empty() && frac_part.is_empty();

    let mut out = String::with_capacity(body.len() + 2);
    if negative && !is_zero {
        out.push(MINUS);
    }
    if int_part.is_empty() {
        out.push(config.alphabet().zero());
    } else {
        out.push_str(&int_part);
    }
    if !frac_part.is_empty() {
        out.push(POINT);
        out.push_str(&frac_part);
    }
    out
}

/// Split a rectified numeral into its sign and magnitude.
#[inline]
pub(crate) fn split_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix(MINUS) {
        Some(rest) => (true, rest),
        None => (false, s),
    }
}

/// True if `s` is the canonical zero of `config`.
#[inline]
pub(crate) fn is_canonical_zero(config: &NumeralConfig, s: &str) -> bool {
    let mut chars = s.chars();
    chars.next() == Some(config.alphabet().zero()) && chars.next().is_none()
}
