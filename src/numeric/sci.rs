// ============================================================================
// Scientific Notation
// Exact `d.ddde+N` rendering of base-10 integer numerals
// ============================================================================

use super::digits::{MINUS, POINT};
use super::errors::NumeralResult;
use super::rectify::{rectify, remove_trailing_zeros, split_sign};
use super::round::{require_decimal_integer, round_rectified, Precision};
use crate::domain::NumeralConfig;

/// Render a base-10 integer in scientific notation.
///
/// The value is first rounded to `precision` significant digits. If its
/// decimal exponent is below `min_exp` the rounded fixed-point form is
/// returned instead.
///
/// # Errors
/// - `PrecisionOutOfRange` for `Precision::Digits(0)`
/// - `NotANumeral` if `s` is not a base-10 integer numeral
///
/// # Example
/// ```
/// use numstr::domain::NumeralConfig;
/// use numstr::numeric::{to_sci, Precision};
///
/// let config = NumeralConfig::default();
/// assert_eq!(to_sci(&config, "12300", 0, Precision::Unlimited).unwrap(), "1.23e+4");
/// assert_eq!(to_sci(&config, "100", 3, Precision::Unlimited).unwrap(), "100");
/// ```
pub fn to_sci(
    config: &NumeralConfig,
    s: &str,
    min_exp: i64,
    precision: Precision,
) -> NumeralResult<String> {
    let limit = precision.limit()?;
    require_decimal_integer(config, s)?;

    let rounded = round_rectified(config, &rectify(config, s), limit)?;
    let (negative, magnitude) = split_sign(&rounded);

    let exponent = magnitude.len() as i64 - 1;
    if exponent < min_exp {
        return Ok(rounded);
    }

    let (lead, rest) = magnitude.split_at(1);
    let mantissa = remove_trailing_zeros(config, rest);

    let mut out = String::with_capacity(mantissa.len() + 8);
    if negative {
        out.push(MINUS);
    }
    out.push_str(lead);
    if !mantissa.is_empty() {
        out.push(POINT);
        out.push_str(&mantissa);
    }
    out.push_str("e+");
    out.push_str(&exponent.to_string());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumeralError;

    fn sci(s: &str, min_exp: i64, precision: Precision) -> String {
        to_sci(&NumeralConfig::default(), s, min_exp, precision).unwrap()
    }

    #[test]
    fn test_basic_forms() {
        assert_eq!(sci("12300", 0, Precision::Unlimited), "1.23e+4");
        assert_eq!(sci("1", 0, Precision::Unlimited), "1e+0");
        assert_eq!(sci("0", 0, Precision::Unlimited), "0e+0");
        assert_eq!(sci("1000", 0, Precision::Unlimited), "1e+3");
        assert_eq!(sci("-4560", 0, Precision::Unlimited), "-4.56e+3");
    }

    #[test]
    fn test_fixed_below_min_exp() {
        assert_eq!(sci("100", 3, Precision::Unlimited), "100");
        assert_eq!(sci("1000", 3, Precision::Unlimited), "1e+3");
        assert_eq!(sci("-00100", 3, Precision::Unlimited), "-100");
        assert_eq!(sci("5", -1, Precision::Unlimited), "5e+0");
    }

    #[test]
    fn test_with_precision() {
        assert_eq!(sci("123456", 0, Precision::Digits(3)), "1.23e+5");
        assert_eq!(sci("125", 0, Precision::Digits(2)), "1.2e+2");
        assert_eq!(sci("135", 0, Precision::Digits(2)), "1.4e+2");
        assert_eq!(sci("9995", 0, Precision::Digits(3)), "1e+4");
        assert_eq!(sci("1249", 5, Precision::Digits(2)), "1200");
    }

    #[test]
    fn test_huge_integer() {
        let digits = format!("7{}", "0".repeat(400));
        assert_eq!(sci(&digits, 0, Precision::Unlimited), "7e+400");

        let digits = format!("31415{}", "9".repeat(300));
        assert_eq!(sci(&digits, 0, Precision::Digits(5)), "3.1416e+304");
    }

    #[test]
    fn test_errors() {
        let config = NumeralConfig::default();
        assert_eq!(
            to_sci(&config, "12", 0, Precision::Digits(0)),
            Err(NumeralError::PrecisionOutOfRange)
        );
        assert_eq!(
            to_sci(&config, "1e5", 0, Precision::Unlimited),
            Err(NumeralError::NotANumeral)
        );
    }
}
