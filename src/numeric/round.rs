// ============================================================================
// Rounding
// Round-half-to-even on base-10 integer numerals
// ============================================================================

use super::digits::{chars_match, digit_value, MINUS};
use super::errors::{NumeralError, NumeralResult};
use super::rectify::{rectify, split_sign};
use super::step::inc_rectified;
use super::validate::is_num_str;
use crate::domain::NumeralConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Base the rounder and the scientific renderer operate in.
pub const DECIMAL: u32 = 10;

/// Number of significant digits to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Precision {
    /// Keep every digit
    #[default]
    Unlimited,
    /// Keep this many significant digits (must be positive)
    Digits(usize),
}

impl Precision {
    /// Digit limit, `None` when unlimited.
    ///
    /// # Errors
    /// Returns `PrecisionOutOfRange` for `Digits(0)`.
    pub fn limit(self) -> NumeralResult<Option<usize>> {
        match self {
            Precision::Unlimited => Ok(None),
            Precision::Digits(0) => Err(NumeralError::PrecisionOutOfRange),
            Precision::Digits(n) => Ok(Some(n)),
        }
    }
}

impl From<usize> for Precision {
    fn from(digits: usize) -> Self {
        Precision::Digits(digits)
    }
}

/// True if every character of `s` is `c` under the configured case policy.
/// Vacuously true for the empty string.
pub fn is_entirely(config: &NumeralConfig, s: &str, c: char) -> bool {
    s.chars().all(|x| chars_match(config, x, c))
}

/// Round a base-10 integer numeral to `precision` significant digits.
///
/// Ties round to the even neighbour. Dropped digits are replaced with
/// zeros, so the result has the same magnitude as the input (or one more
/// digit when rounding carries out, e.g. `9995` to 3 digits is `10000`).
///
/// # Errors
/// - `PrecisionOutOfRange` for `Precision::Digits(0)`
/// - `NotANumeral` if `s` is not a base-10 integer numeral
///
/// # Example
/// ```
/// use numstr::domain::NumeralConfig;
/// use numstr::numeric::{round_int, Precision};
///
/// let config = NumeralConfig::default();
/// assert_eq!(round_int(&config, "125", Precision::Digits(2)).unwrap(), "120");
/// assert_eq!(round_int(&config, "135", Precision::Digits(2)).unwrap(), "140");
/// ```
pub fn round_int(config: &NumeralConfig, s: &str, precision: Precision) -> NumeralResult<String> {
    let limit = precision.limit()?;
    require_decimal_integer(config, s)?;
    round_rectified(config, &rectify(config, s), limit)
}

pub(crate) fn require_decimal_integer(config: &NumeralConfig, s: &str) -> NumeralResult<()> {
    if is_num_str(config, s, DECIMAL, false)? {
        Ok(())
    } else {
        tracing::debug!(numeral = s, "rejected non-decimal-integer numeral");
        Err(NumeralError::NotANumeral)
    }
}

/// Round an already validated and rectified base-10 integer.
pub(crate) fn round_rectified(
    config: &NumeralConfig,
    s: &str,
    limit: Option<usize>,
) -> NumeralResult<String> {
    let (negative, magnitude) = split_sign(s);
    let len = magnitude.len();
    let keep = match limit {
        Some(keep) if keep < len => keep,
        _ => return Ok(s.to_string()),
    };

    // Alphabet symbols are ASCII, so byte offsets are digit offsets
    let (significant, dropped) = magnitude.split_at(keep);
    let (rounding, remainder) = dropped.split_at(1);

    let rounding = decimal_value(config, rounding)?;
    let last = decimal_value(config, &significant[keep - 1..])?;
    let exact_tie = is_entirely(config, remainder, config.alphabet().zero());

    let round_up = rounding > 5 || (rounding == 5 && (!exact_tie || last % 2 == 1));

    let significant = if round_up {
        tracing::trace!(numeral = s, keep, "rounding up");
        inc_rectified(config, significant, DECIMAL)?
    } else {
        significant.to_string()
    };

    let mut out = String::with_capacity(len + 2);
    if negative {
        out.push(MINUS);
    }
    out.push_str(&significant);
    out.extend(std::iter::repeat(config.alphabet().zero()).take(len - keep));
    Ok(out)
}

/// Value of a one-digit string in base 10.
fn decimal_value(config: &NumeralConfig, digit: &str) -> NumeralResult<u32> {
    let c = digit.chars().next().ok_or(NumeralError::NotANumeral)?;
    digit_value(config, c, DECIMAL).ok_or(NumeralError::InvalidDigit(c))
}
