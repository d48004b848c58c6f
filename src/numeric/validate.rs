// ============================================================================
// Numeral Validation
// Well-formedness checks for numeral strings in a given base
// ============================================================================

use super::digits::{digit_value, MINUS, POINT};
use super::errors::NumeralResult;
use crate::domain::NumeralConfig;

/// Check that `s` represents a number in `base`.
///
/// Accepts an optional leading `-`, digits legal in `base` (case-insensitive
/// unless the configuration says otherwise) and, when `radix_point_ok`, at
/// most one `.` that is followed by at least one digit.
///
/// # Errors
/// Returns `BaseOutOfRange` if `base` is outside `[2, max_base]`.
///
/// # Example
/// ```
/// use numstr::domain::NumeralConfig;
/// use numstr::numeric::is_num_str;
///
/// let config = NumeralConfig::default();
/// assert!(is_num_str(&config, "-ff.8", 16, true).unwrap());
/// assert!(!is_num_str(&config, "1.2.3", 10, true).unwrap());
/// ```
pub fn is_num_str(
    config: &NumeralConfig,
    s: &str,
    base: u32,
    radix_point_ok: bool,
) -> NumeralResult<bool> {
    config.check_base(base)?;

    let body = s.strip_prefix(MINUS).unwrap_or(s);

    let mut digits = 0usize;
    let mut points = 0usize;
    for c in body.chars() {
        if c == POINT && radix_point_ok {
            points += 1;
            if points > 1 {
                return Ok(false);
            }
        } else if digit_value(config, c, base).is_some() {
            digits += 1;
        } else {
            return Ok(false);
        }
    }

    // Reject "", "-", ".", "-." and a dangling point such as "1."
    Ok(digits > 0 && !body.ends_with(POINT))
}
