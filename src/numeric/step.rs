// ============================================================================
// Increment / Decrement
// Exact +1 / -1 on integer numerals with carry and borrow propagation
// ============================================================================

use super::digits::{chars_match, digit_value, is_zero_digit, max_digit, MINUS};
use super::errors::{NumeralError, NumeralResult};
use super::rectify::{is_canonical_zero, rectify, split_sign};
use super::validate::is_num_str;
use crate::domain::NumeralConfig;
use smallvec::SmallVec;

/// Digit buffer; numerals up to 32 digits never touch the heap.
type DigitBuf = SmallVec<[char; 32]>;

// ============================================================================
// Single digits
// ============================================================================

/// Next digit of `base`, wrapping from the largest digit to zero.
///
/// # Errors
/// - `BaseOutOfRange` if `base` is outside `[2, max_base]`
/// - `InvalidDigit` if `c` is not a digit of `base`
pub fn inc_char(config: &NumeralConfig, c: char, base: u32) -> NumeralResult<char> {
    config.check_base(base)?;
    let value = digit_value(config, c, base).ok_or(NumeralError::InvalidDigit(c))?;
    Ok(symbol(config, (value + 1) % base))
}

/// Previous digit of `base`, wrapping from zero to the largest digit.
///
/// # Errors
/// Same as [`inc_char`].
pub fn dec_char(config: &NumeralConfig, c: char, base: u32) -> NumeralResult<char> {
    config.check_base(base)?;
    let value = digit_value(config, c, base).ok_or(NumeralError::InvalidDigit(c))?;
    Ok(symbol(config, (value + base - 1) % base))
}

// ============================================================================
// Integers
// ============================================================================

/// Add one to an integer numeral. The result is rectified.
///
/// # Errors
/// - `BaseOutOfRange` if `base` is outside `[2, max_base]`
/// - `NotANumeral` if `s` is not an integer numeral in `base`
///
/// # Example
/// ```
/// use numstr::domain::NumeralConfig;
/// use numstr::numeric::inc_int;
///
/// let config = NumeralConfig::default();
/// assert_eq!(inc_int(&config, "99", 10).unwrap(), "100");
/// assert_eq!(inc_int(&config, "-1", 10).unwrap(), "0");
/// ```
pub fn inc_int(config: &NumeralConfig, s: &str, base: u32) -> NumeralResult<String> {
    require_integer(config, s, base)?;
    inc_rectified(config, &rectify(config, s), base)
}

/// Subtract one from an integer numeral. The result is rectified.
///
/// # Errors
/// Same as [`inc_int`].
pub fn dec_int(config: &NumeralConfig, s: &str, base: u32) -> NumeralResult<String> {
    require_integer(config, s, base)?;
    dec_rectified(config, &rectify(config, s), base)
}

/// Increment an already validated and rectified integer numeral.
pub(crate) fn inc_rectified(config: &NumeralConfig, s: &str, base: u32) -> NumeralResult<String> {
    match split_sign(s) {
        (true, magnitude) => Ok(negate(config, dec_magnitude(config, magnitude, base)?)),
        (false, magnitude) => inc_magnitude(config, magnitude, base),
    }
}

/// Decrement an already validated and rectified integer numeral.
pub(crate) fn dec_rectified(config: &NumeralConfig, s: &str, base: u32) -> NumeralResult<String> {
    match split_sign(s) {
        (true, magnitude) => Ok(negate(config, inc_magnitude(config, magnitude, base)?)),
        (false, magnitude) => dec_magnitude(config, magnitude, base),
    }
}

fn require_integer(config: &NumeralConfig, s: &str, base: u32) -> NumeralResult<()> {
    if is_num_str(config, s, base, false)? {
        Ok(())
    } else {
        tracing::debug!(numeral = s, base, "rejected non-integer numeral");
        Err(NumeralError::NotANumeral)
    }
}

/// `|n| + 1` for a rectified magnitude.
fn inc_magnitude(config: &NumeralConfig, magnitude: &str, base: u32) -> NumeralResult<String> {
    let max = max_digit(config, base);
    let mut digits: DigitBuf = magnitude.chars().collect();

    // Rightmost digit that can absorb the carry; grow if every digit is maximal
    let pos = match digits.iter().rposition(|&c| !chars_match(config, c, max)) {
        Some(pos) => pos,
        None => {
            tracing::trace!(numeral = magnitude, base, "carry out, growing numeral");
            digits.insert(0, config.alphabet().zero());
            0
        }
    };

    let value = value_of(config, digits[pos], base)?;
    digits[pos] = symbol(config, value + 1);
    for d in &mut digits[pos + 1..] {
        *d = config.alphabet().zero();
    }

    Ok(digits.into_iter().collect())
}

/// `|n| - 1` for a rectified magnitude; zero yields minus one.
fn dec_magnitude(config: &NumeralConfig, magnitude: &str, base: u32) -> NumeralResult<String> {
    if is_canonical_zero(config, magnitude) {
        return Ok(negate(config, symbol(config, 1).to_string()));
    }

    let max = max_digit(config, base);
    let mut digits: DigitBuf = magnitude.chars().collect();

    // Rectified and non-zero, so some digit is non-zero
    let pos = digits
        .iter()
        .rposition(|&c| !is_zero_digit(config, c))
        .ok_or(NumeralError::NotANumeral)?;

    let value = value_of(config, digits[pos], base)?;
    digits[pos] = symbol(config, value - 1);
    for d in &mut digits[pos + 1..] {
        *d = max;
    }

    let out: String = digits.into_iter().collect();
    Ok(rectify(config, &out))
}

/// Prefix a sign unless the value is canonical zero.
fn negate(config: &NumeralConfig, magnitude: String) -> String {
    if is_canonical_zero(config, &magnitude) {
        magnitude
    } else {
        let mut out = String::with_capacity(magnitude.len() + 1);
        out.push(MINUS);
        out.push_str(&magnitude);
        out
    }
}

#[inline]
fn value_of(config: &NumeralConfig, c: char, base: u32) -> NumeralResult<u32> {
    digit_value(config, c, base).ok_or(NumeralError::InvalidDigit(c))
}

/// Symbol for a value already known to be below the base.
#[inline]
fn symbol(config: &NumeralConfig, value: u32) -> char {
    config.alphabet().symbols()[value as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Alphabet;
    use crate::numeric::ErrorKind;

    fn inc(s: &str, base: u32) -> String {
        inc_int(&NumeralConfig::default(), s, base).unwrap()
    }

    fn dec(s: &str, base: u32) -> String {
        dec_int(&NumeralConfig::default(), s, base).unwrap()
    }

    #[test]
    fn test_inc_char() {
        let config = NumeralConfig::default();
        assert_eq!(inc_char(&config, '0', 10), Ok('1'));
        assert_eq!(inc_char(&config, '9', 10), Ok('0'));
        assert_eq!(inc_char(&config, 'e', 16), Ok('f'));
        assert_eq!(inc_char(&config, 'F', 16), Ok('0'));
        assert_eq!(inc_char(&config, '1', 2), Ok('0'));
        assert_eq!(
            inc_char(&config, 'g', 16),
            Err(NumeralError::InvalidDigit('g'))
        );
    }

    #[test]
    fn test_dec_char() {
        let config = NumeralConfig::default();
        assert_eq!(dec_char(&config, '1', 10), Ok('0'));
        assert_eq!(dec_char(&config, '0', 10), Ok('9'));
        assert_eq!(dec_char(&config, '0', 36), Ok('z'));
        assert_eq!(dec_char(&config, 'A', 16), Ok('9'));
        assert_eq!(
            dec_char(&config, '.', 10),
            Err(NumeralError::InvalidDigit('.'))
        );
        assert_eq!(
            dec_char(&config, '0', 40),
            Err(NumeralError::BaseOutOfRange(40))
        );
    }

    #[test]
    fn test_inc_int_simple() {
        assert_eq!(inc("0", 10), "1");
        assert_eq!(inc("41", 10), "42");
        assert_eq!(inc("0041", 10), "42");
        assert_eq!(inc("19", 10), "20");
        assert_eq!(inc("1011", 2), "1100");
    }

    #[test]
    fn test_inc_int_carry_growth() {
        assert_eq!(inc("99", 10), "100");
        assert_eq!(inc("zz", 36), "100");
        assert_eq!(inc("ZZ", 36), "100");
        assert_eq!(inc("111", 2), "1000");
        assert_eq!(inc("ff", 16), "100");
    }

    #[test]
    fn test_inc_int_negative() {
        assert_eq!(inc("-1", 10), "0");
        assert_eq!(inc("-2", 10), "-1");
        assert_eq!(inc("-100", 10), "-99");
        assert_eq!(inc("-10", 2), "-1");
        assert_eq!(inc("-0", 10), "1");
    }

    #[test]
    fn test_dec_int_simple() {
        assert_eq!(dec("1", 10), "0");
        assert_eq!(dec("42", 10), "41");
        assert_eq!(dec("100", 10), "99");
        assert_eq!(dec("100", 36), "zz");
        assert_eq!(dec("1000", 2), "111");
        assert_eq!(dec("10", 10), "9");
    }

    #[test]
    fn test_dec_int_underflow() {
        assert_eq!(dec("0", 10), "-1");
        assert_eq!(dec("-0", 10), "-1");
        assert_eq!(dec("000", 10), "-1");
        assert_eq!(dec("-1", 10), "-2");
        assert_eq!(dec("-99", 10), "-100");
        assert_eq!(dec("-zz", 36), "-100");
    }

    #[test]
    fn test_untouched_digits_keep_case() {
        assert_eq!(inc("FE", 16), "Ff");
        assert_eq!(dec("A0", 16), "9f");
    }

    #[test]
    fn test_long_numerals() {
        let nines = "9".repeat(100);
        let expected = format!("1{}", "0".repeat(100));
        assert_eq!(inc(&nines, 10), expected);
        assert_eq!(dec(&expected, 10), nines);
    }

    #[test]
    fn test_rejects_non_integers() {
        let config = NumeralConfig::default();
        assert_eq!(inc_int(&config, "1.5", 10), Err(NumeralError::NotANumeral));
        assert_eq!(dec_int(&config, "", 10), Err(NumeralError::NotANumeral));
        assert_eq!(inc_int(&config, "12", 2), Err(NumeralError::NotANumeral));
        assert_eq!(
            inc_int(&config, "12", 1).unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn test_custom_alphabet() {
        let config = NumeralConfig::default()
            .with_alphabet(Alphabet::new("xyz").unwrap())
            .unwrap();
        assert_eq!(inc_int(&config, "zz", 3).unwrap(), "yxx");
        assert_eq!(dec_int(&config, "x", 3).unwrap(), "-y");
        assert_eq!(dec_int(&config, "yx", 3).unwrap(), "z");
        assert_eq!(inc_int(&config, "-y", 3).unwrap(), "x");
    }

    #[test]
    fn test_never_negative_zero() {
        for s in ["-1", "-0", "0", "1"] {
            assert_ne!(inc(s, 10), "-0");
            assert_ne!(dec(s, 10), "-0");
        }
    }
}
