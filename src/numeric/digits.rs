// ============================================================================
// Digit Layer
// Character <-> digit value mapping under a configured alphabet
// ============================================================================

use crate::domain::NumeralConfig;

/// Leading sign of a negative numeral.
pub const MINUS: char = '-';

/// Separator between integer and fractional parts.
pub const POINT: char = '.';

/// Swap the case of an ASCII letter. Anything else is returned unaltered.
#[inline]
pub fn change_case(c: char) -> char {
    if c.is_ascii_lowercase() {
        c.to_ascii_uppercase()
    } else if c.is_ascii_uppercase() {
        c.to_ascii_lowercase()
    } else {
        c
    }
}

/// True if `a` and `b` are the same symbol under the configured case policy.
#[inline]
pub fn chars_match(config: &NumeralConfig, a: char, b: char) -> bool {
    a == b || (!config.case_sensitive() && a == change_case(b))
}

/// Value of `c` in the full alphabet, or `None` if it is not a symbol.
pub fn char_to_val(config: &NumeralConfig, c: char) -> Option<u32> {
    config
        .alphabet()
        .symbols()
        .iter()
        .position(|&symbol| chars_match(config, c, symbol))
        .map(|i| i as u32)
}

/// Symbol for `value`, or `None` if it lies outside the alphabet.
#[inline]
pub fn val_to_char(config: &NumeralConfig, value: u32) -> Option<char> {
    config.alphabet().symbol(value)
}

/// Value of `c` if it is a legal digit in `base`.
#[inline]
pub fn digit_value(config: &NumeralConfig, c: char, base: u32) -> Option<u32> {
    char_to_val(config, c).filter(|&v| v < base)
}

/// True if `c` is a symbol whose value is zero.
#[inline]
pub(crate) fn is_zero_digit(config: &NumeralConfig, c: char) -> bool {
    char_to_val(config, c) == Some(0)
}

/// Largest digit symbol of `base`. Caller guarantees `base` is in range.
#[inline]
pub(crate) fn max_digit(config: &NumeralConfig, base: u32) -> char {
    config.alphabet().symbols()[base as usize - 1]
}
