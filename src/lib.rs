// ============================================================================
// Numeral String Library
// Exact arithmetic on arbitrary-length numeral strings in bases 2..=36
// ============================================================================

//! # numstr
//!
//! Validation and manipulation of numbers written as strings in any base
//! from 2 to 36, without converting them to native numeric types.
//!
//! ## Features
//!
//! - **Validation** of signed, optionally fractional numerals
//! - **Normalization** (`rectify`) to a canonical form with no negative zero
//! - **Exact increment/decrement** with carry and borrow on numerals of any length
//! - **Round-half-to-even** to N significant digits for base-10 integers
//! - **Scientific notation** rendering without floating point
//! - **Configurable alphabet** and case sensitivity, fixed per engine
//!
//! ## Example
//!
//! ```rust
//! use numstr::Precision;
//!
//! assert!(numstr::is_num_str("-1f.8", 16, true).unwrap());
//! assert_eq!(numstr::rectify("-000.000"), "0");
//! assert_eq!(numstr::inc_int("zz", 36).unwrap(), "100");
//! assert_eq!(numstr::dec_int("0", 10).unwrap(), "-1");
//! assert_eq!(numstr::round_int("135", Precision::Digits(2)).unwrap(), "140");
//! assert_eq!(numstr::to_sci("12300", 0, Precision::Unlimited).unwrap(), "1.23e+4");
//! ```
//!
//! The free functions use [`NumeralEngine::global`](engine::NumeralEngine::global).
//! Build a dedicated [`NumeralEngine`](engine::NumeralEngine) for a custom
//! alphabet or case-sensitive matching.

pub mod codec;
pub mod domain;
pub mod engine;
pub mod numeric;
pub mod utils;

pub use numeric::{ErrorKind, NumeralError, NumeralResult, Precision};

use engine::NumeralEngine;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{decode_hex, encode_hex};
    pub use crate::domain::{Alphabet, Numeral, NumeralConfig};
    pub use crate::engine::{create_from_config, NumeralEngine, NumeralEngineBuilder};
    pub use crate::numeric::{ErrorKind, NumeralError, NumeralResult, Precision};
}

// ============================================================================
// Global-engine operations
// ============================================================================

/// Check that `s` is a numeral in `base`. See [`numeric::is_num_str`].
pub fn is_num_str(s: &str, base: u32, radix_point_ok: bool) -> NumeralResult<bool> {
    NumeralEngine::global().is_num_str(s, base, radix_point_ok)
}

/// Canonicalize a numeral. See [`numeric::rectify`].
pub fn rectify(s: &str) -> String {
    NumeralEngine::global().rectify(s)
}

/// Strip leading zero digits.
pub fn remove_leading_zeros(s: &str) -> String {
    NumeralEngine::global().remove_leading_zeros(s)
}

/// Strip trailing zero digits.
pub fn remove_trailing_zeros(s: &str) -> String {
    NumeralEngine::global().remove_trailing_zeros(s)
}

/// Add one to an integer numeral. See [`numeric::inc_int`].
pub fn inc_int(s: &str, base: u32) -> NumeralResult<String> {
    NumeralEngine::global().inc_int(s, base)
}

/// Subtract one from an integer numeral. See [`numeric::dec_int`].
pub fn dec_int(s: &str, base: u32) -> NumeralResult<String> {
    NumeralEngine::global().dec_int(s, base)
}

/// Next digit of `base`, wrapping to zero.
pub fn inc_char(c: char, base: u32) -> NumeralResult<char> {
    NumeralEngine::global().inc_char(c, base)
}

/// Previous digit of `base`, wrapping to the largest digit.
pub fn dec_char(c: char, base: u32) -> NumeralResult<char> {
    NumeralEngine::global().dec_char(c, base)
}

/// Digit value of `c`, `None` if it is not in the alphabet.
pub fn char_to_val(c: char) -> Option<u32> {
    NumeralEngine::global().char_to_val(c)
}

/// Alphabet symbol for `value`, `None` if out of range.
pub fn val_to_char(value: u32) -> Option<char> {
    NumeralEngine::global().val_to_char(value)
}

/// Swap ASCII letter case.
pub fn change_case(c: char) -> char {
    numeric::change_case(c)
}

/// True if every character of `s` is `c`.
pub fn is_entirely(s: &str, c: char) -> bool {
    NumeralEngine::global().is_entirely(s, c)
}

/// Round a base-10 integer, ties to even. See [`numeric::round_int`].
pub fn round_int(s: &str, precision: Precision) -> NumeralResult<String> {
    NumeralEngine::global().round_int(s, precision)
}

/// Scientific notation for a base-10 integer. See [`numeric::to_sci`].
pub fn to_sci(s: &str, min_exp: i64, precision: Precision) -> NumeralResult<String> {
    NumeralEngine::global().to_sci(s, min_exp, precision)
}
