// ============================================================================
// Numeric Module
// String-numeral arithmetic for arbitrary-length values in bases 2..=36
// ============================================================================
//
// This module provides:
// - Digit layer: character <-> value mapping under a configured alphabet
// - Validation and normalization (rectify) of numeral strings
// - Exact increment/decrement with carry and borrow propagation
// - Round-half-to-even and scientific notation for base-10 integers
//
// Design principles:
// - No conversion to native numeric types
// - All fallible operations return Result (no panics)
// - Every operation returns a fresh owned String
// - Configuration is passed in, never read from mutable globals

mod digits;
mod errors;
mod rectify;
mod round;
mod sci;
mod step;
mod validate;

#[cfg(test)]
mod proptests;

pub use digits::{change_case, char_to_val, chars_match, digit_value, val_to_char, MINUS, POINT};
pub use errors::{ErrorKind, NumeralError, NumeralResult};
pub use rectify::{rectify, remove_leading_zeros, remove_trailing_zeros};
pub use round::{is_entirely, round_int, Precision, DECIMAL};
pub use sci::to_sci;
pub use step::{dec_char, dec_int, inc_char, inc_int};
pub use validate::is_num_str;

pub(crate) use rectify::split_sign;
