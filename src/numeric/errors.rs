// ============================================================================
// Numeral Errors
// Error types for numeral string operations
// ============================================================================

use std::fmt;

/// Broad classification of a [`NumeralError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An input did not have the expected shape or type
    TypeMismatch,
    /// A base or precision was outside its legal range
    Range,
    /// A value failed validation for the requested operation
    Domain,
}

/// Errors that can occur during numeral string operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralError {
    /// Input could not be interpreted as the expected type
    TypeMismatch,
    /// Base outside `[2, alphabet length]`
    BaseOutOfRange(u32),
    /// Precision of zero significant digits
    PrecisionOutOfRange,
    /// String is not a numeral of the shape the operation requires
    NotANumeral,
    /// Character is not a digit in the requested base
    InvalidDigit(char),
    /// Alphabet has duplicate, non-alphanumeric or too few/many symbols
    InvalidAlphabet,
    /// Hex payload contains non-hex characters
    InvalidHex,
}

impl NumeralError {
    /// Classify the error.
    pub const fn kind(self) -> ErrorKind {
        match self {
            NumeralError::TypeMismatch => ErrorKind::TypeMismatch,
            NumeralError::BaseOutOfRange(_) | NumeralError::PrecisionOutOfRange => {
                ErrorKind::Range
            }
            NumeralError::NotANumeral
            | NumeralError::InvalidDigit(_)
            | NumeralError::InvalidAlphabet
            | NumeralError::InvalidHex => ErrorKind::Domain,
        }
    }
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::TypeMismatch => write!(f, "data type mismatch"),
            NumeralError::BaseOutOfRange(base) => write!(f, "base {} out of range", base),
            NumeralError::PrecisionOutOfRange => {
                write!(f, "precision must be at least one significant digit")
            }
            NumeralError::NotANumeral => {
                write!(f, "invalid input: not a numeral of the required shape")
            }
            NumeralError::InvalidDigit(c) => write!(f, "invalid digit: {:?}", c),
            NumeralError::InvalidAlphabet => write!(
                f,
                "invalid alphabet: symbols must be 2 to 36 distinct ASCII alphanumerics"
            ),
            NumeralError::InvalidHex => write!(f, "invalid hex string"),
        }
    }
}

impl std::error::Error for NumeralError {}

/// Result type alias for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;
