// ============================================================================
// Numeral
// Validated, rectified numeral string tagged with its base
// ============================================================================

use crate::engine::NumeralEngine;
use crate::numeric::{split_sign, NumeralError, NumeralResult, Precision, DECIMAL, POINT};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An owned numeral in canonical (rectified) form.
///
/// Operations go through [`NumeralEngine::global`] and always return a new
/// value.
///
/// # Example
/// ```
/// use numstr::domain::Numeral;
/// use numstr::Precision;
///
/// let n = Numeral::parse("00ff", 16).unwrap();
/// assert_eq!(n.as_str(), "ff");
/// assert_eq!(n.succ().unwrap().as_str(), "100");
///
/// let big: Numeral = "123456789012345678901234567890".parse().unwrap();
/// assert_eq!(big.to_sci(0, Precision::Digits(3)).unwrap(), "1.23e+29");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "NumeralRepr")
)]
pub struct Numeral {
    digits: String,
    base: u32,
}

/// Unchecked wire form; deserialization re-validates through [`Numeral::parse`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct NumeralRepr {
    digits: String,
    base: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<NumeralRepr> for Numeral {
    type Error = NumeralError;

    fn try_from(repr: NumeralRepr) -> Result<Self, Self::Error> {
        Self::parse(&repr.digits, repr.base)
    }
}

impl Numeral {
    /// Parse a numeral in `base`. A radix point is allowed.
    ///
    /// # Errors
    /// - `BaseOutOfRange` if `base` is outside `[2, max_base]`
    /// - `NotANumeral` if `s` is not a numeral in `base`
    pub fn parse(s: &str, base: u32) -> NumeralResult<Self> {
        let engine = NumeralEngine::global();
        if !engine.is_num_str(s, base, true)? {
            return Err(NumeralError::NotANumeral);
        }
        Ok(Self {
            digits: engine.rectify(s),
            base,
        })
    }

    /// The canonical string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// The base the digits are written in.
    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// True for values below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        split_sign(&self.digits).0
    }

    /// True for the canonical zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        let mut chars = self.digits.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => NumeralEngine::global().char_to_val(c) == Some(0),
            _ => false,
        }
    }

    /// True if there is no fractional part.
    #[inline]
    pub fn is_integer(&self) -> bool {
        !self.digits.contains(POINT)
    }

    /// This value plus one. Integers only.
    pub fn succ(&self) -> NumeralResult<Self> {
        self.require_integer()?;
        let digits = NumeralEngine::global().inc_int(&self.digits, self.base)?;
        Ok(Self { digits, base: self.base })
    }

    /// This value minus one. Integers only.
    pub fn pred(&self) -> NumeralResult<Self> {
        self.require_integer()?;
        let digits = NumeralEngine::global().dec_int(&self.digits, self.base)?;
        Ok(Self { digits, base: self.base })
    }

    /// Round to `precision` significant digits, ties to even.
    /// Base-10 integers only.
    pub fn round(&self, precision: Precision) -> NumeralResult<Self> {
        self.require_decimal()?;
        let digits = NumeralEngine::global().round_int(&self.digits, precision)?;
        Ok(Self { digits, base: self.base })
    }

    /// Scientific notation (see [`crate::numeric::to_sci`]). Base-10
    /// integers only.
    pub fn to_sci(&self, min_exp: i64, precision: Precision) -> NumeralResult<String> {
        self.require_decimal()?;
        NumeralEngine::global().to_sci(&self.digits, min_exp, precision)
    }

    fn require_integer(&self) -> NumeralResult<()> {
        if self.is_integer() {
            Ok(())
        } else {
            Err(NumeralError::NotANumeral)
        }
    }

    fn require_decimal(&self) -> NumeralResult<()> {
        if self.base == DECIMAL {
            self.require_integer()
        } else {
            Err(NumeralError::NotANumeral)
        }
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl FromStr for Numeral {
    type Err = NumeralError;

    /// Parse a base-10 numeral.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, DECIMAL)
    }
}

impl AsRef<str> for Numeral {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}
