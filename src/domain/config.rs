// ============================================================================
// Numeral Configuration
// Digit alphabet and case-sensitivity policy shared by all operations
// ============================================================================

use crate::numeric::{NumeralError, NumeralResult};
use arrayvec::ArrayVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of symbols an alphabet may hold (and so the maximum base).
pub const MAX_SYMBOLS: usize = 36;

/// The standard digit alphabet: `0-9` followed by `a-z`.
pub const DEFAULT_SYMBOLS: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

// ============================================================================
// Alphabet
// ============================================================================

/// Ordered set of digit symbols. The symbol at index `i` has value `i`.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Alphabet {
    symbols: ArrayVec<char, MAX_SYMBOLS>,
}

impl Alphabet {
    /// Build an alphabet from a string of symbols.
    ///
    /// # Errors
    /// Returns `InvalidAlphabet` if the string holds fewer than 2 or more
    /// than 36 symbols, a non-ASCII-alphanumeric symbol, or a symbol that
    /// appears twice (exact match).
    pub fn new(symbols: &str) -> NumeralResult<Self> {
        let mut out = ArrayVec::new();
        for c in symbols.chars() {
            if !c.is_ascii_alphanumeric() || out.contains(&c) {
                return Err(NumeralError::InvalidAlphabet);
            }
            out.try_push(c).map_err(|_| NumeralError::InvalidAlphabet)?;
        }
        if out.len() < 2 {
            return Err(NumeralError::InvalidAlphabet);
        }
        Ok(Self { symbols: out })
    }

    /// Number of symbols, which is also the largest usable base.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; an alphabet holds at least two symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol for `value`, if in range.
    #[inline]
    pub fn symbol(&self, value: u32) -> Option<char> {
        self.symbols.get(value as usize).copied()
    }

    /// The zero digit.
    #[inline]
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    /// Symbols in value order.
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// True if two symbols differ only by ASCII case.
    fn has_case_collision(&self) -> bool {
        self.symbols.iter().enumerate().any(|(i, a)| {
            self.symbols[i + 1..]
                .iter()
                .any(|b| a.eq_ignore_ascii_case(b))
        })
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.chars().collect(),
        }
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({:?})", String::from(self.clone()))
    }
}

impl TryFrom<String> for Alphabet {
    type Error = NumeralError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.iter().collect()
    }
}

// ============================================================================
// Complete Numeral Configuration
// ============================================================================

/// Configuration bound to a [`NumeralEngine`](crate::engine::NumeralEngine).
///
/// Every constructor validates, so a case-insensitive configuration never
/// holds two symbols that differ only by case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawConfig")
)]
pub struct NumeralConfig {
    /// Digit symbols in value order
    alphabet: Alphabet,

    /// When false, letter digits match regardless of ASCII case
    case_sensitive: bool,
}

impl NumeralConfig {
    /// Create a new configuration with the default alphabet, case-insensitive
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from its parts.
    ///
    /// # Errors
    /// Returns `InvalidAlphabet` if `case_sensitive` is false and two symbols
    /// differ only by case.
    pub fn try_new(alphabet: Alphabet, case_sensitive: bool) -> NumeralResult<Self> {
        let config = Self {
            alphabet,
            case_sensitive,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builder method: Replace the digit alphabet
    pub fn with_alphabet(self, alphabet: Alphabet) -> NumeralResult<Self> {
        Self::try_new(alphabet, self.case_sensitive)
    }

    /// Builder method: Set case sensitivity of letter digits
    pub fn with_case_sensitive(self, case_sensitive: bool) -> NumeralResult<Self> {
        Self::try_new(self.alphabet, case_sensitive)
    }

    /// Digit symbols in value order.
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// True if letter digits must match case exactly.
    #[inline]
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Largest base the alphabet supports.
    #[inline]
    pub fn max_base(&self) -> u32 {
        self.alphabet.len() as u32
    }

    /// Fail with `BaseOutOfRange` unless `2 <= base <= max_base()`.
    #[inline]
    pub fn check_base(&self, base: u32) -> NumeralResult<()> {
        if base < 2 || base > self.max_base() {
            Err(NumeralError::BaseOutOfRange(base))
        } else {
            Ok(())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumeralResult<()> {
        if self.alphabet.len() < 2 {
            return Err(NumeralError::InvalidAlphabet);
        }

        // Symbols differing only by case are indistinguishable when case-insensitive
        if !self.case_sensitive && self.alphabet.has_case_collision() {
            return Err(NumeralError::InvalidAlphabet);
        }

        Ok(())
    }

    /// Load and validate a configuration from JSON.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    /// - `InvalidAlphabet` if the alphabet string is unusable
    /// - `TypeMismatch` for malformed JSON or wrongly typed fields
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> NumeralResult<Self> {
        let raw: RawConfig =
            serde_json::from_str(json).map_err(|_| NumeralError::TypeMismatch)?;
        Self::try_from(raw)
    }
}

/// Wire form of [`NumeralConfig`]; every deserialization goes through
/// [`NumeralConfig::try_new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    alphabet: Option<String>,
    #[serde(default)]
    case_sensitive: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for NumeralConfig {
    type Error = NumeralError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let alphabet = match raw.alphabet {
            Some(symbols) => Alphabet::new(&symbols)?,
            None => Alphabet::default(),
        };
        Self::try_new(alphabet, raw.case_sensitive)
    }
}
