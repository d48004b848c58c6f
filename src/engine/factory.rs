// ============================================================================
// Numeral Engine Factory
// Creates numeral engines from validated configuration
// ============================================================================

use crate::domain::{Alphabet, NumeralConfig};
use crate::engine::NumeralEngine;
use crate::numeric::NumeralResult;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a numeral engine from configuration
///
/// # Arguments
/// * `config` - Alphabet and case-sensitivity configuration
///
/// # Returns
/// * `NumeralResult<NumeralEngine>` - Configured engine or `InvalidAlphabet`
///
/// # Example
/// ```
/// use numstr::domain::NumeralConfig;
/// use numstr::engine::create_from_config;
///
/// let config = NumeralConfig::new().with_case_sensitive(true).unwrap();
/// let engine = create_from_config(config).unwrap();
/// assert!(!engine.is_num_str("FF", 16, false).unwrap());
/// ```
pub fn create_from_config(config: NumeralConfig) -> NumeralResult<NumeralEngine> {
    config.validate()?;
    Ok(NumeralEngine::new(config))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating numeral engines with fluent API
///
/// # Example
/// ```
/// use numstr::engine::NumeralEngineBuilder;
///
/// let engine = NumeralEngineBuilder::new()
///     .alphabet("01234567")
///     .case_sensitive(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.inc_int("77", 8).unwrap(), "100");
/// ```
#[derive(Debug)]
pub struct NumeralEngineBuilder {
    alphabet: NumeralResult<Alphabet>,
    case_sensitive: bool,
}

impl Default for NumeralEngineBuilder {
    fn default() -> Self {
        Self::from_config(NumeralConfig::default())
    }
}

impl NumeralEngineBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: NumeralConfig) -> Self {
        Self {
            case_sensitive: config.case_sensitive(),
            alphabet: Ok(config.alphabet().clone()),
        }
    }

    /// Replace the digit alphabet. Errors surface from [`build`](Self::build).
    pub fn alphabet(mut self, symbols: &str) -> Self {
        self.alphabet = Alphabet::new(symbols);
        self
    }

    /// Set case sensitivity of letter digits
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Build the numeral engine
    ///
    /// # Errors
    /// `InvalidAlphabet` if the alphabet is unusable or, when
    /// case-insensitive, holds two symbols differing only by case.
    pub fn build(self) -> NumeralResult<NumeralEngine> {
        let config = NumeralConfig::try_new(self.alphabet?, self.case_sensitive)?;
        create_from_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumeralError;

    #[test]
    fn test_create_default_engine() {
        let engine = create_from_config(NumeralConfig::default()).unwrap();
        assert_eq!(engine.config().max_base(), 36);
    }

    #[test]
    fn test_builder_rejects_ambiguous_alphabet() {
        let result = NumeralEngineBuilder::new().alphabet("01aA").build();
        assert_eq!(result.unwrap_err(), NumeralError::InvalidAlphabet);

        let sensitive = NumeralConfig::try_new(Alphabet::new("01aA").unwrap(), true).unwrap();
        let result = NumeralEngineBuilder::from_config(sensitive)
            .case_sensitive(false)
            .build();
        assert_eq!(result.unwrap_err(), NumeralError::InvalidAlphabet);
    }

    #[test]
    fn test_case_sensitive_alphabet_steps_by_exact_symbol() {
        let engine = NumeralEngineBuilder::new()
            .alphabet("0aA")
            .case_sensitive(true)
            .build()
            .unwrap();

        assert_eq!(engine.inc_int("a", 3).unwrap(), "A");
        assert_eq!(engine.dec_int("A", 3).unwrap(), "a");
        assert_eq!(engine.inc_int("A", 3).unwrap(), "a0");
        assert_eq!(engine.dec_int("a0", 3).unwrap(), "A");
    }

    #[test]
    fn test_builder_pattern() {
        let engine = NumeralEngineBuilder::new()
            .alphabet("0123456789ABCDEF")
            .build()
            .unwrap();

        assert_eq!(engine.config().max_base(), 16);
        assert_eq!(engine.inc_int("ff", 16).unwrap(), "100");
        assert_eq!(engine.dec_int("100", 16).unwrap(), "FF");
        assert_eq!(
            engine.inc_int("1", 17).unwrap_err(),
            NumeralError::BaseOutOfRange(17)
        );
    }

    #[test]
    fn test_builder_invalid_alphabet() {
        let result = NumeralEngineBuilder::new().alphabet("0").build();
        assert_eq!(result.unwrap_err(), NumeralError::InvalidAlphabet);
    }

    #[test]
    fn test_builder_from_config() {
        let config = NumeralConfig::new().with_case_sensitive(true).unwrap();
        let sensitive = NumeralEngineBuilder::from_config(config.clone()).build().unwrap();
        assert_eq!(sensitive.config(), &config);
        assert!(!sensitive.is_num_str("FF", 16, false).unwrap());

        let engine = NumeralEngineBuilder::from_config(config)
            .case_sensitive(false)
            .build()
            .unwrap();
        assert!(engine.is_num_str("FF", 16, false).unwrap());
    }
}
