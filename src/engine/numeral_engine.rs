// ============================================================================
// Numeral Engine
// Binds one immutable configuration to the numeral operations
// ============================================================================

use crate::domain::NumeralConfig;
use crate::numeric::{self, NumeralResult, Precision};
use std::sync::{Arc, OnceLock};

/// Process-wide engine, fixed at first use.
static GLOBAL: OnceLock<NumeralEngine> = OnceLock::new();

/// Numeral arithmetic under a fixed alphabet and case policy.
///
/// Cheap to clone and safe to share between threads; the configuration
/// cannot change after construction.
#[derive(Debug, Clone, Default)]
pub struct NumeralEngine {
    config: Arc<NumeralConfig>,
}

impl NumeralEngine {
    /// Create an engine from an already validated configuration.
    ///
    /// Use [`create_from_config`](super::create_from_config) or the
    /// [`NumeralEngineBuilder`](super::NumeralEngineBuilder) to validate
    /// first.
    pub(crate) fn new(config: NumeralConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The process-wide engine. Defaults to the standard case-insensitive
    /// alphabet unless [`install_global`](Self::install_global) ran first.
    pub fn global() -> &'static NumeralEngine {
        GLOBAL.get_or_init(NumeralEngine::default)
    }

    /// Fix the process-wide engine.
    ///
    /// Succeeds only before the global engine is first used or installed;
    /// otherwise the rejected engine is handed back.
    pub fn install_global(engine: NumeralEngine) -> Result<(), NumeralEngine> {
        match GLOBAL.set(engine) {
            Ok(()) => {
                tracing::info!(
                    case_sensitive = Self::global().config.case_sensitive(),
                    max_base = Self::global().config.max_base(),
                    "installed global numeral engine"
                );
                Ok(())
            }
            Err(rejected) => {
                tracing::warn!("global numeral engine already initialised");
                Err(rejected)
            }
        }
    }

    /// The bound configuration.
    #[inline]
    pub fn config(&self) -> &NumeralConfig {
        &self.config
    }

    // ========================================================================
    // Digit layer
    // ========================================================================

    /// See [`numeric::char_to_val`].
    #[inline]
    pub fn char_to_val(&self, c: char) -> Option<u32> {
        numeric::char_to_val(&self.config, c)
    }

    /// See [`numeric::val_to_char`].
    #[inline]
    pub fn val_to_char(&self, value: u32) -> Option<char> {
        numeric::val_to_char(&self.config, value)
    }

    /// See [`numeric::change_case`].
    #[inline]
    pub fn change_case(&self, c: char) -> char {
        numeric::change_case(c)
    }

    // ========================================================================
    // Validation and normalization
    // ========================================================================

    /// See [`numeric::is_num_str`].
    pub fn is_num_str(&self, s: &str, base: u32, radix_point_ok: bool) -> NumeralResult<bool> {
        numeric::is_num_str(&self.config, s, base, radix_point_ok)
    }

    /// See [`numeric::rectify`].
    pub fn rectify(&self, s: &str) -> String {
        numeric::rectify(&self.config, s)
    }

    /// See [`numeric::remove_leading_zeros`].
    pub fn remove_leading_zeros(&self, s: &str) -> String {
        numeric::remove_leading_zeros(&self.config, s)
    }

    /// See [`numeric::remove_trailing_zeros`].
    pub fn remove_trailing_zeros(&self, s: &str) -> String {
        numeric::remove_trailing_zeros(&self.config, s)
    }

    /// See [`numeric::is_entirely`].
    pub fn is_entirely(&self, s: &str, c: char) -> bool {
        numeric::is_entirely(&self.config, s, c)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// See [`numeric::inc_int`].
    pub fn inc_int(&self, s: &str, base: u32) -> NumeralResult<String> {
        numeric::inc_int(&self.config, s, base)
    }

    /// See [`numeric::dec_int`].
    pub fn dec_int(&self, s: &str, base: u32) -> NumeralResult<String> {
        numeric::dec_int(&self.config, s, base)
    }

    /// See [`numeric::inc_char`].
    pub fn inc_char(&self, c: char, base: u32) -> NumeralResult<char> {
        numeric::inc_char(&self.config, c, base)
    }

    /// See [`numeric::dec_char`].
    pub fn dec_char(&self, c: char, base: u32) -> NumeralResult<char> {
        numeric::dec_char(&self.config, c, base)
    }

    /// See [`numeric::round_int`].
    pub fn round_int(&self, s: &str, precision: Precision) -> NumeralResult<String> {
        numeric::round_int(&self.config, s, precision)
    }

    /// See [`numeric::to_sci`].
    pub fn to_sci(&self, s: &str, min_exp: i64, precision: Precision) -> NumeralResult<String> {
        numeric::to_sci(&self.config, s, min_exp, precision)
    }
}
