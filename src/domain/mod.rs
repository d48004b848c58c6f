// ============================================================================
// Domain Models Module
// Configuration and value types for numeral strings
// ============================================================================

pub mod config;
pub mod numeral;

pub use config::{Alphabet, NumeralConfig, DEFAULT_SYMBOLS, MAX_SYMBOLS};
pub use numeral::Numeral;
