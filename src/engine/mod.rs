// ============================================================================
// Engine Module
// Binds configuration to the numeral operations
// ============================================================================

mod numeral_engine;

pub mod factory;

pub use factory::{create_from_config, NumeralEngineBuilder};
pub use numeral_engine::NumeralEngine;
