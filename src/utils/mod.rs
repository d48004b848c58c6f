// ============================================================================
// Utilities Module
// Helper functions outside the numeral arithmetic itself
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
