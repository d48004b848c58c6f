// ============================================================================
// Logging Setup
// Optional tracing subscriber for binaries and tests
// ============================================================================

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a fmt subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Safe to call repeatedly; only the first call has an effect, and an
/// already installed global subscriber is left in place.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    });
}
