//! Logging bootstrap for test binaries.

use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber. Safe to call from every test binary;
/// repeat calls are no-ops.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,sea_orm=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}
