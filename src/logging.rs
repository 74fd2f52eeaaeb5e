//! Diagnostic logging setup.
//!
//! Progress lines for the operator go through [`crate::ingestion::CatalogObserver`]; this
//! module only wires `tracing` diagnostics (header detection, column mapping, skipped files)
//! to stderr.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` controls the filter (default: `warn`), e.g. `RUST_LOG=portfolio_catalog=debug`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Subscriber for tests: debug level, captured by the test harness.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
