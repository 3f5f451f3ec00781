//! Logging initialization for host test suites.

use tracing_subscriber::EnvFilter;

/// Initialize stderr logging for the current process.
///
/// Honors `RUST_LOG` when set, falling back to the given level. Repeated
/// initialization (common when several test binaries share a setup helper)
/// is ignored.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
