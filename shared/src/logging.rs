//! Shared tracing setup for both tier binaries

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing once per process.
///
/// `level` (from `--log-level`) overrides `RUST_LOG` when provided;
/// everything defaults to `info`. Safe to call more than once, later calls
/// are no-ops.
pub fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
