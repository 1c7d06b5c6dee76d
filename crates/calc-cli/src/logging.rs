//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with command output. The filter comes
//! from `CALC_LOG` (same syntax as `RUST_LOG`) and defaults to `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CALC_LOG";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Already initialized is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
