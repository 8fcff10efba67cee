//! Logging related functions.

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

/// The default log level.
///
/// This will be used if `RUST_LOG` was not specified.
static DEFAULT_FILTER: &str = "WARN,acc_switcher=INFO";

/// Will initialize logging.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let level = env_filter.to_string();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter)
        .init();

    info!(%level, "Initialized logging");
}
