//! Tracing setup shared by both sample binaries.
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "GLSAMPLE_LOG";

/// Filter used when `GLSAMPLE_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Output goes to stderr, stdout belongs to the samples.
pub fn install_tracing() {
    let filter_layer = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
