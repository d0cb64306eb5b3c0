//! Logging initialisation
//!
//! Uses tracing-subscriber; RUST_LOG overrides the default level.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the global subscriber, writing to stderr
///
/// Default level is `info`, or `debug` when `verbose` is set.
/// RUST_LOG (e.g. `RUST_LOG=gff_app=trace`) takes precedence.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

/// Subscriber for tests; safe to call more than once
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
