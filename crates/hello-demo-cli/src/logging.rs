//! Diagnostic logging setup.
//!
//! Logs always go to stderr: stdout carries only the greeting or help text.

/// Filter directive for the given verbosity.
pub fn log_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Installs the global `tracing` subscriber. Call once, from `main`.
pub fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_filter(verbose)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
