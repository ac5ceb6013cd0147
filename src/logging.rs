//! Diagnostics on standard error
//!
//! Standard output carries the flags line and nothing else, so every event is
//! written to stderr. The filter comes from the `-v` count rather than the
//! environment.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Map the number of `-v` flags to a filter directive.
pub fn level_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global stderr subscriber.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::new(level_directive(verbosity));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}
