//! Diagnostic tracing for the runner.
//!
//! Answers go to stdout; everything logged here goes to stderr, so piping
//! `aoc -q` output stays clean regardless of `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`.
///
/// ```bash
/// RUST_LOG=aoc_solutions=debug aoc --day 5
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
