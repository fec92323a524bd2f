//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! experiment report.

use tracing::Level;

/// Install the global fmt subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    init_tracing_with_level(Level::INFO);
}

/// Install the global fmt subscriber with an explicit maximum level
pub fn init_tracing_with_level(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .try_init();
}
