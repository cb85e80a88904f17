//! Tracing subscriber setup.

use tracing::level_filters::LevelFilter;

/// Install a stderr `fmt` subscriber at `level`. Stdout is left to reports.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(level: LevelFilter) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
