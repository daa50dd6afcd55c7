//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize logging with a default level, still overridable by `RUST_LOG`
///
/// Unknown level names fall back to `info`. Safe to call more than once;
/// later calls are ignored.
pub fn init_with_level(level: &str) {
    let filter = level.parse::<log::LevelFilter>().unwrap_or(log::LevelFilter::Info);
    let _ = env_logger::Builder::from_default_env()
        .filter_level(filter)
        .parse_env("RUST_LOG")
        .try_init();
}
