//! Logging bootstrap.
//!
//! Wires the persisted log-level preference into the `tracing` ecosystem.
//! RUST_LOG always wins over the stored setting.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::models::LogLevel;

/// Initialize the global tracing subscriber.
///
/// Respects the RUST_LOG environment variable and falls back to the
/// provided level. Should be called once at application startup.
pub fn init_tracing(default_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_to_filter_str(default_level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Convert a settings log level to a tracing filter string.
///
/// CRITICAL has no tracing counterpart and maps onto `error`.
fn level_to_filter_str(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warning => "warn",
        LogLevel::Error | LogLevel::Critical => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_to_filter_works() {
        assert_eq!(level_to_filter_str(LogLevel::Debug), "debug");
        assert_eq!(level_to_filter_str(LogLevel::Warning), "warn");
        assert_eq!(level_to_filter_str(LogLevel::Critical), "error");
    }
}
