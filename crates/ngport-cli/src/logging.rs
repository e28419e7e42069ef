//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so stdout carries only the status line.
//!
//! # Log Levels
//!
//! - `error`: I/O failures
//! - `warn`: default level
//! - `info`: pipeline progress
//! - `debug`: extraction details, including why no state was found

use std::env;
use std::io;

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Environment variable read when no level flag is given.
pub const LOG_LEVEL_ENV: &str = "NGPORT_LOG_LEVEL";

/// Crates whose events pass the default filter.
const LOG_TARGETS: [&str; 4] = ["ngport", "ngport_cli", "ngport_parser", "ngport_codegen"];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level for ngport crates.
    pub level: Level,
    /// Whether `RUST_LOG` may override `level`.
    pub use_env_filter: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            use_env_filter: true,
            with_target: false,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Set log level directly.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable ANSI colors.
    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Parse a level name, case-insensitively.
pub fn parse_level(level_str: &str) -> Option<Level> {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Level from [`LOG_LEVEL_ENV`], falling back to `WARN`.
pub fn level_from_env() -> Level {
    match env::var(LOG_LEVEL_ENV) {
        Ok(value) => parse_level(&value).unwrap_or_else(|| {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                value
            );
            Level::WARN
        }),
        Err(_) => Level::WARN,
    }
}

/// Build the filter: `RUST_LOG` if allowed and set, otherwise `level` for
/// ngport crates and `warn` for everything else.
pub fn build_env_filter(config: &LogConfig) -> EnvFilter {
    if config.use_env_filter {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
    }
    let directives = LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, config.level.as_str().to_lowercase()))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(format!("warn,{}", directives))
}

/// Initialize the global tracing subscriber writing to stderr.
///
/// # Panics
///
/// Panics if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) {
    init_logging_with_writer(config, io::stderr);
}

/// Initialize logging with a custom writer (useful for testing).
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target)
        .without_time();

    tracing_subscriber::registry()
        .with(build_env_filter(config))
        .with(layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_level(" WARN "), Some(Level::WARN));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_default_filter_targets_ngport_crates() {
        let config = LogConfig {
            use_env_filter: false,
            ..LogConfig::default()
        }
        .with_level(Level::DEBUG);
        let filter = build_env_filter(&config).to_string().to_lowercase();
        assert!(filter.contains("ngport_parser=debug"));
        assert!(filter.contains("ngport_codegen=debug"));
        assert!(filter.contains("warn"));
    }
}
