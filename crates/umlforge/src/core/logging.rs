//! Logging infrastructure
//!
//! Structured logging via the `tracing` crate, configurable by level and
//! format and WASM-compatible for browser embeddings.
//!
//! # Log Levels
//!
//! - `trace`: very detailed information, typically only interesting when debugging
//! - `debug`: detailed information for debugging
//! - `info`: general informational messages (default)
//! - `warn`: warning messages
//! - `error`: error messages
//!
//! # Log Formats
//!
//! - `compact`: single-line format, good for production
//! - `pretty`: multi-line format with colors, good for development
//! - `json`: JSON format, good for log aggregation systems
//!
//! # Environment Variables
//!
//! - `UMLFORGE_LOG_LEVEL`: set log level (trace|debug|info|warn|error)
//! - `UMLFORGE_LOG_FORMAT`: set log format (compact|pretty|json)
//! - `RUST_LOG`: alternative way to set log level (tracing-subscriber standard)
//!
//! # Filtering Logs
//!
//! ```bash
//! # Show only generator logs at debug level
//! RUST_LOG="umlforge::generators=debug" umlforge generate -i project.json
//! ```

use std::str::FromStr;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

#[cfg(target_arch = "wasm32")]
use tracing_wasm::WASMLayerConfig;

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Initialize the tracing subscriber with the given log level and format
///
/// # Arguments
///
/// * `level` - Optional log level string (trace|debug|info|warn|error).
///   If None, uses environment variable `UMLFORGE_LOG_LEVEL` or `RUST_LOG`,
///   or defaults to `info`.
/// * `format` - Optional log format (compact|pretty|json).
///   If None, uses environment variable `UMLFORGE_LOG_FORMAT`,
///   or defaults to `compact`.
///
/// # Returns
///
/// Returns an error if initialization fails (e.g., subscriber already
/// initialized).
///
/// # Example
///
/// ```no_run
/// use umlforge::core::logging::init_logging;
///
/// init_logging(None, None).unwrap();
/// ```
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_arch = "wasm32")]
    {
        // tracing-wasm logs to the browser console; level filtering happens
        // via RUST_LOG in the browser, format is ignored.
        let _ = (level, format);
        tracing_wasm::set_as_global_default_with_config(WASMLayerConfig::default());

        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let log_level = level
            .map(|s| s.to_string())
            .or_else(|| std::env::var("UMLFORGE_LOG_LEVEL").ok())
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| "info".to_string());

        let log_format = format
            .map(|s| s.to_string())
            .or_else(|| std::env::var("UMLFORGE_LOG_FORMAT").ok())
            .unwrap_or_else(|| "compact".to_string());

        let filter = if log_level == "off" {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&log_level))
                .unwrap_or_else(|_| EnvFilter::new("info"))
        };

        let format = LogFormat::from_str(&log_format)
            .map_err(|e| format!("Invalid log format: {}", e))?;

        match format {
            LogFormat::Compact => {
                Registry::default()
                    .with(filter)
                    .with(
                        fmt::Layer::default()
                            .with_target(false)
                            .with_level(true)
                            .with_file(false)
                            .with_line_number(false)
                            .with_span_events(FmtSpan::NONE),
                    )
                    .try_init()?;
            }
            LogFormat::Pretty => {
                Registry::default()
                    .with(filter)
                    .with(
                        fmt::Layer::default()
                            .with_target(true)
                            .with_level(true)
                            .with_file(true)
                            .with_line_number(true)
                            .with_span_events(FmtSpan::ACTIVE)
                            .pretty(),
                    )
                    .try_init()?;
            }
            LogFormat::Json => {
                Registry::default()
                    .with(filter)
                    .with(
                        fmt::Layer::default()
                            .with_target(true)
                            .with_level(true)
                            .with_file(true)
                            .with_line_number(true)
                            .with_span_events(FmtSpan::ACTIVE)
                            .json(),
                    )
                    .try_init()?;
            }
        }

        Ok(())
    }
}

/// Initialize logging with default settings (info level, compact format)
///
/// This is a convenience function that calls `init_logging(None, None)`.
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
        assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::from_str("COMPACT").unwrap(), LogFormat::Compact);
        assert!(LogFormat::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_format_variants() {
        let variants = LogFormat::variants();
        assert!(variants.contains(&"compact"));
        assert!(variants.contains(&"pretty"));
        assert!(variants.contains(&"json"));
    }
}
