//! Tracing subscriber setup for the binary.
//!
//! Logs go to stderr so stdout carries only numerals. `WORDNUM_LOG` takes a
//! full `EnvFilter` directive and wins over the configured level.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

/// Env var holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "WORDNUM_LOG";

/// Build the filter: `WORDNUM_LOG` if set and valid, else `level`, else `warn`.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(level: &str, format: LogFormat) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
