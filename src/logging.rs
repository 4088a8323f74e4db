// src/logging.rs

//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! The launcher has no flags of its own, so the level comes from the
//! `NVNODETOP_LOG` environment variable (e.g. "debug"), defaulting to
//! `warn`. Logs go to STDERR; stdout belongs entirely to the wrapped
//! script, and a silent success path keeps the launcher invisible.

use anyhow::Result;
use tracing_subscriber::fmt;

/// Environment variable controlling the log level.
pub const LOG_ENV: &str = "NVNODETOP_LOG";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging() -> Result<()> {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|s| parse_level_str(&s))
        .unwrap_or(tracing::Level::WARN);

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
