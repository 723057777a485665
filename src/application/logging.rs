//! # Logging Setup
//!
//! Installs the global tracing subscriber. stdout carries the MCP protocol,
//! so console output goes to stderr; an optional file sink writes
//! `<dir>/server.log`.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::domain::config::LoggingConfig;

pub const LOG_FILE: &str = "server.log";
const DEFAULT_FILTER: &str = "info,rmcp=warn,sqlx=warn,hyper=warn,reqwest=warn";

/// Filter from `RUST_LOG`, then the CLI level, then the built-in default.
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        Some(level) => EnvFilter::new(format!("{level},rmcp=warn,sqlx=warn")),
        None => EnvFilter::new(DEFAULT_FILTER),
    })
}

/// Keep the returned guard alive for the lifetime of the process, or buffered
/// file output is lost.
pub fn init(config: &LoggingConfig, level: Option<&str>) -> Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    let (file_layer, guard) = if config.file {
        let dir = Path::new(&config.dir);
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
        }
        let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
