// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup.
//!
//! Logs go to stderr (stdout belongs to the console) or, when configured, to
//! a file through a non-blocking writer.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::lifecycle::{LifecycleError, LogConfig};

/// Build the filter: `RUST_LOG` wins over the configured level.
pub fn filter(config: &LogConfig) -> Result<EnvFilter, LifecycleError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| LifecycleError::Logging(format!("bad log level {:?}: {}", config.level, e))),
    }
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered file output is flushed.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, LifecycleError> {
    let filter = filter(config)?;
    match &config.file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| LifecycleError::Logging(format!("not a file path: {}", path.display())))?;
            std::fs::create_dir_all(dir)
                .map_err(|e| LifecycleError::Logging(format!("{}: {}", dir.display(), e)))?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| LifecycleError::Logging(e.to_string()))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| LifecycleError::Logging(e.to_string()))?;
            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
