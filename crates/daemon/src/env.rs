// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the daemon crate.

use std::path::PathBuf;
use std::time::Duration;

/// Config file named by `HERD_CONFIG`, if set.
pub fn config_path() -> Option<PathBuf> {
    std::env::var("HERD_CONFIG").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Default config location: `$XDG_CONFIG_HOME/herd/config.toml` (or the
/// platform equivalent).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("herd").join("config.toml"))
}

/// Poll period override (`HERD_POLL_PERIOD_MS`)
pub fn poll_period() -> Option<Duration> {
    millis("HERD_POLL_PERIOD_MS")
}

/// Poll timeout override (`HERD_POLL_TIMEOUT_MS`)
pub fn poll_timeout() -> Option<Duration> {
    millis("HERD_POLL_TIMEOUT_MS")
}

/// Log filter override (`HERD_LOG`), e.g. `debug` or `herd_engine=trace`.
pub fn log_level() -> Option<String> {
    std::env::var("HERD_LOG").ok().filter(|s| !s.is_empty())
}

fn millis(name: &str) -> Option<Duration> {
    std::env::var(name).ok().and_then(|s| s.parse::<u64>().ok()).map(Duration::from_millis)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
