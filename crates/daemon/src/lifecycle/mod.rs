// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle management: configuration, startup, shutdown.

mod startup;
pub use startup::{startup, Daemon};

use std::path::{Path, PathBuf};
use std::time::Duration;

use herd_adapters::BoundsError;
use herd_core::{CostDisplay, Rect, Vec2};
use herd_engine::{BehaviorConfig, ConfigError, ReconcilerConfig};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Where resource snapshots come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventorySource {
    /// Three canned resources, driven from the console.
    #[default]
    Mock,
    /// A JSON file in the wire format, re-read on every poll.
    File,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InventoryConfig {
    pub source: InventorySource,
    /// Required for `source = "file"`.
    pub path: Option<PathBuf>,
    /// Simulated round-trip time of the mock inventory.
    pub latency_ms: u64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self { source: InventorySource::Mock, path: None, latency_ms: 500 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChatConfig {
    /// Simulated round-trip time of the mock chat service.
    pub latency_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { latency_ms: 500 }
    }
}

/// Area agents wander in: a rectangle, or fixed waypoints when any are given.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoundsConfig {
    pub min: Vec2,
    pub max: Vec2,
    pub waypoints: Vec<Vec2>,
}

impl BoundsConfig {
    pub fn rect(&self) -> Rect {
        Rect::new(self.min, self.max)
    }
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self { min: Vec2::new(-10.0, -10.0), max: Vec2::new(10.0, 10.0), waypoints: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Write logs here instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), file: None }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Shown while a chat round-trip is pending.
    pub thinking_text: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { thinking_text: "Thinking...".to_string() }
    }
}

/// Daemon configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub inventory: InventoryConfig,
    pub chat: ChatConfig,
    pub reconciler: ReconcilerConfig,
    pub behavior: BehaviorConfig,
    pub bounds: BoundsConfig,
    pub cost: CostDisplay,
    pub log: LogConfig,
    pub console: ConsoleConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// File resolution: `explicit` > `HERD_CONFIG` > the default config path.
    /// A missing default file means built-in defaults; a missing explicit
    /// file is an error. Environment overrides apply last.
    pub fn load(explicit: Option<&Path>) -> Result<Self, LifecycleError> {
        let named = explicit.map(Path::to_path_buf).or_else(crate::env::config_path);
        let mut config = match named {
            Some(path) => {
                if !path.exists() {
                    return Err(LifecycleError::ConfigNotFound(path));
                }
                Self::from_file(&path)?
            }
            None => match crate::env::default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("no config file, using defaults");
                    Self::default()
                }
            },
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, LifecycleError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| LifecycleError::ReadConfig(path.to_path_buf(), e))?;
        let config = Self::from_toml(&text).map_err(|e| match e {
            LifecycleError::ParseConfig(_, source) => LifecycleError::ParseConfig(path.to_path_buf(), source),
            other => other,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse TOML without touching the environment or validating.
    pub fn from_toml(text: &str) -> Result<Self, LifecycleError> {
        toml::from_str(text).map_err(|e| LifecycleError::ParseConfig(PathBuf::from("<inline>"), e))
    }

    pub fn apply_env_overrides(&mut self) {
        if let Some(period) = crate::env::poll_period() {
            self.reconciler.poll_period = period.as_secs_f64();
        }
        if let Some(timeout) = crate::env::poll_timeout() {
            self.reconciler.poll_timeout = timeout.as_secs_f64();
        }
        if let Some(level) = crate::env::log_level() {
            self.log.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), LifecycleError> {
        self.behavior.validate()?;
        self.reconciler.validate()?;
        let rect = self.bounds.rect();
        if self.bounds.waypoints.is_empty() && rect.is_empty() {
            return Err(BoundsError::EmptyRegion(rect).into());
        }
        if self.inventory.source == InventorySource::File && self.inventory.path.is_none() {
            return Err(LifecycleError::MissingInventoryPath);
        }
        if !(self.cost.max_scale >= self.cost.min_scale && self.cost.min_scale > 0.0) {
            return Err(LifecycleError::Invalid(ConfigError::Invalid {
                field: "cost",
                reason: "scales must be positive with max_scale >= min_scale".to_string(),
            }));
        }
        Ok(())
    }

    pub fn inventory_latency(&self) -> Duration {
        Duration::from_millis(self.inventory.latency_ms)
    }

    pub fn chat_latency(&self) -> Duration {
        Duration::from_millis(self.chat.latency_ms)
    }
}

/// Errors that prevent the daemon from starting
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("failed to read {0}: {1}")]
    ReadConfig(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    ParseConfig(PathBuf, #[source] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] ConfigError),

    #[error("invalid bounds: {0}")]
    Bounds(#[from] BoundsError),

    #[error("inventory source \"file\" requires inventory.path")]
    MissingInventoryPath,

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
