// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tunables for agent behavior and inventory polling.
//!
//! Times are plain seconds so the structs deserialize directly from the
//! daemon's TOML file.

use crate::error::ConfigError;
use herd_core::Vec2;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-agent locomotion settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Shortest idle wait, seconds.
    pub min_wait: f64,
    /// Longest idle wait, seconds.
    pub max_wait: f64,
    /// Base movement speed, units per second.
    pub move_speed: f32,
    /// Heading interpolation rate, fraction of the remaining arc per second.
    pub rotation_speed: f32,
    /// Direction agents face when at rest.
    pub default_facing: Vec2,
    /// Distance at which a destination counts as reached.
    pub arrival_epsilon: f32,
    /// Heading error, degrees, at which rotation counts as done.
    pub angular_tolerance: f32,
    /// Movement and rotation ticks per second.
    pub tick_rate: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            min_wait: 3.0,
            max_wait: 10.0,
            move_speed: 2.0,
            rotation_speed: 5.0,
            default_facing: Vec2::new(0.0, -1.0),
            arrival_epsilon: 0.1,
            angular_tolerance: 0.1,
            tick_rate: 60.0,
        }
    }
}

impl BehaviorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_wait.is_finite() && self.min_wait >= 0.0) {
            return Err(ConfigError::invalid("min_wait", "must be a non-negative number"));
        }
        if !(self.max_wait.is_finite() && self.max_wait >= self.min_wait) {
            return Err(ConfigError::invalid("max_wait", "must be at least min_wait"));
        }
        positive("move_speed", self.move_speed)?;
        positive("rotation_speed", self.rotation_speed)?;
        positive("arrival_epsilon", self.arrival_epsilon)?;
        positive("angular_tolerance", self.angular_tolerance)?;
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(ConfigError::invalid("tick_rate", "must be positive"));
        }
        nonzero("tick_rate", self.tick())?;
        if self.max_wait > 0.0 {
            nonzero("max_wait", self.max_wait())?;
        }
        if self.default_facing.normalized().is_none() {
            return Err(ConfigError::invalid("default_facing", "must be a non-zero vector"));
        }
        Ok(())
    }

    pub fn min_wait(&self) -> Duration {
        secs(self.min_wait)
    }

    pub fn max_wait(&self) -> Duration {
        secs(self.max_wait)
    }

    pub fn tick(&self) -> Duration {
        secs(1.0 / self.tick_rate)
    }

    /// Yaw of the resting direction.
    pub fn default_yaw(&self) -> f32 {
        self.default_facing.yaw()
    }
}

/// Inventory polling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcilerConfig {
    /// Seconds between polls.
    pub poll_period: f64,
    /// Seconds a poll may take before it is abandoned.
    pub poll_timeout: f64,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self { poll_period: 0.1, poll_timeout: 2.0 }
    }
}

impl ReconcilerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.poll_period.is_finite() && self.poll_period > 0.0) {
            return Err(ConfigError::invalid("poll_period", "must be positive"));
        }
        if !(self.poll_timeout.is_finite() && self.poll_timeout > 0.0) {
            return Err(ConfigError::invalid("poll_timeout", "must be positive"));
        }
        nonzero("poll_period", self.poll_period())?;
        nonzero("poll_timeout", self.poll_timeout())?;
        Ok(())
    }

    pub fn poll_period(&self) -> Duration {
        secs(self.poll_period)
    }

    pub fn poll_timeout(&self) -> Duration {
        secs(self.poll_timeout)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be positive"))
    }
}

/// Tiny or oversized values collapse to a zero `Duration`, which timers reject.
fn nonzero(field: &'static str, value: Duration) -> Result<(), ConfigError> {
    if value.is_zero() {
        Err(ConfigError::invalid(field, "is out of range"))
    } else {
        Ok(())
    }
}

fn secs(value: f64) -> Duration {
    Duration::try_from_secs_f64(value).unwrap_or_default()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
