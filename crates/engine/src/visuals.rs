// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Visual cues driven by an agent's load level.

use herd_core::LoadLevel;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;

/// What the presentation layer should currently show for an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Visuals {
    /// Animator level selected for the current load level.
    pub animation_level: i32,
    /// Tired effect, active exactly while the agent is in `High`.
    pub tired: bool,
}

/// Shared, hook-written visual state of one agent.
pub type SharedVisuals = Arc<Mutex<Visuals>>;

/// Animator level for each load level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationLevels {
    pub low: i32,
    pub middle: i32,
    pub high: i32,
}

impl Default for AnimationLevels {
    fn default() -> Self {
        Self { low: 0, middle: 1, high: 2 }
    }
}

impl AnimationLevels {
    pub fn for_level(&self, level: LoadLevel) -> i32 {
        match level {
            LoadLevel::Low => self.low,
            LoadLevel::Middle => self.middle,
            LoadLevel::High => self.high,
        }
    }
}
