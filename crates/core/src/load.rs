// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Load level of a resource and the movement-speed policy derived from it.

use serde::{Deserialize, Serialize};

/// Three-valued load indicator reported by the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadLevel {
    Low,
    #[default]
    Middle,
    High,
}

crate::simple_display! {
    LoadLevel {
        Low => "low",
        Middle => "middle",
        High => "high",
    }
}

impl LoadLevel {
    pub const ALL: [LoadLevel; 3] = [LoadLevel::Low, LoadLevel::Middle, LoadLevel::High];

    /// Parse a wire state string, case-insensitively.
    ///
    /// `medium` is accepted as an alias for `middle`. Returns `None` for
    /// anything else so the caller decides the fallback.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(LoadLevel::Low),
            "middle" | "medium" => Some(LoadLevel::Middle),
            "high" => Some(LoadLevel::High),
            _ => None,
        }
    }

    /// Next level in the LOW → MIDDLE → HIGH → LOW cycle.
    pub fn next(self) -> Self {
        match self {
            LoadLevel::Low => LoadLevel::Middle,
            LoadLevel::Middle => LoadLevel::High,
            LoadLevel::High => LoadLevel::Low,
        }
    }

    /// Movement-speed multiplier for this load level.
    ///
    /// Inverse on purpose: a busier resource moves slower.
    pub fn speed_factor(self) -> f32 {
        match self {
            LoadLevel::High => 0.5,
            LoadLevel::Middle => 1.0,
            LoadLevel::Low => 1.3,
        }
    }
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
