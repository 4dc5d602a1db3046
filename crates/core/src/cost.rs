// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cost presentation: size scaling, warning threshold and nameplate text.

use serde::{Deserialize, Serialize};

/// Parameters mapping a resource cost to its visual presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostDisplay {
    pub min_scale: f32,
    pub max_scale: f32,
    /// Costs at or above this raise the warning marker.
    pub warning_threshold: f64,
    /// Costs are clamped to `[0, max_cost]` before scaling.
    pub max_cost: f64,
}

impl Default for CostDisplay {
    fn default() -> Self {
        Self { min_scale: 0.8, max_scale: 1.5, warning_threshold: 2.0, max_cost: 5.0 }
    }
}

/// Derived visual state for one cost value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostView {
    pub scale: f32,
    pub warning: bool,
}

impl CostDisplay {
    pub fn view(&self, cost: f64) -> CostView {
        let normalized =
            if self.max_cost > 0.0 { (cost.clamp(0.0, self.max_cost) / self.max_cost) as f32 } else { 0.0 };
        CostView {
            scale: self.min_scale + (self.max_scale - self.min_scale) * normalized,
            warning: cost >= self.warning_threshold,
        }
    }
}

/// Two-line nameplate: display name, then cost in dollars.
pub fn nameplate(display_name: &str, cost: f64) -> String {
    format!("{}\n${:.2}", display_name, cost)
}

#[cfg(test)]
#[path = "cost_tests.rs"]
mod tests;
