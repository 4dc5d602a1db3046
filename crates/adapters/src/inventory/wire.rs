// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decoding of the `/instances` payload.
//!
//! ```json
//! [{"type": "EC2", "arn": "arn:...", "name": "web", "state": "medium", "cost": 0.5}]
//! ```

use super::InventoryError;
use herd_core::{LoadLevel, ResourceRecord, ResourceType};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct WireInstance {
    #[serde(rename = "type")]
    kind: String,
    arn: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    cost: f64,
}

/// Decode an instance list.
///
/// Unknown states fall back to `Middle` with a warning. Unknown types are kept
/// as `ResourceType::Other`; deciding whether to materialize them is the
/// reconciler's job.
pub fn decode_instances(json: &str) -> Result<Vec<ResourceRecord>, InventoryError> {
    let items: Vec<WireInstance> =
        serde_json::from_str(json).map_err(|e| InventoryError::Malformed(e.to_string()))?;

    Ok(items
        .into_iter()
        .map(|item| {
            let load_level = LoadLevel::parse(&item.state).unwrap_or_else(|| {
                warn!(arn = %item.arn, state = %item.state, "unknown instance state, defaulting to middle");
                LoadLevel::Middle
            });
            let display_name = if item.name.is_empty() { item.arn.clone() } else { item.name };
            ResourceRecord::new(
                item.arn.into(),
                display_name,
                ResourceType::parse(&item.kind),
                load_level,
                item.cost,
            )
        })
        .collect())
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
