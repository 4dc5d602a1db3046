// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{LoadLevel, ResourceRecord, ResourceType};

/// Shorthand for a record with the display name derived from the id.
pub fn record(id: &str, resource_type: &str, load_level: LoadLevel, cost: f64) -> ResourceRecord {
    ResourceRecord::builder()
        .id(id)
        .display_name(format!("{}-name", id))
        .resource_type(ResourceType::parse(resource_type))
        .load_level(load_level)
        .cost(cost)
        .build()
}

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for inventory snapshots.
pub mod strategies {
    use crate::{LoadLevel, ResourceRecord, ResourceType};
    use proptest::prelude::*;

    pub fn arb_load_level() -> impl Strategy<Value = LoadLevel> {
        prop_oneof![Just(LoadLevel::Low), Just(LoadLevel::Middle), Just(LoadLevel::High)]
    }

    pub fn arb_known_type() -> impl Strategy<Value = ResourceType> {
        prop_oneof![Just(ResourceType::Ec2), Just(ResourceType::Rdb), Just(ResourceType::Alb)]
    }

    /// A snapshot of unique ids drawn from a small pool, so consecutive
    /// snapshots overlap and exercise create, update and remove together.
    pub fn arb_snapshot(max_len: usize) -> impl Strategy<Value = Vec<ResourceRecord>> {
        proptest::collection::btree_map(
            0u8..8,
            (arb_known_type(), arb_load_level(), 0.0f64..10.0),
            0..=max_len,
        )
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(n, (resource_type, load_level, cost))| {
                    ResourceRecord::new(
                        format!("res-{}", n).into(),
                        format!("resource {}", n),
                        resource_type,
                        load_level,
                        cost,
                    )
                })
                .collect()
        })
    }
}
