// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource records as reported by the inventory.

use crate::id::ResourceId;
use crate::load::LoadLevel;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

/// Kind of remote resource.
///
/// Types outside the known set are preserved as `Other` so the reconciler can
/// skip them with a log line instead of failing the whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceType {
    Ec2,
    Rdb,
    Alb,
    Other(SmolStr),
}

impl ResourceType {
    /// Parse case-insensitively; never fails.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "EC2" => ResourceType::Ec2,
            "RDB" | "RDS" => ResourceType::Rdb,
            "ALB" => ResourceType::Alb,
            _ => ResourceType::Other(SmolStr::new(trimmed)),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ResourceType::Other(_))
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceType::Ec2 => f.write_str("EC2"),
            ResourceType::Rdb => f.write_str("RDB"),
            ResourceType::Alb => f.write_str("ALB"),
            ResourceType::Other(name) => f.write_str(name),
        }
    }
}

impl From<String> for ResourceType {
    fn from(s: String) -> Self {
        ResourceType::parse(&s)
    }
}

impl From<&str> for ResourceType {
    fn from(s: &str) -> Self {
        ResourceType::parse(s)
    }
}

impl From<ResourceType> for String {
    fn from(t: ResourceType) -> Self {
        t.to_string()
    }
}

/// One remote resource as seen by a single poll. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: ResourceId,
    pub display_name: String,
    pub resource_type: ResourceType,
    pub load_level: LoadLevel,
    /// Always finite and non-negative.
    pub cost: f64,
}

impl ResourceRecord {
    pub fn new(
        id: ResourceId,
        display_name: String,
        resource_type: ResourceType,
        load_level: LoadLevel,
        cost: f64,
    ) -> Self {
        Self { id, display_name, resource_type, load_level, cost: sanitize_cost(cost) }
    }
}

/// Clamp a reported cost into the valid range.
pub fn sanitize_cost(cost: f64) -> f64 {
    if cost.is_finite() && cost > 0.0 {
        cost
    } else {
        0.0
    }
}

/// Current load level of a single resource, as returned by a state lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceState {
    pub id: ResourceId,
    pub load_level: LoadLevel,
}

crate::builder! {
    pub struct ResourceRecordBuilder => ResourceRecord via ResourceRecord::new {
        into {
            id: ResourceId = "res-1",
            display_name: String = "resource",
        }
        set {
            resource_type: ResourceType = ResourceType::Ec2,
            load_level: LoadLevel = LoadLevel::Middle,
            cost: f64 = 0.0,
        }
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
