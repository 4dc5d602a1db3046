// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process inventory with canned resources, for running without a backend.

use super::{InventoryError, InventoryProvider};
use async_trait::async_trait;
use herd_core::{LoadLevel, ResourceId, ResourceRecord, ResourceState, ResourceType};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub const MOCK_EC2_ARN: &str = "arn:aws:ec2:us-west-2:123456789012:instance/i-1234567890abcdef0";
pub const MOCK_RDB_ARN: &str = "arn:aws:rds:us-west-2:123456789012:db:mock-db";
pub const MOCK_ALB_ARN: &str =
    "arn:aws:elasticloadbalancing:us-west-2:123456789012:loadbalancer/app/mock-alb/1234567890abcdef";

/// Default simulated round-trip latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Mock inventory shared between the poller and the operator console.
///
/// Clones share state, so a `cycle` issued through one handle shows up in
/// the next `list` of every other handle.
#[derive(Clone)]
pub struct MockInventory {
    records: Arc<Mutex<Vec<ResourceRecord>>>,
    latency: Duration,
}

impl Default for MockInventory {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl MockInventory {
    /// Inventory seeded with one EC2, one RDB and one ALB, all at `Middle`.
    pub fn new(latency: Duration) -> Self {
        let seed = |arn: &str, name: &str, resource_type| {
            ResourceRecord::new(arn.into(), name.to_string(), resource_type, LoadLevel::Middle, 0.0)
        };
        Self::with_records(
            vec![
                seed(MOCK_EC2_ARN, "Mock-EC2", ResourceType::Ec2),
                seed(MOCK_RDB_ARN, "Mock-RDB", ResourceType::Rdb),
                seed(MOCK_ALB_ARN, "Mock-ALB", ResourceType::Alb),
            ],
            latency,
        )
    }

    pub fn with_records(records: Vec<ResourceRecord>, latency: Duration) -> Self {
        Self { records: Arc::new(Mutex::new(records)), latency }
    }

    /// Look up the current record for `id`.
    pub fn record(&self, id: &str) -> Option<ResourceRecord> {
        self.records.lock().iter().find(|r| r.id == id).cloned()
    }

    /// Advance a resource's load level LOW → MIDDLE → HIGH → LOW.
    ///
    /// Returns the new level, or `None` if the id is unknown.
    pub fn cycle(&self, id: &str) -> Option<LoadLevel> {
        let mut records = self.records.lock();
        let record = records.iter_mut().find(|r| r.id == id)?;
        record.load_level = record.load_level.next();
        info!(resource = %record.id, level = %record.load_level, "mock load level changed");
        Some(record.load_level)
    }

    pub fn set_cost(&self, id: &str, cost: f64) -> bool {
        let mut records = self.records.lock();
        match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.cost = herd_core::sanitize_cost(cost);
                true
            }
            None => false,
        }
    }

    /// Add a resource, replacing any existing record with the same id.
    pub fn insert(&self, record: ResourceRecord) {
        let mut records = self.records.lock();
        records.retain(|r| r.id != record.id);
        records.push(record);
    }

    pub fn remove(&self, id: &str) -> Option<ResourceRecord> {
        let mut records = self.records.lock();
        let pos = records.iter().position(|r| r.id == id)?;
        Some(records.remove(pos))
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl InventoryProvider for MockInventory {
    async fn list(&self) -> Result<Vec<ResourceRecord>, InventoryError> {
        self.simulate_latency().await;
        Ok(self.records.lock().clone())
    }

    async fn get_state(&self, id: &ResourceId) -> Result<ResourceState, InventoryError> {
        self.simulate_latency().await;
        self.record(id)
            .map(|r| ResourceState { id: r.id, load_level: r.load_level })
            .ok_or_else(|| InventoryError::UnknownIdentifier(id.clone()))
    }
}

#[cfg(test)]
#[path = "mock_tests.rs"]
mod tests;
