// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource inventory adapters
//!
//! The `InventoryProvider` trait is the engine's only view of the remote
//! system. Implementations:
//! - `MockInventory`: three canned resources with operator-driven load changes
//! - `FileInventory`: re-reads a JSON document in the wire format each poll
//! - `FakeInventory`: scripted snapshots and failures for tests

mod file;
mod mock;
mod wire;

pub use file::FileInventory;
pub use mock::{MockInventory, MOCK_ALB_ARN, MOCK_EC2_ARN, MOCK_RDB_ARN};
pub use wire::decode_instances;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeInventory;

use async_trait::async_trait;
use herd_core::{ResourceId, ResourceRecord, ResourceState};
use thiserror::Error;

/// Errors from inventory operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    /// The call did not complete (connection, I/O, timeout).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The call completed but the payload could not be decoded.
    #[error("malformed inventory payload: {0}")]
    Malformed(String),
    /// The provider does not know the requested resource.
    #[error("unknown resource: {0}")]
    UnknownIdentifier(ResourceId),
}

/// Source of resource snapshots
#[async_trait]
pub trait InventoryProvider: Clone + Send + Sync + 'static {
    /// List every resource currently known to the remote system.
    ///
    /// Ordering of the returned records carries no meaning.
    async fn list(&self) -> Result<Vec<ResourceRecord>, InventoryError>;

    /// Current load level of a single resource.
    async fn get_state(&self, id: &ResourceId) -> Result<ResourceState, InventoryError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
