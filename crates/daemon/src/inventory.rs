// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inventory selected by configuration.

use async_trait::async_trait;
use herd_adapters::{FileInventory, InventoryError, InventoryProvider, MockInventory};
use herd_core::{ResourceId, ResourceRecord, ResourceState};

/// Routes inventory calls to the configured source.
#[derive(Clone)]
pub enum DaemonInventory {
    Mock(MockInventory),
    File(FileInventory),
}

#[async_trait]
impl InventoryProvider for DaemonInventory {
    async fn list(&self) -> Result<Vec<ResourceRecord>, InventoryError> {
        match self {
            DaemonInventory::Mock(inner) => inner.list().await,
            DaemonInventory::File(inner) => inner.list().await,
        }
    }

    async fn get_state(&self, id: &ResourceId) -> Result<ResourceState, InventoryError> {
        match self {
            DaemonInventory::Mock(inner) => inner.get_state(id).await,
            DaemonInventory::File(inner) => inner.get_state(id).await,
        }
    }
}
