// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inventory backed by a JSON document on disk.

use super::{decode_instances, InventoryError, InventoryProvider};
use async_trait::async_trait;
use herd_core::{ResourceId, ResourceRecord, ResourceState};
use std::path::{Path, PathBuf};

/// Reads the instance list from a file on every call.
///
/// Whatever process maintains the file acts as the remote system; a missing
/// or unreadable file counts as a transport failure.
#[derive(Clone, Debug)]
pub struct FileInventory {
    path: PathBuf,
}

impl FileInventory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl InventoryProvider for FileInventory {
    async fn list(&self) -> Result<Vec<ResourceRecord>, InventoryError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| InventoryError::Transport(format!("{}: {}", self.path.display(), e)))?;
        decode_instances(&json)
    }

    async fn get_state(&self, id: &ResourceId) -> Result<ResourceState, InventoryError> {
        self.list()
            .await?
            .into_iter()
            .find(|r| &r.id == id)
            .map(|r| ResourceState { id: r.id, load_level: r.load_level })
            .ok_or_else(|| InventoryError::UnknownIdentifier(id.clone()))
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
