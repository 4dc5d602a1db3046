// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only view of the live agent set.

use crate::agent::{AgentHandle, AgentSnapshot};
use herd_core::ResourceId;
use parking_lot::{RwLock, RwLockWriteGuard};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

#[derive(Default)]
pub(crate) struct Agents {
    pub(crate) handles: HashMap<ResourceId, AgentHandle>,
    /// Ids pinned in the suspended state. An agent spawned under a held id
    /// starts suspended.
    pub(crate) held: HashSet<ResourceId>,
}

/// Lookup of agent handles by resource id.
///
/// Only the reconciler mutates the handle map, holding the write lock for a
/// whole reconciliation pass, so readers never observe a half-applied pass.
#[derive(Clone, Default)]
pub struct AgentDirectory {
    inner: Arc<RwLock<Agents>>,
}

impl AgentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<AgentHandle> {
        self.inner.read().handles.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().handles.contains_key(id)
    }

    /// Ids of all live agents, sorted.
    pub fn ids(&self) -> Vec<ResourceId> {
        let mut ids: Vec<_> = self.inner.read().handles.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Snapshots of all live agents, sorted by id.
    pub fn snapshots(&self) -> Vec<AgentSnapshot> {
        let handles: Vec<AgentHandle> = self.inner.read().handles.values().cloned().collect();
        let mut snapshots: Vec<_> = handles.iter().map(AgentHandle::snapshot).collect();
        snapshots.sort_by(|a, b| a.id.cmp(&b.id));
        snapshots
    }

    pub fn len(&self) -> usize {
        self.inner.read().handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().handles.is_empty()
    }

    /// Pin `id` suspended and suspend its live agent.
    ///
    /// Returns `None` when no agent has that id; nothing is held then.
    pub fn hold(&self, id: &str) -> Option<AgentHandle> {
        let mut agents = self.inner.write();
        let handle = agents.handles.get(id).cloned()?;
        agents.held.insert(handle.id().clone());
        handle.suspend();
        Some(handle)
    }

    /// Unpin `id` and resume whichever agent currently carries it.
    pub fn release(&self, id: &str) {
        let mut agents = self.inner.write();
        agents.held.remove(id);
        if let Some(handle) = agents.handles.get(id) {
            handle.resume();
        }
    }

    pub fn is_held(&self, id: &str) -> bool {
        self.inner.read().held.contains(id)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Agents> {
        self.inner.write()
    }
}

impl std::fmt::Debug for AgentDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentDirectory").field("ids", &self.ids()).finish()
    }
}
