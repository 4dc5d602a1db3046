// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inventory reconciliation: keeps the agent set in step with the latest
//! successful snapshot.
//!
//! Polls are serialized. A tick awaits its poll (bounded by the poll timeout)
//! before the next tick can start, and a timed-out poll is dropped together
//! with its late result. A failed or timed-out poll leaves the agent set
//! untouched.

use crate::agent::{Agent, AgentDeps};
use crate::config::ReconcilerConfig;
use crate::directory::AgentDirectory;
use crate::factory::AgentFactory;
use herd_adapters::{InventoryError, InventoryProvider};
use herd_core::{LoadLevel, ResourceId, ResourceRecord};
use std::collections::{HashMap, HashSet};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Out-of-band requests to a running reconciler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcilerCommand {
    /// Re-read one resource's load level.
    Refresh(ResourceId),
    /// Poll now instead of waiting for the next tick.
    PollNow,
}

/// What one reconciliation pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub created: Vec<ResourceId>,
    /// Existing agents whose load level changed.
    pub updated: Vec<ResourceId>,
    pub removed: Vec<ResourceId>,
    /// Records without a registered agent template.
    pub skipped: Vec<ResourceId>,
}

impl PassSummary {
    pub fn is_noop(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// Result of one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Applied(PassSummary),
    Failed(InventoryError),
    TimedOut,
}

pub struct Reconciler<I: InventoryProvider> {
    inventory: I,
    factory: AgentFactory,
    deps: AgentDeps,
    config: ReconcilerConfig,
    agents: HashMap<ResourceId, Agent>,
    directory: AgentDirectory,
}

impl<I: InventoryProvider> Reconciler<I> {
    pub fn new(inventory: I, factory: AgentFactory, deps: AgentDeps, config: ReconcilerConfig) -> Self {
        Self { inventory, factory, deps, config, agents: HashMap::new(), directory: AgentDirectory::new() }
    }

    /// Shared read-only view of the agents this reconciler owns.
    pub fn directory(&self) -> AgentDirectory {
        self.directory.clone()
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.get(id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Poll once and apply the snapshot if the poll succeeds in time.
    pub async fn tick(&mut self) -> TickOutcome {
        match tokio::time::timeout(self.config.poll_timeout(), self.inventory.list()).await {
            Ok(Ok(records)) => TickOutcome::Applied(self.apply(records)),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "inventory poll failed, keeping current agents");
                TickOutcome::Failed(e)
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.config.poll_timeout().as_millis() as u64,
                    "inventory poll timed out, keeping current agents"
                );
                TickOutcome::TimedOut
            }
        }
    }

    /// Run one reconciliation pass against `records`.
    ///
    /// Must be called within a tokio runtime (new agents spawn their
    /// behavior task).
    pub fn apply(&mut self, records: Vec<ResourceRecord>) -> PassSummary {
        let mut summary = PassSummary::default();
        let mut seen: HashSet<ResourceId> = HashSet::with_capacity(records.len());
        let mut directory = self.directory.write();

        for record in &records {
            let Some(template) = self.factory.template(&record.resource_type) else {
                tracing::warn!(
                    agent_id = %record.id,
                    resource_type = %record.resource_type,
                    "no agent template for resource type, skipping"
                );
                summary.skipped.push(record.id.clone());
                continue;
            };
            if !seen.insert(record.id.clone()) {
                tracing::warn!(agent_id = %record.id, "duplicate id in snapshot, ignoring");
                continue;
            }

            match self.agents.get(&record.id) {
                Some(agent) if agent.resource_type() == &record.resource_type => {
                    if agent.update(record) {
                        summary.updated.push(record.id.clone());
                    }
                }
                existing => {
                    if let Some(agent) = existing {
                        tracing::info!(
                            agent_id = %record.id,
                            from = %agent.resource_type(),
                            to = %record.resource_type,
                            "resource type changed, recreating agent"
                        );
                        summary.removed.push(record.id.clone());
                    }
                    let held = directory.held.contains(&record.id);
                    let agent = Agent::launch(record, template, &self.deps, held);
                    directory.handles.insert(record.id.clone(), agent.handle());
                    if let Some(old) = self.agents.insert(record.id.clone(), agent) {
                        old.destroy();
                    }
                    summary.created.push(record.id.clone());
                }
            }
        }

        let gone: Vec<ResourceId> = self.agents.keys().filter(|id| !seen.contains(*id)).cloned().collect();
        for id in gone {
            directory.handles.remove(&id);
            if let Some(agent) = self.agents.remove(&id) {
                agent.destroy();
            }
            summary.removed.push(id);
        }
        drop(directory);

        if !summary.is_noop() {
            tracing::info!(
                created = summary.created.len(),
                updated = summary.updated.len(),
                removed = summary.removed.len(),
                skipped = summary.skipped.len(),
                total = self.agents.len(),
                "reconciled"
            );
        }
        summary
    }

    /// Fetch one resource's load level and apply it.
    ///
    /// Returns the new level if it changed. Unknown ids (locally or remotely)
    /// are logged and dropped.
    pub async fn refresh_agent(&mut self, id: &ResourceId) -> Result<Option<LoadLevel>, InventoryError> {
        if !self.agents.contains_key(id) {
            tracing::warn!(agent_id = %id, "refresh requested for unknown agent");
            return Err(InventoryError::UnknownIdentifier(id.clone()));
        }
        let state = match tokio::time::timeout(self.config.poll_timeout(), self.inventory.get_state(id)).await {
            Ok(Ok(state)) => state,
            Ok(Err(e)) => {
                tracing::warn!(agent_id = %id, error = %e, "refresh failed");
                return Err(e);
            }
            Err(_) => {
                tracing::warn!(agent_id = %id, "refresh timed out");
                return Err(InventoryError::Transport("state request timed out".to_string()));
            }
        };
        // The agent may have been removed while the request was in flight.
        let Some(agent) = self.agents.get(id) else {
            return Ok(None);
        };
        Ok(agent.set_load_level(state.load_level).then_some(state.load_level))
    }

    /// Poll on the configured period and serve commands until `cancel`
    /// fires, then destroy every agent.
    pub async fn run(mut self, mut commands: mpsc::Receiver<ReconcilerCommand>, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(self.config.poll_period());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut commands_open = true;
        tracing::info!(period_ms = self.config.poll_period().as_millis() as u64, "reconciler started");

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                command = commands.recv(), if commands_open => match command {
                    Some(ReconcilerCommand::Refresh(id)) => {
                        let _ = self.refresh_agent(&id).await;
                    }
                    Some(ReconcilerCommand::PollNow) => {
                        self.tick().await;
                    }
                    None => commands_open = false,
                },
                _ = ticker.tick() => {
                    self.tick().await;
                }
            }
        }

        self.shutdown();
    }

    /// Destroy every agent and empty the directory.
    pub fn shutdown(&mut self) {
        self.directory.write().handles.clear();
        let count = self.agents.len();
        for (_, agent) in self.agents.drain() {
            agent.destroy();
        }
        tracing::info!(agents = count, "reconciler stopped");
    }
}

#[cfg(test)]
#[path = "reconciler_tests.rs"]
mod tests;
