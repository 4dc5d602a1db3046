// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent: the local, autonomous stand-in for one resource.
//!
//! The reconciler owns each [`Agent`] and is the only writer of its load
//! level and cost. Everyone else holds an [`AgentHandle`], which can read a
//! snapshot and toggle suspension but cannot change the resource data.

use crate::behavior::Behavior;
use crate::config::BehaviorConfig;
use crate::factory::AgentTemplate;
use crate::locomotion::{Motion, Phase};
use crate::state_machine::StateMachine;
use crate::visuals::{SharedVisuals, Visuals};
use herd_adapters::BoundsProvider;
use herd_core::{
    nameplate, CostDisplay, CostView, InstanceToken, LoadLevel, ResourceId, ResourceRecord,
    ResourceType, Vec2,
};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Collaborators shared by every agent.
#[derive(Clone)]
pub struct AgentDeps {
    pub behavior: Arc<BehaviorConfig>,
    pub bounds: Arc<dyn BoundsProvider>,
    pub cost_display: Arc<CostDisplay>,
}

impl AgentDeps {
    pub fn new(behavior: BehaviorConfig, bounds: Arc<dyn BoundsProvider>, cost_display: CostDisplay) -> Self {
        Self { behavior: Arc::new(behavior), bounds, cost_display: Arc::new(cost_display) }
    }
}

#[derive(Debug, Clone)]
struct Status {
    display_name: String,
    cost: f64,
}

struct Shared {
    id: ResourceId,
    instance: InstanceToken,
    resource_type: ResourceType,
    status: Mutex<Status>,
    machine: Mutex<StateMachine>,
    visuals: SharedVisuals,
    motion: Arc<Mutex<Motion>>,
    suspended: watch::Sender<bool>,
    cancel: CancellationToken,
    cost_display: Arc<CostDisplay>,
}

/// Point-in-time view of an agent, for display and inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentSnapshot {
    pub id: ResourceId,
    pub instance: InstanceToken,
    pub resource_type: ResourceType,
    pub display_name: String,
    pub load_level: LoadLevel,
    pub cost: f64,
    pub cost_view: CostView,
    pub nameplate: String,
    pub suspended: bool,
    pub phase: Phase,
    pub position: Vec2,
    pub heading: f32,
    pub destination: Option<Vec2>,
    pub is_moving: bool,
    pub speed: f32,
    pub visuals: Visuals,
}

/// Shared control handle to a live agent.
#[derive(Clone)]
pub struct AgentHandle {
    shared: Arc<Shared>,
}

impl AgentHandle {
    pub fn id(&self) -> &ResourceId {
        &self.shared.id
    }

    pub fn instance(&self) -> InstanceToken {
        self.shared.instance
    }

    pub fn resource_type(&self) -> &ResourceType {
        &self.shared.resource_type
    }

    pub fn load_level(&self) -> LoadLevel {
        self.shared.machine.lock().current()
    }

    /// Stop autonomous movement immediately. The behavior task then turns
    /// the agent to its default facing and goes dormant.
    pub fn suspend(&self) {
        self.shared.suspended.send_replace(true);
        self.shared.motion.lock().halt();
        tracing::debug!(agent_id = %self.shared.id, "suspended");
    }

    /// Restart the wander cycle from a fresh idle wait.
    pub fn resume(&self) {
        self.shared.suspended.send_replace(false);
        tracing::debug!(agent_id = %self.shared.id, "resume requested");
    }

    pub fn is_suspended(&self) -> bool {
        *self.shared.suspended.borrow()
    }

    /// False once the reconciler has destroyed the agent.
    pub fn is_alive(&self) -> bool {
        !self.shared.cancel.is_cancelled()
    }

    pub fn motion(&self) -> Motion {
        *self.shared.motion.lock()
    }

    pub fn visuals(&self) -> Visuals {
        *self.shared.visuals.lock()
    }

    pub fn snapshot(&self) -> AgentSnapshot {
        let status = self.shared.status.lock().clone();
        let load_level = self.load_level();
        let motion = self.motion();
        AgentSnapshot {
            id: self.shared.id.clone(),
            instance: self.shared.instance,
            resource_type: self.shared.resource_type.clone(),
            nameplate: nameplate(&status.display_name, status.cost),
            cost_view: self.shared.cost_display.view(status.cost),
            display_name: status.display_name,
            load_level,
            cost: status.cost,
            suspended: self.is_suspended(),
            phase: motion.phase,
            position: motion.position,
            heading: motion.heading,
            destination: motion.destination,
            is_moving: motion.is_moving,
            speed: motion.speed,
            visuals: self.visuals(),
        }
    }
}

impl std::fmt::Debug for AgentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentHandle")
            .field("id", &self.shared.id)
            .field("instance", &self.shared.instance)
            .finish()
    }
}

/// An agent owned by the reconciler. Dropping it cancels its behavior task.
pub struct Agent {
    handle: AgentHandle,
    load_tx: watch::Sender<LoadLevel>,
    task: JoinHandle<()>,
}

impl Agent {
    /// Create an agent for `record` and start its behavior task.
    ///
    /// Must be called within a tokio runtime.
    pub fn spawn(record: &ResourceRecord, template: &AgentTemplate, deps: &AgentDeps) -> Self {
        Self::launch(record, template, deps, false)
    }

    /// Like [`Agent::spawn`], but the behavior task starts dormant when
    /// `suspended` is set.
    pub(crate) fn launch(
        record: &ResourceRecord,
        template: &AgentTemplate,
        deps: &AgentDeps,
        suspended: bool,
    ) -> Self {
        let visuals: SharedVisuals = Arc::new(Mutex::new(Visuals::default()));
        let machine = StateMachine::start(record.load_level, template.hooks(&record.id, &visuals));
        let motion = Arc::new(Mutex::new(Motion::new(
            deps.bounds.random_point(),
            deps.behavior.default_yaw(),
        )));
        let (load_tx, load_rx) = watch::channel(record.load_level);
        let (suspended_tx, suspended_rx) = watch::channel(suspended);
        let cancel = CancellationToken::new();

        let shared = Arc::new(Shared {
            id: record.id.clone(),
            instance: InstanceToken::mint(),
            resource_type: record.resource_type.clone(),
            status: Mutex::new(Status { display_name: record.display_name.clone(), cost: record.cost }),
            machine: Mutex::new(machine),
            visuals,
            motion: Arc::clone(&motion),
            suspended: suspended_tx,
            cancel: cancel.clone(),
            cost_display: Arc::clone(&deps.cost_display),
        });

        let behavior = Behavior {
            id: record.id.clone(),
            config: Arc::clone(&deps.behavior),
            bounds: Arc::clone(&deps.bounds),
            motion,
            load: load_rx,
            suspended: suspended_rx,
        };
        let task = tokio::spawn(behavior.run(cancel));

        tracing::info!(
            agent_id = %record.id,
            instance = %shared.instance,
            resource_type = %record.resource_type,
            load_level = %record.load_level,
            suspended,
            "agent created"
        );
        Self { handle: AgentHandle { shared }, load_tx, task }
    }

    pub fn handle(&self) -> AgentHandle {
        self.handle.clone()
    }

    pub fn id(&self) -> &ResourceId {
        self.handle.id()
    }

    pub fn instance(&self) -> InstanceToken {
        self.handle.instance()
    }

    pub fn resource_type(&self) -> &ResourceType {
        self.handle.resource_type()
    }

    /// Apply a fresh record for the same id. Returns true when the load
    /// level changed and the state machine transitioned.
    pub fn update(&self, record: &ResourceRecord) -> bool {
        {
            let mut status = self.handle.shared.status.lock();
            status.display_name.clone_from(&record.display_name);
            status.cost = record.cost;
        }
        self.set_load_level(record.load_level)
    }

    /// Transition the state machine iff `level` differs from the current one.
    pub fn set_load_level(&self, level: LoadLevel) -> bool {
        {
            let mut machine = self.handle.shared.machine.lock();
            if machine.current() == level {
                return false;
            }
            machine.change_state(level);
        }
        self.load_tx.send_replace(level);
        tracing::info!(agent_id = %self.handle.id(), load_level = %level, "load level updated");
        true
    }

    /// Cancel the behavior task. Outstanding handles report `is_alive() == false`.
    pub fn destroy(self) {
        tracing::info!(agent_id = %self.handle.id(), instance = %self.handle.instance(), "agent destroyed");
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for Agent {
    fn drop(&mut self) {
        self.handle.shared.cancel.cancel();
    }
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
