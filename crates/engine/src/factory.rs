// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent templates keyed by resource type.
//!
//! Only records whose type has a registered template are materialized as
//! agents. A template contributes the default visual hooks plus any extra
//! hooks the embedder registers.

use crate::state_machine::StateHooks;
use crate::visuals::{AnimationLevels, SharedVisuals};
use herd_core::{LoadLevel, ResourceId, ResourceType};
use std::collections::HashMap;

/// How agents of one resource type are built.
#[derive(Debug, Clone)]
pub struct AgentTemplate {
    pub resource_type: ResourceType,
    pub animation_levels: AnimationLevels,
    extra_hooks: StateHooks,
}

impl AgentTemplate {
    pub fn new(resource_type: ResourceType) -> Self {
        Self {
            resource_type,
            animation_levels: AnimationLevels::default(),
            extra_hooks: StateHooks::new(),
        }
    }

    pub fn with_animation_levels(mut self, levels: AnimationLevels) -> Self {
        self.animation_levels = levels;
        self
    }

    /// Append hooks that run after the built-in visual hooks.
    pub fn with_hooks(mut self, hooks: StateHooks) -> Self {
        self.extra_hooks = self.extra_hooks.merge(hooks);
        self
    }

    /// Hooks for one agent, writing into that agent's `visuals`.
    pub fn hooks(&self, id: &ResourceId, visuals: &SharedVisuals) -> StateHooks {
        let mut hooks = StateHooks::new();
        for level in LoadLevel::ALL {
            let target = SharedVisuals::clone(visuals);
            let animation_level = self.animation_levels.for_level(level);
            hooks = hooks.on_changed(level, "animation", move |_| {
                target.lock().animation_level = animation_level;
            });
        }

        let enter = SharedVisuals::clone(visuals);
        let leave = SharedVisuals::clone(visuals);
        let agent_id = id.clone();
        hooks
            .on_changed(LoadLevel::High, "tired", move |_| enter.lock().tired = true)
            .on_exit(LoadLevel::High, "tired", move |_| leave.lock().tired = false)
            .on_any_changed("trace", move |level| {
                tracing::debug!(agent_id = %agent_id, %level, "load level changed");
            })
            .merge(self.extra_hooks.clone())
    }
}

/// Registry of agent templates.
#[derive(Debug, Clone, Default)]
pub struct AgentFactory {
    templates: HashMap<ResourceType, AgentTemplate>,
}

impl AgentFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Templates for EC2, RDB and ALB with default animation levels.
    pub fn with_defaults() -> Self {
        let mut factory = Self::new();
        for resource_type in [ResourceType::Ec2, ResourceType::Rdb, ResourceType::Alb] {
            factory.register(AgentTemplate::new(resource_type));
        }
        factory
    }

    /// Register or replace the template for its resource type.
    pub fn register(&mut self, template: AgentTemplate) {
        self.templates.insert(template.resource_type.clone(), template);
    }

    pub fn template(&self, resource_type: &ResourceType) -> Option<&AgentTemplate> {
        self.templates.get(resource_type)
    }

    pub fn supports(&self, resource_type: &ResourceType) -> bool {
        self.templates.contains_key(resource_type)
    }
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod tests;
