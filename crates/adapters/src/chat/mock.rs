// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canned chat replies driven by the mock inventory's current state.

use super::{ChatError, ChatProvider};
use crate::inventory::MockInventory;
use async_trait::async_trait;
use herd_core::{ConversationTurn, LoadLevel, ResourceId, ResourceRecord, ResourceType, Role};
use std::time::Duration;

/// Chat provider that answers from the resource's type and mock load level.
#[derive(Clone)]
pub struct MockChat {
    inventory: MockInventory,
    latency: Duration,
}

impl MockChat {
    pub fn new(inventory: MockInventory, latency: Duration) -> Self {
        Self { inventory, latency }
    }

    fn lookup(&self, id: &ResourceId) -> Result<ResourceRecord, ChatError> {
        self.inventory.record(id).ok_or_else(|| {
            tracing::warn!(resource = %id, "mock chat for unknown resource");
            ChatError::UnknownIdentifier(id.clone())
        })
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ChatProvider for MockChat {
    async fn greet(&self, id: &ResourceId) -> Result<String, ChatError> {
        self.simulate_latency().await;
        let record = self.lookup(id)?;
        Ok(status_line(&record.resource_type, record.load_level))
    }

    async fn continue_conversation(
        &self,
        id: &ResourceId,
        turns: &[ConversationTurn],
    ) -> Result<String, ChatError> {
        self.simulate_latency().await;
        let record = self.lookup(id)?;
        let latest = turns.iter().rev().find(|t| t.role == Role::User).map(|t| t.text.as_str());
        Ok(reply(&record.resource_type, record.load_level, latest.unwrap_or_default()))
    }
}

/// How a resource describes its own load.
pub(crate) fn status_line(resource_type: &ResourceType, level: LoadLevel) -> String {
    let line = match (resource_type, level) {
        (ResourceType::Ec2, LoadLevel::Low) => "EC2 load is low. Plenty of headroom!",
        (ResourceType::Ec2, LoadLevel::Middle) => "EC2 load is normal. Running without issues.",
        (ResourceType::Ec2, LoadLevel::High) => {
            "EC2 load is high! Consider scaling out."
        }
        (ResourceType::Rdb, LoadLevel::Low) => "Database load is low. Queries are running fine.",
        (ResourceType::Rdb, LoadLevel::Middle) => "Database load is normal. Operating as usual.",
        (ResourceType::Rdb, LoadLevel::High) => {
            "Database load is high! Consider optimizing queries or adding a replica."
        }
        (ResourceType::Alb, LoadLevel::Low) => "Traffic through the load balancer is light.",
        (ResourceType::Alb, LoadLevel::Middle) => "Load balancer traffic is normal.",
        (ResourceType::Alb, LoadLevel::High) => {
            "Load balancer traffic is heavy! Consider scaling out the backends."
        }
        (ResourceType::Other(_), _) => "I can't tell how I'm doing right now.",
    };
    line.to_string()
}

fn reply(resource_type: &ResourceType, level: LoadLevel, message: &str) -> String {
    let message = message.to_lowercase();
    let asks = |words: &[&str]| words.iter().any(|w| message.contains(w));

    if asks(&["status", "how are you", "load", "doing"]) {
        return status_line(resource_type, level);
    }
    let specific = match resource_type {
        ResourceType::Ec2 if asks(&["scale", "expand"]) => Some(
            "To scale out, configure an Auto Scaling Group or add instances manually.",
        ),
        ResourceType::Rdb if asks(&["backup"]) => Some(
            "Automated backups run daily. You can also take a manual snapshot at any time.",
        ),
        ResourceType::Alb if asks(&["target", "routing"]) => Some(
            "Target groups and routing rules are configured and every target is healthy.",
        ),
        _ => None,
    };
    if let Some(text) = specific {
        return text.to_string();
    }
    match resource_type {
        ResourceType::Ec2 => "Hi! I'm an EC2 instance. Anything I can help with?",
        ResourceType::Rdb => "Hi! I'm a database. Anything I can help with?",
        ResourceType::Alb => "Hi! I'm a load balancer. Anything I can help with?",
        ResourceType::Other(_) => "Hi!",
    }
    .to_string()
}

#[cfg(test)]
#[path = "mock_tests.rs"]
mod tests;
