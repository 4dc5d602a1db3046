// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! herd-engine: reconciliation, agent behavior and conversation sessions

pub mod agent;
mod behavior;
pub mod config;
pub mod directory;
pub mod error;
pub mod factory;
pub mod locomotion;
pub mod reconciler;
pub mod session;
pub mod state_machine;
pub mod visuals;

pub use agent::{Agent, AgentDeps, AgentHandle, AgentSnapshot};
pub use config::{BehaviorConfig, ReconcilerConfig};
pub use directory::AgentDirectory;
pub use error::{ConfigError, SessionError};
pub use factory::{AgentFactory, AgentTemplate};
pub use locomotion::{Motion, Phase};
pub use reconciler::{PassSummary, Reconciler, ReconcilerCommand, TickOutcome};
pub use session::ConversationSession;
pub use state_machine::{StateHook, StateHooks, StateMachine};
pub use visuals::{AnimationLevels, Visuals};
