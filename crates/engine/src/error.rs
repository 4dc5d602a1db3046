// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine error types

use herd_core::ResourceId;
use thiserror::Error;

/// Rejected conversation operations. None of these change session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a conversation with {0} is already active")]
    AlreadyActive(ResourceId),
    #[error("no active conversation")]
    NoActiveSession,
    #[error("no agent with id {0}")]
    UnknownAgent(ResourceId),
    #[error("previous turn has not resolved yet")]
    TurnInFlight,
}

/// Invalid engine configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid { field, reason: reason.into() }
    }
}
