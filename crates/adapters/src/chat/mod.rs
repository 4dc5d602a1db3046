// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chat service adapters
//!
//! The conversation log is owned by the caller and passed explicitly on each
//! `continue_conversation` call; providers keep no per-session state.

mod mock;

pub use mock::MockChat;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ChatCall, FakeChat};

use async_trait::async_trait;
use herd_core::{ConversationTurn, ResourceId};
use thiserror::Error;

/// Errors from chat operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unknown resource: {0}")]
    UnknownIdentifier(ResourceId),
}

/// Remote chat service that speaks on behalf of a resource
#[async_trait]
pub trait ChatProvider: Clone + Send + Sync + 'static {
    /// Opening line for a fresh conversation; no user text involved.
    async fn greet(&self, id: &ResourceId) -> Result<String, ChatError>;

    /// Reply to the conversation so far. `turns` is the full ordered log,
    /// ending with the user's latest message.
    async fn continue_conversation(
        &self,
        id: &ResourceId,
        turns: &[ConversationTurn],
    ) -> Result<String, ChatError>;
}
