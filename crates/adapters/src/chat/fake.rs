// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted chat provider for tests

use super::{ChatError, ChatProvider};
use async_trait::async_trait;
use herd_core::{ConversationTurn, ResourceId};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Recorded chat call
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCall {
    Greet { id: ResourceId },
    Continue { id: ResourceId, turns: Vec<ConversationTurn> },
}

#[derive(Default)]
struct FakeChatState {
    replies: VecDeque<Result<String, ChatError>>,
    calls: Vec<ChatCall>,
}

/// Fake chat adapter for testing
///
/// Replies are popped from a queue; an empty queue answers with a transport
/// failure. When held, every call waits for an explicit `release` before
/// answering, which lets tests interleave session operations with an
/// in-flight round-trip.
#[derive(Clone)]
pub struct FakeChat {
    inner: Arc<Mutex<FakeChatState>>,
    gate: Arc<Mutex<Option<Arc<Semaphore>>>>,
}

impl Default for FakeChat {
    fn default() -> Self {
        Self { inner: Arc::new(Mutex::new(FakeChatState::default())), gate: Arc::new(Mutex::new(None)) }
    }
}

impl FakeChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, text: impl Into<String>) {
        self.inner.lock().replies.push_back(Ok(text.into()));
    }

    pub fn push_failure(&self) {
        self.inner.lock().replies.push_back(Err(ChatError::Transport("scripted failure".to_string())));
    }

    /// Make subsequent calls wait for `release`.
    pub fn hold(&self) {
        *self.gate.lock() = Some(Arc::new(Semaphore::new(0)));
    }

    /// Let one held call through.
    pub fn release(&self) {
        if let Some(gate) = self.gate.lock().as_ref() {
            gate.add_permits(1);
        }
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ChatCall> {
        self.inner.lock().calls.clone()
    }

    async fn answer(&self, call: ChatCall) -> Result<String, ChatError> {
        self.inner.lock().calls.push(call);
        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
        self.inner
            .lock()
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::Transport("no scripted reply".to_string())))
    }
}

#[async_trait]
impl ChatProvider for FakeChat {
    async fn greet(&self, id: &ResourceId) -> Result<String, ChatError> {
        self.answer(ChatCall::Greet { id: id.clone() }).await
    }

    async fn continue_conversation(
        &self,
        id: &ResourceId,
        turns: &[ConversationTurn],
    ) -> Result<String, ChatError> {
        self.answer(ChatCall::Continue { id: id.clone(), turns: turns.to_vec() }).await
    }
}
