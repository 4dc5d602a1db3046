// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single active conversation with one agent.
//!
//! At most one session exists at a time. Its agent id stays held in the
//! directory for the whole session, so an agent recreated under that id by
//! a later reconciliation pass starts suspended too. Turns are strictly ordered: a new user message is rejected
//! while the previous round-trip is pending. The session lock is never held
//! across a chat call. Every session start and end bumps an epoch, and a
//! reply whose epoch no longer matches is dropped.

use crate::directory::AgentDirectory;
use crate::error::SessionError;
use herd_adapters::{ChatError, ChatProvider};
use herd_core::{ConversationTurn, ResourceId};
use parking_lot::Mutex;

struct ActiveSession {
    agent: ResourceId,
    turns: Vec<ConversationTurn>,
    pending: bool,
}

#[derive(Default)]
struct SessionState {
    active: Option<ActiveSession>,
    epoch: u64,
}

pub struct ConversationSession<C: ChatProvider> {
    chat: C,
    directory: AgentDirectory,
    state: Mutex<SessionState>,
}

impl<C: ChatProvider> ConversationSession<C> {
    pub fn new(chat: C, directory: AgentDirectory) -> Self {
        Self { chat, directory, state: Mutex::new(SessionState::default()) }
    }

    /// Open a session with `id`, suspend it and request a greeting.
    ///
    /// `Ok(None)` means the session is open but no greeting arrived (the
    /// call failed or the session ended first). Nothing is appended then.
    pub async fn select(&self, id: &ResourceId) -> Result<Option<String>, SessionError> {
        let epoch = {
            let mut state = self.state.lock();
            if let Some(active) = &state.active {
                tracing::debug!(agent_id = %id, active = %active.agent, "select rejected, session active");
                return Err(SessionError::AlreadyActive(active.agent.clone()));
            }
            let agent = self.directory.hold(id).ok_or_else(|| SessionError::UnknownAgent(id.clone()))?;
            state.epoch += 1;
            state.active = Some(ActiveSession { agent: agent.id().clone(), turns: Vec::new(), pending: true });
            state.epoch
        };
        tracing::info!(agent_id = %id, "session started");

        let reply = self.chat.greet(id).await;
        Ok(self.complete(epoch, id, reply))
    }

    /// Append a user turn and request the assistant's reply.
    ///
    /// The user turn stays in the log even if the call fails.
    pub async fn send_user_message(&self, text: impl Into<String>) -> Result<Option<String>, SessionError> {
        let (epoch, id, turns) = {
            let mut guard = self.state.lock();
            let state = &mut *guard;
            let active = state.active.as_mut().ok_or(SessionError::NoActiveSession)?;
            if active.pending {
                return Err(SessionError::TurnInFlight);
            }
            active.turns.push(ConversationTurn::user(text));
            active.pending = true;
            (state.epoch, active.agent.clone(), active.turns.clone())
        };

        let reply = self.chat.continue_conversation(&id, &turns).await;
        Ok(self.complete(epoch, &id, reply))
    }

    /// Close the session and resume the live agent with its id, if any.
    /// Returns false if no session was open.
    ///
    /// An in-flight chat call is left to finish; its reply is dropped.
    pub fn end_session(&self) -> bool {
        let ended = {
            let mut state = self.state.lock();
            let ended = state.active.take();
            if ended.is_some() {
                state.epoch += 1;
            }
            ended
        };
        match ended {
            Some(session) => {
                self.directory.release(&session.agent);
                tracing::info!(agent_id = %session.agent, turns = session.turns.len(), "session ended");
                true
            }
            None => false,
        }
    }

    pub fn active_agent(&self) -> Option<ResourceId> {
        self.state.lock().active.as_ref().map(|a| a.agent.clone())
    }

    pub fn is_active(&self) -> bool {
        self.state.lock().active.is_some()
    }

    /// True while a greeting or reply is outstanding.
    pub fn is_pending(&self) -> bool {
        self.state.lock().active.as_ref().is_some_and(|a| a.pending)
    }

    /// Copy of the ordered turn log; empty when no session is active.
    pub fn turns(&self) -> Vec<ConversationTurn> {
        self.state.lock().active.as_ref().map(|a| a.turns.clone()).unwrap_or_default()
    }

    fn complete(&self, epoch: u64, id: &ResourceId, reply: Result<String, ChatError>) -> Option<String> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let active = match state.active.as_mut() {
            Some(active) if state.epoch == epoch => active,
            _ => {
                tracing::debug!(agent_id = %id, "dropping reply for a finished session");
                return None;
            }
        };
        active.pending = false;
        match reply {
            Ok(text) => {
                active.turns.push(ConversationTurn::assistant(text.clone()));
                Some(text)
            }
            Err(e) => {
                tracing::warn!(agent_id = %id, error = %e, "chat request failed");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
