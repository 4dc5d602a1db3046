// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted inventory for tests

use super::{InventoryError, InventoryProvider};
use async_trait::async_trait;
use herd_core::{ResourceId, ResourceRecord, ResourceState};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

#[derive(Default)]
struct FakeInventoryState {
    snapshot: Vec<ResourceRecord>,
    scripted: VecDeque<Result<Vec<ResourceRecord>, InventoryError>>,
    delay: Duration,
    list_calls: usize,
    in_flight: usize,
    max_in_flight: usize,
}

/// Fake inventory for testing
///
/// `list` pops the next scripted response if one is queued, otherwise it
/// returns the current snapshot. Concurrency of `list` calls is recorded so
/// tests can assert polls never overlap.
#[derive(Clone, Default)]
pub struct FakeInventory {
    inner: Arc<Mutex<FakeInventoryState>>,
}

impl FakeInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot returned when nothing is scripted.
    pub fn set_snapshot(&self, records: Vec<ResourceRecord>) {
        self.inner.lock().snapshot = records;
    }

    /// Queue a one-shot response for the next `list` call.
    pub fn push_response(&self, response: Result<Vec<ResourceRecord>, InventoryError>) {
        self.inner.lock().scripted.push_back(response);
    }

    /// Queue a one-shot transport failure.
    pub fn fail_next(&self) {
        self.push_response(Err(InventoryError::Transport("scripted failure".to_string())));
    }

    /// Delay every call by `delay` before answering.
    pub fn set_delay(&self, delay: Duration) {
        self.inner.lock().delay = delay;
    }

    pub fn list_calls(&self) -> usize {
        self.inner.lock().list_calls
    }

    pub fn max_in_flight(&self) -> usize {
        self.inner.lock().max_in_flight
    }
}

/// Decrements the in-flight counter even when the call is abandoned mid-await.
struct InFlight(Arc<Mutex<FakeInventoryState>>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.lock().in_flight -= 1;
    }
}

#[async_trait]
impl InventoryProvider for FakeInventory {
    async fn list(&self) -> Result<Vec<ResourceRecord>, InventoryError> {
        let delay = {
            let mut state = self.inner.lock();
            state.list_calls += 1;
            state.in_flight += 1;
            state.max_in_flight = state.max_in_flight.max(state.in_flight);
            state.delay
        };
        let _guard = InFlight(Arc::clone(&self.inner));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let mut state = self.inner.lock();
        match state.scripted.pop_front() {
            Some(response) => response,
            None => Ok(state.snapshot.clone()),
        }
    }

    async fn get_state(&self, id: &ResourceId) -> Result<ResourceState, InventoryError> {
        let state = self.inner.lock();
        state
            .snapshot
            .iter()
            .find(|r| &r.id == id)
            .map(|r| ResourceState { id: r.id.clone(), load_level: r.load_level })
            .ok_or_else(|| InventoryError::UnknownIdentifier(id.clone()))
    }
}
