// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Load-level state machine with per-state hooks.
//!
//! Every transition runs the exit hooks of the state being left, switches
//! state, then runs the changed hooks of the state being entered. Transitions
//! take `&mut self`, so hooks for one machine never overlap.

use herd_core::LoadLevel;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Side effect fired on a transition. Receives the state it was registered for.
pub type StateHook = Arc<dyn Fn(LoadLevel) + Send + Sync>;

#[derive(Clone)]
struct NamedHook {
    name: String,
    hook: StateHook,
}

/// Registry of named hooks, keyed by state.
#[derive(Clone, Default)]
pub struct StateHooks {
    on_exit: HashMap<LoadLevel, Vec<NamedHook>>,
    on_changed: HashMap<LoadLevel, Vec<NamedHook>>,
}

impl StateHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook` whenever `state` is left.
    pub fn on_exit(
        mut self,
        state: LoadLevel,
        name: impl Into<String>,
        hook: impl Fn(LoadLevel) + Send + Sync + 'static,
    ) -> Self {
        self.on_exit
            .entry(state)
            .or_default()
            .push(NamedHook { name: name.into(), hook: Arc::new(hook) });
        self
    }

    /// Run `hook` whenever `state` is entered.
    pub fn on_changed(
        mut self,
        state: LoadLevel,
        name: impl Into<String>,
        hook: impl Fn(LoadLevel) + Send + Sync + 'static,
    ) -> Self {
        self.on_changed
            .entry(state)
            .or_default()
            .push(NamedHook { name: name.into(), hook: Arc::new(hook) });
        self
    }

    /// Run `hook` on entering any state.
    pub fn on_any_changed(
        mut self,
        name: impl Into<String>,
        hook: impl Fn(LoadLevel) + Send + Sync + 'static,
    ) -> Self {
        let name = name.into();
        let hook: StateHook = Arc::new(hook);
        for state in LoadLevel::ALL {
            self.on_changed
                .entry(state)
                .or_default()
                .push(NamedHook { name: name.clone(), hook: Arc::clone(&hook) });
        }
        self
    }

    /// Append every hook of `other` after this registry's own hooks.
    pub fn merge(mut self, other: StateHooks) -> Self {
        for (state, hooks) in other.on_exit {
            self.on_exit.entry(state).or_default().extend(hooks);
        }
        for (state, hooks) in other.on_changed {
            self.on_changed.entry(state).or_default().extend(hooks);
        }
        self
    }

    /// Names of the hooks registered for entering `state`, in firing order.
    pub fn changed_names(&self, state: LoadLevel) -> Vec<&str> {
        names(&self.on_changed, state)
    }

    /// Names of the hooks registered for leaving `state`, in firing order.
    pub fn exit_names(&self, state: LoadLevel) -> Vec<&str> {
        names(&self.on_exit, state)
    }

    fn fire_exit(&self, state: LoadLevel) {
        fire(&self.on_exit, state);
    }

    fn fire_changed(&self, state: LoadLevel) {
        fire(&self.on_changed, state);
    }
}

fn names(map: &HashMap<LoadLevel, Vec<NamedHook>>, state: LoadLevel) -> Vec<&str> {
    map.get(&state).map(|hooks| hooks.iter().map(|h| h.name.as_str()).collect()).unwrap_or_default()
}

fn fire(map: &HashMap<LoadLevel, Vec<NamedHook>>, state: LoadLevel) {
    for named in map.get(&state).into_iter().flatten() {
        (named.hook)(state);
    }
}

impl fmt::Debug for StateHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("StateHooks");
        for state in LoadLevel::ALL {
            dbg.field(&format!("exit_{}", state), &self.exit_names(state));
            dbg.field(&format!("changed_{}", state), &self.changed_names(state));
        }
        dbg.finish()
    }
}

/// Current load level of one agent plus its hooks.
#[derive(Debug)]
pub struct StateMachine {
    current: LoadLevel,
    hooks: StateHooks,
}

impl StateMachine {
    /// Enter `initial`, firing its changed hooks once (no exit hooks).
    pub fn start(initial: LoadLevel, hooks: StateHooks) -> Self {
        hooks.fire_changed(initial);
        Self { current: initial, hooks }
    }

    pub fn current(&self) -> LoadLevel {
        self.current
    }

    /// Transition to `next`. Always fires, even when `next` is the current
    /// state.
    pub fn change_state(&mut self, next: LoadLevel) {
        self.hooks.fire_exit(self.current);
        self.current = next;
        self.hooks.fire_changed(next);
    }
}

#[cfg(test)]
#[path = "state_machine_tests.rs"]
mod tests;
