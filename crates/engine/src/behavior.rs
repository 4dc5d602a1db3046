// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Autonomous wander task for one agent.
//!
//! Idle wait, pick a destination, move there, face the default direction,
//! repeat. The suspended flag is checked at every phase boundary and every
//! tick; while set the agent halts, faces the default direction and stays
//! dormant until resumed. The motion lock is only taken inside a tick, never
//! across an await.

use crate::config::BehaviorConfig;
use crate::locomotion::{Motion, Phase, Step};
use herd_adapters::BoundsProvider;
use herd_core::{LoadLevel, ResourceId};
use parking_lot::Mutex;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// How a phase ended.
enum Flow {
    Done,
    Suspended,
    /// The agent's control channel is gone; stop for good.
    Closed,
}

pub(crate) struct Behavior {
    pub(crate) id: ResourceId,
    pub(crate) config: Arc<BehaviorConfig>,
    pub(crate) bounds: Arc<dyn BoundsProvider>,
    pub(crate) motion: Arc<Mutex<Motion>>,
    pub(crate) load: watch::Receiver<LoadLevel>,
    pub(crate) suspended: watch::Receiver<bool>,
}

impl Behavior {
    /// Drive the agent until `cancel` fires.
    pub(crate) async fn run(mut self, cancel: CancellationToken) {
        tracing::debug!(agent_id = %self.id, "behavior started");
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = self.wander() => {}
        }
        tracing::debug!(agent_id = %self.id, "behavior stopped");
    }

    async fn wander(&mut self) {
        loop {
            if self.suspended.has_changed().is_err() {
                return;
            }
            if self.is_suspended() {
                match self.dormant().await {
                    Flow::Closed => return,
                    Flow::Done | Flow::Suspended => continue,
                }
            }

            self.motion.lock().phase = Phase::Idle;
            match self.idle(draw_wait(&self.config)).await {
                Flow::Done => {}
                Flow::Suspended => continue,
                Flow::Closed => return,
            }

            let destination = self.bounds.random_point();
            tracing::trace!(agent_id = %self.id, x = destination.x, z = destination.z, "moving");
            self.motion.lock().begin_move(destination);
            if !matches!(self.travel().await, Flow::Done) {
                continue;
            }

            self.motion.lock().phase = Phase::RotatingToDefault;
            self.face_default(true).await;
        }
    }

    fn is_suspended(&self) -> bool {
        *self.suspended.borrow()
    }

    /// Halt, face the default direction, then wait for resume.
    async fn dormant(&mut self) -> Flow {
        {
            let mut motion = self.motion.lock();
            motion.halt();
            motion.phase = Phase::Suspended;
        }
        self.face_default(false).await;
        tracing::debug!(agent_id = %self.id, "dormant");
        if self.suspended.wait_for(|s| !*s).await.is_err() {
            return Flow::Closed;
        }
        tracing::debug!(agent_id = %self.id, "resumed");
        Flow::Done
    }

    /// Sleep for `wait` unless suspended first.
    async fn idle(&mut self, wait: Duration) -> Flow {
        tokio::select! {
            biased;
            closed = until_suspended(&mut self.suspended) => {
                if closed { Flow::Closed } else { Flow::Suspended }
            }
            _ = tokio::time::sleep(wait) => Flow::Done,
        }
    }

    async fn travel(&mut self) -> Flow {
        let mut ticker = self.ticker();
        let mut last = Instant::now();
        loop {
            let now = ticker.tick().await;
            if self.is_suspended() {
                return Flow::Suspended;
            }
            let dt = now.saturating_duration_since(last).as_secs_f32();
            last = now;
            let factor = self.load.borrow().speed_factor();
            if self.motion.lock().step_towards(&self.config, factor, dt) == Step::Arrived {
                return Flow::Done;
            }
        }
    }

    /// Rotate toward the configured default facing.
    async fn face_default(&mut self, stop_on_suspend: bool) -> Flow {
        let target = self.config.default_yaw();
        let mut ticker = self.ticker();
        let mut last = Instant::now();
        loop {
            let now = ticker.tick().await;
            if stop_on_suspend && self.is_suspended() {
                return Flow::Suspended;
            }
            let dt = now.saturating_duration_since(last).as_secs_f32();
            last = now;
            if self.motion.lock().step_rotation(target, &self.config, dt) {
                return Flow::Done;
            }
        }
    }

    fn ticker(&self) -> Interval {
        let mut ticker = tokio::time::interval(self.config.tick());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    }
}

/// Resolves once the flag is set. Returns true if the sender is gone instead.
async fn until_suspended(rx: &mut watch::Receiver<bool>) -> bool {
    rx.wait_for(|s| *s).await.is_err()
}

/// Uniform idle wait in `[min_wait, max_wait]`.
pub(crate) fn draw_wait(config: &BehaviorConfig) -> Duration {
    if config.max_wait <= config.min_wait {
        return config.min_wait();
    }
    let secs = rand::thread_rng().gen_range(config.min_wait..=config.max_wait);
    Duration::try_from_secs_f64(secs).unwrap_or_else(|_| config.min_wait())
}

#[cfg(test)]
#[path = "behavior_tests.rs"]
mod tests;
