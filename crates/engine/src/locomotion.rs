// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Steppable kinematics for one agent.
//!
//! Pure and synchronous: the behavior task owns the clock and calls these
//! steps once per tick with the elapsed time.

use crate::config::BehaviorConfig;
use herd_core::geometry::{slerp_yaw, yaw_delta};
use herd_core::Vec2;
use serde::Serialize;

/// Where an agent is in its wander cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Moving,
    RotatingToDefault,
    Suspended,
}

herd_core::simple_display! {
    Phase {
        Idle => "idle",
        Moving => "moving",
        RotatingToDefault => "rotating",
        Suspended => "suspended",
    }
}

/// Result of one movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Arrived,
}

/// Position, heading and movement signals of one agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Motion {
    pub position: Vec2,
    /// Yaw in degrees.
    pub heading: f32,
    pub destination: Option<Vec2>,
    pub is_moving: bool,
    /// Current speed signal, units per second. Zero unless moving.
    pub speed: f32,
    pub phase: Phase,
}

impl Motion {
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self { position, heading, destination: None, is_moving: false, speed: 0.0, phase: Phase::Idle }
    }

    pub fn begin_move(&mut self, destination: Vec2) {
        self.destination = Some(destination);
        self.phase = Phase::Moving;
    }

    /// Advance toward the destination by `dt` seconds at
    /// `move_speed * speed_factor`, turning the heading toward the direction
    /// of travel. Arrival clears the destination and zeroes the speed.
    pub fn step_towards(&mut self, config: &BehaviorConfig, speed_factor: f32, dt: f32) -> Step {
        let Some(destination) = self.destination else {
            self.halt();
            return Step::Arrived;
        };
        let offset = destination - self.position;
        let distance = offset.length();
        let Some(direction) = offset.normalized().filter(|_| distance >= config.arrival_epsilon) else {
            self.halt();
            return Step::Arrived;
        };

        self.speed = config.move_speed * speed_factor;
        self.is_moving = true;
        let travel = (self.speed * dt.max(0.0)).min(distance);
        self.position = self.position + direction * travel;
        self.heading = slerp_yaw(self.heading, direction.yaw(), config.rotation_speed * dt);
        Step::Continue
    }

    /// Turn toward `target_yaw`. Returns true once within the angular
    /// tolerance, snapping exactly onto the target.
    pub fn step_rotation(&mut self, target_yaw: f32, config: &BehaviorConfig, dt: f32) -> bool {
        if yaw_delta(self.heading, target_yaw).abs() <= config.angular_tolerance {
            self.heading = target_yaw;
            return true;
        }
        self.heading = slerp_yaw(self.heading, target_yaw, config.rotation_speed * dt);
        if yaw_delta(self.heading, target_yaw).abs() <= config.angular_tolerance {
            self.heading = target_yaw;
            return true;
        }
        false
    }

    /// Stop in place: zero speed, not moving, no destination.
    pub fn halt(&mut self) {
        self.destination = None;
        self.is_moving = false;
        self.speed = 0.0;
    }
}

#[cfg(test)]
#[path = "locomotion_tests.rs"]
mod tests;
