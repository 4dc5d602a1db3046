// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Horizontal-plane geometry for agent locomotion.
//!
//! Positions live on the ground plane (`x`, `z`). Headings are yaw angles in
//! degrees, measured clockwise from `+z`, normalized to `(-180, 180]`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Vec2 {
    pub x: f32,
    pub z: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, z: 0.0 };

    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or `None` for a (near) zero vector.
    pub fn normalized(self) -> Option<Vec2> {
        let len = self.length();
        if len <= f32::EPSILON || !len.is_finite() {
            return None;
        }
        Some(Vec2::new(self.x / len, self.z / len))
    }

    /// Yaw angle in degrees that faces along this vector.
    pub fn yaw(self) -> f32 {
        normalize_yaw(self.x.atan2(self.z).to_degrees())
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.z * rhs)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, z]: [f32; 2]) -> Self {
        Vec2::new(x, z)
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.z]
    }
}

/// Normalize a yaw angle into `(-180, 180]`.
pub fn normalize_yaw(deg: f32) -> f32 {
    let mut a = deg % 360.0;
    if a <= -180.0 {
        a += 360.0;
    } else if a > 180.0 {
        a -= 360.0;
    }
    a
}

/// Shortest signed rotation from `from` to `to`, in degrees.
pub fn yaw_delta(from: f32, to: f32) -> f32 {
    normalize_yaw(to - from)
}

/// Interpolate `current` toward `target` along the shortest arc.
///
/// `t` is clamped to `[0, 1]`; `t = 1` lands exactly on `target`.
pub fn slerp_yaw(current: f32, target: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        return normalize_yaw(target);
    }
    normalize_yaw(current + yaw_delta(current, target) * t)
}

/// Axis-aligned rectangle on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// True when the rectangle has no interior on either axis.
    pub fn is_empty(&self) -> bool {
        !(self.max.x > self.min.x && self.max.z > self.min.z)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.z >= self.min.z && p.z <= self.max.z
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.min.x + self.max.x) / 2.0, (self.min.z + self.max.z) / 2.0)
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
