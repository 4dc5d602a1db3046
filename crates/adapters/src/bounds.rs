// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Destination pickers for agent locomotion.

use herd_core::{Rect, Vec2};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Errors from constructing a bounds provider
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundsError {
    #[error("bounds rectangle has no area: {0:?}")]
    EmptyRegion(Rect),
    #[error("no waypoints configured")]
    NoWaypoints,
}

/// Supplies destinations for idle agents
pub trait BoundsProvider: Send + Sync + 'static {
    fn random_point(&self) -> Vec2;
}

/// Uniformly random points inside a rectangle.
pub struct RectBounds {
    rect: Rect,
    rng: Mutex<StdRng>,
}

impl RectBounds {
    pub fn new(rect: Rect) -> Result<Self, BoundsError> {
        Self::with_rng(rect, StdRng::from_entropy())
    }

    /// Deterministic sequence of points, for reproducible runs.
    pub fn seeded(rect: Rect, seed: u64) -> Result<Self, BoundsError> {
        Self::with_rng(rect, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rect: Rect, rng: StdRng) -> Result<Self, BoundsError> {
        if rect.is_empty() {
            return Err(BoundsError::EmptyRegion(rect));
        }
        Ok(Self { rect, rng: Mutex::new(rng) })
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl BoundsProvider for RectBounds {
    fn random_point(&self) -> Vec2 {
        let mut rng = self.rng.lock();
        Vec2::new(
            rng.gen_range(self.rect.min.x..=self.rect.max.x),
            rng.gen_range(self.rect.min.z..=self.rect.max.z),
        )
    }
}

/// Uniform pick among fixed locomotion points.
pub struct WaypointBounds {
    points: Vec<Vec2>,
    rng: Mutex<StdRng>,
}

impl WaypointBounds {
    pub fn new(points: Vec<Vec2>) -> Result<Self, BoundsError> {
        if points.is_empty() {
            return Err(BoundsError::NoWaypoints);
        }
        Ok(Self { points, rng: Mutex::new(StdRng::from_entropy()) })
    }
}

impl BoundsProvider for WaypointBounds {
    fn random_point(&self) -> Vec2 {
        let idx = self.rng.lock().gen_range(0..self.points.len());
        self.points[idx]
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::BoundsProvider;
    use herd_core::Vec2;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct FakeBoundsState {
        points: Vec<Vec2>,
        next: usize,
        calls: usize,
    }

    /// Fake bounds returning scripted points in order, cycling.
    #[derive(Clone)]
    pub struct FakeBounds {
        inner: Arc<Mutex<FakeBoundsState>>,
    }

    impl FakeBounds {
        /// An empty script always answers the origin.
        pub fn new(points: Vec<Vec2>) -> Self {
            Self { inner: Arc::new(Mutex::new(FakeBoundsState { points, next: 0, calls: 0 })) }
        }

        pub fn calls(&self) -> usize {
            self.inner.lock().calls
        }
    }

    impl BoundsProvider for FakeBounds {
        fn random_point(&self) -> Vec2 {
            let mut state = self.inner.lock();
            state.calls += 1;
            if state.points.is_empty() {
                return Vec2::ZERO;
            }
            let point = state.points[state.next % state.points.len()];
            state.next += 1;
            point
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeBounds;

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
